//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - window, localStorage, root element and history access
//! - [`FetchTransport`] - Fetch API transport with timeout

pub mod dom;
mod fetch;

pub use fetch::FetchTransport;
