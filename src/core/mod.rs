//! Core client logic, independent of any rendering.
//!
//! This module provides:
//! - [`ApiClient`] request pipeline over a [`Transport`]
//! - [`SessionStore`] token and profile state
//! - [`guard`] navigation rules
//! - [`KeyValueStore`] persistence and the [`platform`] side-effect seams

pub mod client;
pub mod error;
pub mod guard;
pub mod observer;
pub mod platform;
pub mod session;
pub mod storage;
pub mod transport;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult, StorageError, TransportError};
pub use guard::{Navigation, guard};
pub use session::SessionStore;
pub use storage::{KeyValueStore, LocalStore, MemoryStore};
pub use transport::Transport;
