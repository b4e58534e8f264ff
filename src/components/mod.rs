//! UI components built with Leptos.
//!
//! - [`router`] - Path routing and in-app links (main entry point)
//! - [`pages`] - Route views
//! - [`toast`] - Notification overlay

pub mod pages;
pub mod router;
pub mod toast;

pub use router::AppRouter;
pub use toast::{ToastQueue, Toasts};
