//! Route views.
//!
//! Markup is intentionally thin: the views call into the services on
//! [`AppContext`](crate::app::AppContext) and render what comes back.

mod home;
mod login;
mod page;
mod settings;

pub use home::Home;
pub use login::Login;
pub use page::Page;
pub use settings::Settings;
