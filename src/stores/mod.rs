//! Persisted presentation preferences.
//!
//! - [`ThemeStore`] - light/dark/auto colour theme
//! - [`LocaleStore`] - interface language

mod locale;
mod theme;

pub use locale::LocaleStore;
pub use theme::ThemeStore;
