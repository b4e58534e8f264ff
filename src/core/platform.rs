//! Side-effect sinks the client logic talks to.
//!
//! The browser implementations live here; host tests substitute recording
//! doubles so request handling and stores run without a DOM.

use crate::config::DARK_CLASS;
use crate::utils::dom;

/// User-visible transient notifications (toasts).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Full-page navigation that discards in-memory state.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Presentation state of the root document.
pub trait Document {
    /// Set the `lang` attribute of the root element.
    fn set_lang(&self, lang: &str);
    /// Add or remove the dark-mode class on the root element.
    fn set_dark(&self, dark: bool);
    fn set_title(&self, title: &str);
}

/// Navigates by assigning `window.location.href`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = dom::window()
            && window.location().set_href(path).is_err()
        {
            log::warn!("hard navigation to {path} failed");
        }
    }
}

/// Writes to `document.documentElement` and `document.title`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDocument;

impl Document for BrowserDocument {
    fn set_lang(&self, lang: &str) {
        if let Some(root) = dom::root_element() {
            let _ = root.set_attribute("lang", lang);
        }
    }

    fn set_dark(&self, dark: bool) {
        if let Some(root) = dom::root_element() {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, dark);
        }
    }

    fn set_title(&self, title: &str) {
        if let Some(document) = dom::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}
