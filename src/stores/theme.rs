//! Colour theme preference.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::storage_keys;
use crate::core::observer::Listeners;
use crate::core::platform::Document;
use crate::core::storage::{KeyValueStore, persist};
use crate::models::Theme;

/// Theme preference plus the system colour scheme it may follow.
///
/// The dark class on the document always mirrors [`ThemeStore::is_dark`].
/// Subscribers receive the resolved dark flag after every change.
pub struct ThemeStore {
    storage: Rc<dyn KeyValueStore>,
    document: Rc<dyn Document>,
    preference: Cell<Theme>,
    system_dark: Cell<bool>,
    listeners: Listeners<bool>,
}

impl ThemeStore {
    /// Read the persisted preference and apply it to the document.
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        document: Rc<dyn Document>,
        system_dark: bool,
    ) -> Self {
        let preference = storage
            .get(storage_keys::THEME)
            .and_then(|value| {
                let parsed = Theme::parse(&value);
                if parsed.is_none() {
                    log::warn!("ignoring unknown theme {value:?}");
                }
                parsed
            })
            .unwrap_or_default();

        let store = Self {
            storage,
            document,
            preference: Cell::new(preference),
            system_dark: Cell::new(system_dark),
            listeners: Listeners::new(),
        };
        store.document.set_dark(store.is_dark());
        store
    }

    pub fn preference(&self) -> Theme {
        self.preference.get()
    }

    pub fn is_dark(&self) -> bool {
        self.preference.get().resolve(self.system_dark.get())
    }

    pub fn set(&self, theme: Theme) {
        self.preference.set(theme);
        persist(self.storage.as_ref(), storage_keys::THEME, theme.as_str());
        log::debug!("theme set to {theme}");
        self.apply();
    }

    /// Record a change of the operating system colour scheme.
    ///
    /// Only an `Auto` preference re-renders.
    pub fn on_system_change(&self, dark: bool) {
        self.system_dark.set(dark);
        if self.preference.get() == Theme::Auto {
            self.apply();
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&bool) + 'static) {
        self.listeners.add(callback);
    }

    pub fn dispose(&self) {
        self.listeners.clear();
    }

    fn apply(&self) {
        let dark = self.is_dark();
        self.document.set_dark(dark);
        self.listeners.emit(&dark);
    }
}
