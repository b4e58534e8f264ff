//! Interface language preference.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::storage_keys;
use crate::core::observer::Listeners;
use crate::core::platform::Document;
use crate::core::storage::{KeyValueStore, persist};
use crate::models::Locale;

/// Current locale. Message catalogs subscribe instead of being reached into.
pub struct LocaleStore {
    storage: Rc<dyn KeyValueStore>,
    document: Rc<dyn Document>,
    locale: Cell<Locale>,
    listeners: Listeners<Locale>,
}

impl LocaleStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, document: Rc<dyn Document>) -> Self {
        let locale = storage
            .get(storage_keys::LOCALE)
            .and_then(|value| Locale::parse(&value))
            .unwrap_or_default();
        document.set_lang(locale.as_str());

        Self {
            storage,
            document,
            locale: Cell::new(locale),
            listeners: Listeners::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set(&self, locale: Locale) {
        self.locale.set(locale);
        persist(self.storage.as_ref(), storage_keys::LOCALE, locale.as_str());
        self.document.set_lang(locale.as_str());
        log::debug!("locale set to {locale}");
        self.listeners.emit(&locale);
    }

    pub fn subscribe(&self, callback: impl Fn(&Locale) + 'static) {
        self.listeners.add(callback);
    }

    pub fn dispose(&self) {
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::testing::RecordingDocument;

    #[test]
    fn test_restores_persisted_locale() {
        let storage = Rc::new(MemoryStore::with_entries([("locale", "en-US")]));
        let document = Rc::new(RecordingDocument::default());

        let locale = LocaleStore::new(storage, document.clone());

        assert_eq!(locale.locale(), Locale::EnUs);
        assert_eq!(document.lang.borrow().as_deref(), Some("en-US"));
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let storage = Rc::new(MemoryStore::with_entries([("locale", "klingon")]));
        let locale = LocaleStore::new(storage, Rc::new(RecordingDocument::default()));
        assert_eq!(locale.locale(), Locale::ZhCn);
    }

    #[test]
    fn test_set_persists_and_notifies() {
        let storage = Rc::new(MemoryStore::new());
        let document = Rc::new(RecordingDocument::default());
        let locale = LocaleStore::new(storage.clone(), document.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        locale.subscribe(move |l| sink.borrow_mut().push(*l));

        locale.set(Locale::EnUs);

        assert_eq!(storage.get("locale").as_deref(), Some("en-US"));
        assert_eq!(document.lang.borrow().as_deref(), Some("en-US"));
        assert_eq!(*seen.borrow(), vec![Locale::EnUs]);
    }
}
