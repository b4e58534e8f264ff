//! Change listeners for the client-side stores.

use std::cell::RefCell;
use std::rc::Rc;

/// Callbacks notified whenever a store value changes.
pub struct Listeners<T> {
    callbacks: RefCell<Vec<Rc<dyn Fn(&T)>>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            callbacks: RefCell::new(Vec::new()),
        }
    }

    pub fn add(&self, callback: impl Fn(&T) + 'static) {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Invoke every callback with `value`.
    ///
    /// Callbacks run on a snapshot, so they may register further listeners
    /// or mutate the owning store.
    pub fn emit(&self, value: &T) {
        let snapshot = self.callbacks.borrow().clone();
        for callback in snapshot {
            callback(value);
        }
    }

    pub fn clear(&self) {
        self.callbacks.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_and_clear() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(Cell::new(0));

        let sink = seen.clone();
        listeners.add(move |v| sink.set(sink.get() + v));
        listeners.emit(&3);
        listeners.emit(&4);
        assert_eq!(seen.get(), 7);

        listeners.clear();
        listeners.emit(&100);
        assert_eq!(seen.get(), 7);
        assert_eq!(listeners.len(), 0);
    }
}
