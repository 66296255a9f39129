use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: usize,
    listeners: Vec<(usize, Listener<T>)>,
}

/// Single-threaded observable value. Listeners are notified only when the
/// value actually changes, and are removed when their `Subscription` drops.
pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Returns whether the value changed. A listener unsubscribed by an
    /// earlier listener in the same round is skipped.
    pub fn set(&self, value: T) -> bool {
        let listeners: Vec<(usize, Listener<T>)> = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
            inner.listeners.clone()
        };
        // borrow released so listeners may read the store or unsubscribe
        for (id, listener) in listeners {
            if self.is_subscribed(id) {
                listener(&value);
            }
        }
        true
    }

    fn is_subscribed(&self, id: usize) -> bool {
        self.inner.borrow().listeners.iter().any(|(lid, _)| *lid == id)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Runs its cancel action exactly once, on drop or on `cancel`.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F: FnOnce() + 'static>(cancel: F) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notifies_only_on_change() {
        let store = Store::new(false);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(!store.set(false));
        assert!(store.set(true));
        assert!(!store.set(true));
        assert!(store.set(false));
        assert_eq!(calls.get(), 2);
        assert!(!store.get());
    }

    #[test]
    fn dropped_subscription_receives_nothing() {
        let store = Store::new(0u32);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = store.subscribe(move |v| sink.borrow_mut().push(*v));

        store.set(1);
        drop(sub);
        store.set(2);
        store.set(3);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn explicit_cancel_runs_once() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        sub.cancel();
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = Store::new(String::new());
        let sub = store.subscribe(|_| {});
        drop(store);
        drop(sub);
    }

    #[test]
    fn listener_may_unsubscribe_others_during_notify() {
        let store = Store::new(0);
        let held: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let victim_calls = Rc::new(Cell::new(0));

        let slot = held.clone();
        let _killer = store.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        let counter = victim_calls.clone();
        *held.borrow_mut() = Some(store.subscribe(move |_| counter.set(counter.get() + 1)));

        store.set(1);
        store.set(2);
        assert_eq!(victim_calls.get(), 0);
        assert_eq!(store.listener_count(), 1);
        assert!(held.borrow().is_none());
    }
}
