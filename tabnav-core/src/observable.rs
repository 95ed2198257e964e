//! Single-threaded observable value with synchronous change notification.
//!
//! [`Observable<T>`] keeps its value in `Rc<RefCell<..>>`; cloning a handle
//! shares the value and the subscriber list. Subscribers receive the current
//! value as soon as they subscribe and then every change, in registration
//! order. Setting a value equal to the current one is a no-op.
//!
//! Only this crate can set values: renderers get read access and
//! subscriptions, never the backing state.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    version: u64,
    /// Dead entries are pruned on notify.
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked value with change notification.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value without cloning
    pub fn with<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        f(&self.inner.borrow().value)
    }

    /// Bumped by one on every change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered subscribers, including dropped ones not yet pruned
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Subscribe to the value. `callback` runs immediately with the current
    /// value, then after each change until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));

        let current = self.get();
        strong(&current);

        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Replace the value, notifying subscribers if it changed.
    pub(crate) fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    fn notify(&self) {
        // Callbacks run without the borrow held so they may read the value.
        let (callbacks, value): (Vec<CallbackRc<T>>, T) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            let live = inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (live, inner.value.clone())
        };
        for callback in callbacks {
            callback(&value);
        }
    }
}

/// Keeps a subscription alive. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    _guard: Box<dyn Any>,
}

impl Subscription {
    /// Stop receiving values
    pub fn unsubscribe(self) {}
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
