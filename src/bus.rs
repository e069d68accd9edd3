//! Synchronous fan-out of state snapshots to registered listeners.
//!
//! Delivery happens on the caller's thread before `notify` returns. The
//! registry lock is released before any listener runs, so a listener may
//! subscribe, unsubscribe, or trigger another mutation from inside its
//! callback. A nested mutation finishes its own fan-out before the outer
//! one resumes. With [`SubscriptionBus::notify_while`] the outer fan-out
//! stops there, so no listener receives a snapshot older than the last
//! one it was given.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// A registered callback. Identity is the `Arc` allocation.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Type-erased removal hook so [`Subscription`] need not be generic.
trait Detach: Send + Sync {
    fn detach(&self, id: u64) -> bool;
}

impl<T: 'static> Detach for Mutex<Registry<T>> {
    fn detach(&self, id: u64) -> bool {
        let mut registry = self.lock();
        let before = registry.entries.len();
        registry.entries.retain(|(entry_id, _)| *entry_id != id);
        registry.entries.len() != before
    }
}

/// Set of listeners receiving `&T` on every notification.
pub struct SubscriptionBus<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Clone for SubscriptionBus<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T: 'static> Default for SubscriptionBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> SubscriptionBus<T> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register `listener`.
    ///
    /// Registering the same `Arc` twice returns a handle to the existing
    /// registration; the listener still fires once per notification.
    pub fn subscribe(&self, listener: Listener<T>) -> Subscription {
        let mut registry = self.registry.lock();
        if let Some((id, _)) = registry
            .entries
            .iter()
            .find(|(_, existing)| Arc::ptr_eq(existing, &listener))
        {
            tracing::debug!(listener = *id, "Listener already registered");
            return self.handle(*id);
        }

        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, listener));
        drop(registry);
        self.handle(id)
    }

    /// Register a closure. Each call creates a distinct listener.
    pub fn subscribe_fn<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(listener))
    }

    /// Deliver `payload` to every listener in registration order.
    ///
    /// A panicking listener is logged and skipped; the remaining listeners
    /// still receive the payload. Returns how many listeners completed.
    pub fn notify(&self, payload: &T) -> usize {
        self.notify_while(payload, || true)
    }

    /// Like [`notify`](Self::notify), but checks `current` before each
    /// listener and stops once it returns `false`, i.e. once `payload`
    /// has been superseded by a newer notification.
    pub fn notify_while(&self, payload: &T, current: impl Fn() -> bool) -> usize {
        let listeners: Vec<(u64, Listener<T>)> = self.registry.lock().entries.clone();

        let mut delivered = 0;
        for (id, listener) in listeners {
            if !current() {
                tracing::debug!(listener = id, "Notification superseded, stopping delivery");
                break;
            }
            match catch_unwind(AssertUnwindSafe(|| listener(payload))) {
                Ok(()) => delivered += 1,
                Err(_) => {
                    tracing::error!(listener = id, "Listener panicked, continuing delivery");
                }
            }
        }
        delivered
    }

    pub fn len(&self) -> usize {
        self.registry.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn handle(&self, id: u64) -> Subscription {
        let registry: Arc<dyn Detach> = self.registry.clone();
        Subscription {
            id,
            registry: Arc::downgrade(&registry),
        }
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
#[derive(Clone)]
pub struct Subscription {
    id: u64,
    registry: Weak<dyn Detach>,
}

impl Subscription {
    /// Remove the listener. Safe to call any number of times, and after
    /// the bus itself is gone. Returns `true` only on the call that
    /// actually removed it.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.detach(self.id),
            None => false,
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
