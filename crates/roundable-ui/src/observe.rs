//! Bounds observation.
//!
//! [`BoundsNotifier`] is the registry a view embeds to offer the
//! [`View::observe_bounds`](crate::view::View::observe_bounds) capability.
//! Every registration returns a [`Subscription`] guard; dropping the guard
//! deregisters the observer, and a guard that outlives its notifier drops
//! as a no-op.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use roundable_engine::coords::Rect;

/// One bounds notification.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundsChange {
    pub old: Rect,
    pub new: Rect,
    /// `true` for the synchronous call made at registration time.
    /// `old` and `new` are then both the current bounds.
    pub initial: bool,
}

impl BoundsChange {
    /// `true` if the bounds actually changed value.
    #[inline]
    pub fn is_change(&self) -> bool {
        self.old != self.new
    }
}

/// Boxed observer callback accepted by views.
pub type BoundsObserver = Box<dyn FnMut(&BoundsChange)>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct ObserverId(u64);

type Callback = Rc<RefCell<dyn FnMut(&BoundsChange)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    observers: Vec<(ObserverId, Callback)>,
}

impl Registry {
    fn contains(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|(i, _)| *i == id)
    }
}

/// Registry of bounds observers for one view.
#[derive(Default)]
pub struct BoundsNotifier {
    registry: Rc<RefCell<Registry>>,
}

impl BoundsNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer` and calls it once immediately with `current`.
    pub fn subscribe(
        &self,
        current: Rect,
        observer: impl FnMut(&BoundsChange) + 'static,
    ) -> Subscription {
        let callback: Callback = Rc::new(RefCell::new(observer));
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = ObserverId(registry.next_id);
            registry.next_id += 1;
            registry.observers.push((id, callback.clone()));
            id
        };

        let initial = BoundsChange { old: current, new: current, initial: true };
        (&mut *callback.borrow_mut())(&initial);

        Subscription { registry: Rc::downgrade(&self.registry), id }
    }

    /// Delivers `{old, new}` to every registered observer, in registration order.
    ///
    /// Delivery happens on every call, equal values included; observers decide
    /// what counts as a change. An observer removed by an earlier observer in
    /// the same delivery is skipped. An observer already running further up
    /// the stack (re-entrant notify) is skipped too.
    pub fn notify(&self, old: Rect, new: Rect) {
        let snapshot: Vec<(ObserverId, Callback)> = self.registry.borrow().observers.clone();
        let change = BoundsChange { old, new, initial: false };

        for (id, callback) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            match callback.try_borrow_mut() {
                Ok(mut f) => (&mut *f)(&change),
                Err(_) => log::trace!("bounds observer {} skipped: already running", id.0),
            }
        }
    }

    /// Number of live registrations.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.registry.borrow().observers.len()
    }
}

impl fmt::Debug for BoundsNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundsNotifier").field("observers", &self.observer_count()).finish()
    }
}

/// Registration guard returned by [`BoundsNotifier::subscribe`].
///
/// The observer stays registered for as long as the guard lives.
#[must_use = "dropping a Subscription deregisters the observer"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: ObserverId,
}

impl Subscription {
    /// `true` while the notifier is alive and still holds this registration.
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|r| r.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // The callback may own subscriptions to this same registry, so it is
        // dropped only after the borrow ends.
        let removed = {
            let mut registry = registry.borrow_mut();
            let index = registry.observers.iter().position(|(id, _)| *id == self.id);
            index.map(|i| registry.observers.remove(i))
        };
        drop(removed);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id.0)
            .field("active", &self.is_active())
            .finish()
    }
}
