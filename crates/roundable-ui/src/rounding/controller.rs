use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use roundable_engine::coords::Corners;
use roundable_engine::queue::{TaskKey, UiQueue};
use roundable_engine::scene::Border;

use crate::observe::{BoundsChange, Subscription};
use crate::view::{View, ViewId};

use super::{apply_rounding, RoundingConfig, RoundingMethod};

#[derive(Debug, Default)]
struct ControllerState {
    config: RoundingConfig,
    applies: u64,
}

/// Keeps one view's mask and border in sync with its rounding config and bounds.
///
/// The controller holds only a weak reference to its view. It observes the
/// view's bounds from construction until it is dropped:
///
/// - registration applies once immediately
/// - every bounds assignment with a different value applies synchronously
/// - config setters schedule one coalesced apply on the [`UiQueue`]
///
/// Dropping the controller drops its [`Subscription`], which deregisters the
/// observer; pending queued applies become no-ops.
pub struct RoundingController<V: View> {
    state: Rc<RefCell<ControllerState>>,
    view: Weak<V>,
    view_id: ViewId,
    queue: UiQueue,
    key: TaskKey,
    subscription: Option<Subscription>,
}

impl<V: View> RoundingController<V> {
    /// Creates a controller for `view` and starts observing its bounds.
    pub fn attach(view: &Rc<V>, queue: &UiQueue) -> Self {
        let state = Rc::new(RefCell::new(ControllerState::default()));

        let weak_view = Rc::downgrade(view);
        let weak_state = Rc::downgrade(&state);
        let subscription = view.observe_bounds(Box::new(move |change: &BoundsChange| {
            if change.initial || change.is_change() {
                reapply(&weak_view, &weak_state);
            }
        }));

        log::debug!("rounding controller attached to {:?}", view.id());

        Self {
            state,
            view: Rc::downgrade(view),
            view_id: view.id(),
            queue: queue.clone(),
            key: TaskKey::new(),
            subscription: Some(subscription),
        }
    }

    // ── config ────────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> RoundingConfig {
        self.state.borrow().config
    }

    #[inline]
    pub fn method(&self) -> RoundingMethod {
        self.state.borrow().config.method
    }

    #[inline]
    pub fn corners(&self) -> Corners {
        self.state.borrow().config.corners
    }

    #[inline]
    pub fn border(&self) -> Option<Border> {
        self.state.borrow().config.border
    }

    pub fn set_method(&mut self, method: RoundingMethod) {
        self.state.borrow_mut().config.method = method;
        self.schedule_apply();
    }

    pub fn set_corners(&mut self, corners: Corners) {
        self.state.borrow_mut().config.corners = corners;
        self.schedule_apply();
    }

    pub fn set_border(&mut self, border: Option<Border>) {
        self.state.borrow_mut().config.border = border;
        self.schedule_apply();
    }

    // ── applying ──────────────────────────────────────────────────────────

    /// Re-applies synchronously against the view's current bounds.
    ///
    /// A queued apply, if any, still runs on the next turn.
    pub fn apply_rounding(&self) {
        reapply(&self.view, &Rc::downgrade(&self.state));
    }

    /// Number of applies performed so far, the initial one included.
    #[inline]
    pub fn apply_count(&self) -> u64 {
        self.state.borrow().applies
    }

    /// `true` if a deferred apply is waiting on the queue.
    #[inline]
    pub fn is_apply_scheduled(&self) -> bool {
        self.queue.is_scheduled(self.key)
    }

    /// `true` while the bounds observer is registered.
    pub fn is_observing(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    fn schedule_apply(&self) {
        let view = self.view.clone();
        let state = Rc::downgrade(&self.state);
        self.queue.schedule(self.key, move || reapply(&view, &state));
    }
}

/// Applies the current config if both the view and the controller are alive.
fn reapply<V: View>(view: &Weak<V>, state: &Weak<RefCell<ControllerState>>) {
    let (Some(view), Some(state)) = (view.upgrade(), state.upgrade()) else {
        log::trace!("rounding apply skipped: view or controller gone");
        return;
    };

    let bounds = view.bounds();
    let config = state.borrow().config;
    let applied = apply_rounding(&mut view.layer_mut(), bounds, &config);
    state.borrow_mut().applies += 1;

    log::trace!("{:?}: {:?} over {:?}", view.id(), applied, bounds);
}

impl<V: View> Drop for RoundingController<V> {
    fn drop(&mut self) {
        // Deregister before the rest of the controller goes away.
        drop(self.subscription.take());
        log::debug!("rounding controller detached from {:?}", self.view_id);
    }
}

impl<V: View> fmt::Debug for RoundingController<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("RoundingController")
            .field("view", &self.view_id)
            .field("config", &state.config)
            .field("applies", &state.applies)
            .field("observing", &self.is_observing())
            .finish()
    }
}
