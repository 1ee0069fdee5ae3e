use std::cell::{Cell, Ref, RefCell, RefMut};
use std::sync::atomic::{AtomicU64, Ordering};

use roundable_engine::coords::Rect;
use roundable_engine::layer::Layer;
use roundable_engine::scene::DrawList;

use crate::observe::{BoundsNotifier, BoundsObserver, Subscription};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

// ── ViewId ────────────────────────────────────────────────────────────────

/// Stable identity of a view, for diagnostics.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    /// Allocate a new, globally unique `ViewId`.
    pub fn new() -> Self {
        ViewId(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

// ── View trait ────────────────────────────────────────────────────────────

/// What a view must offer to have its corners rounded.
///
/// Views use interior mutability: they are shared through `Rc` with the
/// rounding controller's weak back-reference and mutated through `&self`
/// on the UI thread.
///
/// # Implementing a custom view
///
/// Embed a [`BoundsNotifier`], call [`BoundsNotifier::notify`] from the
/// bounds setter, and forward `observe_bounds` to
/// [`BoundsNotifier::subscribe`] with the current bounds.
pub trait View: 'static {
    fn id(&self) -> ViewId;

    /// Current bounds in the view's own coordinate space.
    fn bounds(&self) -> Rect;

    fn layer(&self) -> Ref<'_, Layer>;

    fn layer_mut(&self) -> RefMut<'_, Layer>;

    /// Registers a bounds observer.
    ///
    /// The observer is called once immediately (`initial = true`), then on
    /// every bounds assignment until the returned guard is dropped.
    fn observe_bounds(&self, observer: BoundsObserver) -> Subscription;

    /// Flattens the view's current render state into a fresh draw list.
    fn snapshot(&self) -> DrawList {
        let mut list = DrawList::new();
        self.layer().record(self.bounds(), &mut list);
        list
    }
}

// ── ViewNode ──────────────────────────────────────────────────────────────

/// A plain view: bounds, a render layer, and bounds observers.
#[derive(Debug)]
pub struct ViewNode {
    id: ViewId,
    bounds: Cell<Rect>,
    layer: RefCell<Layer>,
    notifier: BoundsNotifier,
}

impl ViewNode {
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: ViewId::new(),
            bounds: Cell::new(bounds),
            layer: RefCell::new(Layer::new()),
            notifier: BoundsNotifier::new(),
        }
    }

    /// Assigns new bounds and notifies observers, even if the value is unchanged.
    pub fn set_bounds(&self, bounds: Rect) {
        let old = self.bounds.replace(bounds);
        self.notifier.notify(old, bounds);
    }

    /// Changes the size, keeping the bounds origin.
    pub fn resize(&self, width: f32, height: f32) {
        let origin = self.bounds.get().origin;
        self.set_bounds(Rect::new(origin.x, origin.y, width, height));
    }

    /// Number of registered bounds observers.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.notifier.observer_count()
    }
}

impl Default for ViewNode {
    fn default() -> Self {
        Self::new(Rect::zero())
    }
}

impl View for ViewNode {
    #[inline]
    fn id(&self) -> ViewId {
        self.id
    }

    #[inline]
    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    #[inline]
    fn layer(&self) -> Ref<'_, Layer> {
        self.layer.borrow()
    }

    #[inline]
    fn layer_mut(&self) -> RefMut<'_, Layer> {
        self.layer.borrow_mut()
    }

    fn observe_bounds(&self, observer: BoundsObserver) -> Subscription {
        self.notifier.subscribe(self.bounds.get(), observer)
    }
}
