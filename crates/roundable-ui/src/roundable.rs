//! Rounding as view properties.
//!
//! [`Rounded`] decorates any [`View`] with the [`Roundable`] properties. The
//! controller behind them is created on the first property set; until then
//! the getters report the defaults and the view's layer is left alone.
//!
//! ```rust
//! use roundable_engine::coords::{Corners, Rect};
//! use roundable_engine::paint::Color;
//! use roundable_engine::queue::UiQueue;
//! use roundable_engine::scene::Border;
//! use roundable_ui::prelude::*;
//!
//! let queue = UiQueue::new();
//! let mut button = ViewNode::new(Rect::from_size(100.0, 40.0)).rounded(&queue);
//! button.set_round_method(RoundingMethod::complete());
//! button.set_border(Some(Border::new(1.0, Color::RED)));
//!
//! queue.run_turn().unwrap();
//! let radius = button.view().layer().mask().map(|m| m.radii().top_left);
//! assert_eq!(radius, Some(50.0));
//! assert_eq!(button.rounded_corners(), Corners::ALL);
//! ```

use std::rc::Rc;

use roundable_engine::coords::Corners;
use roundable_engine::queue::UiQueue;
use roundable_engine::scene::Border;

use crate::rounding::{apply_rounding, RoundingConfig, RoundingController, RoundingMethod};
use crate::view::View;

/// Rounding properties of a view.
///
/// Setters never apply on the spot: they schedule one apply for the next
/// queue turn, so several sets in a row produce a single update with the
/// last values. [`apply_rounding`](Roundable::apply_rounding) applies now.
pub trait Roundable {
    /// Defaults to [`RoundingMethod::None`].
    fn round_method(&self) -> RoundingMethod;
    fn set_round_method(&mut self, method: RoundingMethod);

    /// Defaults to [`Corners::ALL`].
    fn rounded_corners(&self) -> Corners;
    fn set_rounded_corners(&mut self, corners: Corners);

    /// Defaults to no border.
    fn border(&self) -> Option<Border>;
    fn set_border(&mut self, border: Option<Border>);

    /// Applies the current properties against the current bounds, synchronously.
    fn apply_rounding(&self);
}

/// A view together with its rounding controller.
///
/// `Rounded` holds the view strongly and the controller holds it weakly, so
/// the view lives exactly as long as `Rounded` (and any other `Rc` the caller
/// keeps). The controller is declared first and therefore dropped first,
/// deregistering its bounds observer while the view is still alive.
pub struct Rounded<V: View> {
    controller: Option<RoundingController<V>>,
    view: Rc<V>,
    queue: UiQueue,
}

impl<V: View> Rounded<V> {
    pub fn new(view: V, queue: &UiQueue) -> Self {
        Self::from_rc(Rc::new(view), queue)
    }

    /// Wraps a view that is shared elsewhere.
    pub fn from_rc(view: Rc<V>, queue: &UiQueue) -> Self {
        Self { controller: None, view, queue: queue.clone() }
    }

    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// A strong handle to the view.
    #[inline]
    pub fn view_rc(&self) -> Rc<V> {
        Rc::clone(&self.view)
    }

    /// The controller, once a property has been set.
    #[inline]
    pub fn controller(&self) -> Option<&RoundingController<V>> {
        self.controller.as_ref()
    }

    /// Detaches the controller and returns the view.
    ///
    /// The mask and border last applied stay on the layer but no longer follow
    /// bounds changes.
    pub fn into_inner(self) -> Rc<V> {
        let Self { controller, view, .. } = self;
        drop(controller);
        view
    }

    fn controller_mut(&mut self) -> &mut RoundingController<V> {
        self.controller
            .get_or_insert_with(|| RoundingController::attach(&self.view, &self.queue))
    }

    fn config(&self) -> RoundingConfig {
        self.controller.as_ref().map(RoundingController::config).unwrap_or_default()
    }
}

impl<V: View> Roundable for Rounded<V> {
    fn round_method(&self) -> RoundingMethod {
        self.config().method
    }

    fn set_round_method(&mut self, method: RoundingMethod) {
        self.controller_mut().set_method(method);
    }

    fn rounded_corners(&self) -> Corners {
        self.config().corners
    }

    fn set_rounded_corners(&mut self, corners: Corners) {
        self.controller_mut().set_corners(corners);
    }

    fn border(&self) -> Option<Border> {
        self.config().border
    }

    fn set_border(&mut self, border: Option<Border>) {
        self.controller_mut().set_border(border);
    }

    fn apply_rounding(&self) {
        match &self.controller {
            Some(controller) => controller.apply_rounding(),
            None => {
                let bounds = self.view.bounds();
                apply_rounding(&mut self.view.layer_mut(), bounds, &RoundingConfig::default());
            }
        }
    }
}

impl<V: View + std::fmt::Debug> std::fmt::Debug for Rounded<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rounded")
            .field("view", &self.view)
            .field("controller", &self.controller)
            .finish()
    }
}

/// `.rounded(&queue)` for every view.
pub trait IntoRounded: View + Sized {
    fn rounded(self, queue: &UiQueue) -> Rounded<Self> {
        Rounded::new(self, queue)
    }
}

impl<V: View> IntoRounded for V {}
