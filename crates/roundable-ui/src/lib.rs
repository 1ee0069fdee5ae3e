//! Roundable UI — rounded corners and borders that follow a view's bounds.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use roundable_ui::prelude::*;
//!
//! let queue = UiQueue::new();
//! let mut avatar = ViewNode::new(Rect::from_size(64.0, 64.0)).rounded(&queue);
//! avatar.set_round_method(RoundingMethod::complete());
//! avatar.set_border(Some(Border::new(1.0, Color::WHITE)));
//!
//! // Once per event-loop turn:
//! queue.run_turn()?;
//!
//! // Layout changes re-round synchronously.
//! avatar.view().resize(48.0, 48.0);
//! ```
//!
//! # Rounding a custom view
//!
//! Implement [`View`](view::View) for any type that can report its bounds,
//! expose a [`Layer`](roundable_engine::layer::Layer) and notify a
//! [`BoundsNotifier`](observe::BoundsNotifier) when its bounds are assigned.
//! It then gets `.rounded(&queue)` through [`IntoRounded`](roundable::IntoRounded).

pub mod observe;
pub mod roundable;
pub mod rounding;
pub mod view;

/// Everything needed to round views — import this in view code.
pub mod prelude {
    pub use crate::observe::{BoundsChange, BoundsNotifier, BoundsObserver, Subscription};
    pub use crate::roundable::{IntoRounded, Roundable, Rounded};
    pub use crate::rounding::{Axis, RoundingConfig, RoundingController, RoundingMethod};
    pub use crate::view::{View, ViewId, ViewNode};

    // Engine primitives every caller needs.
    pub use roundable_engine::coords::{CornerRadii, Corners, Rect, Vec2};
    pub use roundable_engine::layer::Layer;
    pub use roundable_engine::paint::Color;
    pub use roundable_engine::queue::{QueueError, UiQueue};
    pub use roundable_engine::scene::Border;
}
