//! Per-view render state.
//!
//! A [`Layer`] is what a view hands to the renderer: an optional clip mask,
//! the native border, a background fill, and an ordered list of sublayers.
//! [`Layer::record`] flattens it into a [`DrawList`](crate::scene::DrawList).
//!
//! The native border is drawn inside the mask, so a rounded mask cuts it
//! off at the corners. Border outline sublayers are drawn after the mask is
//! popped and stay visible.

mod sublayer;
mod tree;

pub use sublayer::{ContentLayer, OutlineLayer, Sublayer, SublayerId, SublayerRole};
pub use tree::Layer;
