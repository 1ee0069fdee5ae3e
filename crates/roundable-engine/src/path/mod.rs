//! Vector paths used for clip masks and border outlines.
//!
//! Only the rounded-rectangle shape is needed by view masks. Its geometry
//! is a [`kurbo::RoundedRect`]; backends take the shape or its
//! [`BezPath`](kurbo::BezPath) outline.

mod rounded_rect;

pub use rounded_rect::RoundedRectPath;
