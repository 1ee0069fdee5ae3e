//! Coordinate and geometry types shared by the render layer and views.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod corners;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use corners::Corners;
pub use rect::Rect;
pub use vec2::Vec2;
