//! Roundable engine crate.
//!
//! Renderer-facing pieces shared by views: geometry, colors, rounded-rect
//! paths, per-view render layers, a draw stream to flatten them into, and
//! the UI task queue that defers work to the next turn.

pub mod coords;
pub mod layer;
pub mod logging;
pub mod paint;
pub mod path;
pub mod queue;
pub mod scene;
