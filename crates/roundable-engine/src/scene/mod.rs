//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - carry the active clip shape with every item

mod clip;
mod cmd;
mod key;
mod list;

pub use clip::ClipShape;
pub use cmd::{Border, DrawCmd, FillCmd, StrokeCmd};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
