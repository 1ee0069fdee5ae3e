//! Corner rounding for views.
//!
//! - [`RoundingMethod`] / [`RoundingConfig`]: what the caller asked for
//! - [`apply_rounding`]: evaluates a config against bounds and writes the
//!   view's layer (mask, native border, outline sublayer)
//! - [`RoundingController`]: per-view state that re-applies on every bounds
//!   change and schedules coalesced re-applies when the config changes

mod apply;
mod config;
mod controller;
mod method;

pub use apply::{apply_rounding, Applied};
pub use config::RoundingConfig;
pub use controller::RoundingController;
pub use method::{Axis, RoundingMethod};
