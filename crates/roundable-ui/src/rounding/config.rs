use roundable_engine::coords::Corners;
use roundable_engine::scene::Border;

use super::RoundingMethod;

/// Everything a view's rounding depends on, apart from its bounds.
///
/// Defaults: no rounding, all corners, no border.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RoundingConfig {
    pub method: RoundingMethod,
    pub corners: Corners,
    pub border: Option<Border>,
}
