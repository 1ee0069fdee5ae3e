use roundable_engine::coords::Rect;

/// Axis whose extent sets the radius of [`RoundingMethod::Complete`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Radius is half the width.
    #[default]
    Horizontal,
    /// Radius is half the height.
    Vertical,
}

/// How a view's corners are rounded.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum RoundingMethod {
    /// Radius follows the bounds: half the extent along `axis`.
    Complete { axis: Axis },
    /// Fixed radius in logical pixels.
    Partial { radius: f32 },
    /// No mask. A border, if any, uses the layer's native border.
    #[default]
    None,
}

impl RoundingMethod {
    /// Fully rounded along the horizontal axis (pill shape for wide views).
    #[inline]
    pub const fn complete() -> Self {
        Self::Complete { axis: Axis::Horizontal }
    }

    #[inline]
    pub const fn complete_along(axis: Axis) -> Self {
        Self::Complete { axis }
    }

    #[inline]
    pub const fn partial(radius: f32) -> Self {
        Self::Partial { radius }
    }

    /// Radius this method yields for `bounds`, or `None` for [`RoundingMethod::None`].
    ///
    /// Negative and NaN results clamp to zero.
    pub fn radius_for(self, bounds: Rect) -> Option<f32> {
        match self {
            Self::Complete { axis: Axis::Horizontal } => Some(non_negative(bounds.width() / 2.0)),
            Self::Complete { axis: Axis::Vertical } => Some(non_negative(bounds.height() / 2.0)),
            Self::Partial { radius } => Some(non_negative(radius)),
            Self::None => None,
        }
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v > 0.0 { v } else { 0.0 }
}
