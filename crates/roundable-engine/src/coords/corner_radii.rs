use super::Corners;

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
/// Values are stored as requested; see
/// [`RoundedRectPath::effective_radii`](crate::path::RoundedRectPath::effective_radii)
/// for the clamped geometry. Converts to and from [`kurbo::RoundedRectRadii`],
/// which uses the same corner order.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Radius `r` on the corners in `corners`, zero on the rest.
    pub fn for_corners(corners: Corners, r: f32) -> Self {
        let pick = |c: Corners| if corners.contains(c) { r } else { 0.0 };
        Self {
            top_left: pick(Corners::TOP_LEFT),
            top_right: pick(Corners::TOP_RIGHT),
            bottom_right: pick(Corners::BOTTOM_RIGHT),
            bottom_left: pick(Corners::BOTTOM_LEFT),
        }
    }

    /// Applies `f` to every radius.
    #[inline]
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.top_left), f(self.top_right), f(self.bottom_right), f(self.bottom_left))
    }

    /// Corners with a strictly positive radius.
    pub fn rounded_corners(self) -> Corners {
        let mut out = Corners::empty();
        for (corner, r) in [
            (Corners::TOP_LEFT, self.top_left),
            (Corners::TOP_RIGHT, self.top_right),
            (Corners::BOTTOM_RIGHT, self.bottom_right),
            (Corners::BOTTOM_LEFT, self.bottom_left),
        ] {
            if r > 0.0 {
                out |= corner;
            }
        }
        out
    }
}

impl From<CornerRadii> for kurbo::RoundedRectRadii {
    #[inline]
    fn from(r: CornerRadii) -> Self {
        kurbo::RoundedRectRadii::new(
            f64::from(r.top_left),
            f64::from(r.top_right),
            f64::from(r.bottom_right),
            f64::from(r.bottom_left),
        )
    }
}

impl From<kurbo::RoundedRectRadii> for CornerRadii {
    #[inline]
    fn from(r: kurbo::RoundedRectRadii) -> Self {
        CornerRadii::new(r.top_left as f32, r.top_right as f32, r.bottom_right as f32, r.bottom_left as f32)
    }
}
