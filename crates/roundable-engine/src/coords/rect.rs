use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Equality is value equality over origin and size, which is what bounds
/// observers compare against.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size at the origin, the usual shape of a view's bounds.
    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.size.x < 0.0 {
            r.origin.x += r.size.x;
            r.size.x = -r.size.x;
        }
        if r.size.y < 0.0 {
            r.origin.y += r.size.y;
            r.size.y = -r.size.y;
        }
        r
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = a.max().x.min(b.max().x);
        let y1 = a.max().y.min(b.max().y);

        if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}

impl From<Rect> for kurbo::Rect {
    #[inline]
    fn from(r: Rect) -> Self {
        let max = r.max();
        kurbo::Rect::new(
            f64::from(r.origin.x),
            f64::from(r.origin.y),
            f64::from(max.x),
            f64::from(max.y),
        )
    }
}

impl From<kurbo::Rect> for Rect {
    #[inline]
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Rect::new(r.x0 as f32, r.y0 as f32, r.width() as f32, r.height() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── equality ──────────────────────────────────────────────────────────

    #[test]
    fn equal_values_compare_equal() {
        assert_eq!(Rect::from_size(100.0, 40.0), r(0.0, 0.0, 100.0, 40.0));
        assert_ne!(Rect::from_size(100.0, 40.0), Rect::from_size(100.0, 60.0));
    }

    #[test]
    fn origin_participates_in_equality() {
        assert_ne!(r(1.0, 0.0, 10.0, 10.0), r(0.0, 0.0, 10.0, 10.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_flips_negative_extent() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn zero_and_negative_sizes_are_empty() {
        assert!(Rect::zero().is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(r(0.0, 0.0, -5.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn nan_size_is_empty() {
        assert!(r(0.0, 0.0, f32::NAN, 5.0).is_empty());
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0));
        assert_eq!(i, Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_is_none() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    // ── kurbo ─────────────────────────────────────────────────────────────

    #[test]
    fn kurbo_rect_uses_corner_coordinates() {
        let k = kurbo::Rect::from(r(2.0, 3.0, 10.0, 4.0));
        assert_eq!(k, kurbo::Rect::new(2.0, 3.0, 12.0, 7.0));
        assert_eq!(Rect::from(k), r(2.0, 3.0, 10.0, 4.0));
    }
}
