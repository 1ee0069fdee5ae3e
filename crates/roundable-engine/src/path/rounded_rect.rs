use kurbo::{BezPath, RoundedRect, RoundedRectRadii, Shape};

use crate::coords::{CornerRadii, Rect, Vec2};

/// A rectangle with independently rounded corners.
///
/// The requested radii are stored as given, so a view's mask reports the
/// radius it was asked for. Geometry goes through [`kurbo::RoundedRect`],
/// which clamps every radius to half the shorter side; negative and NaN
/// requests are zeroed before they reach it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RoundedRectPath {
    rect: Rect,
    radii: CornerRadii,
}

impl RoundedRectPath {
    #[inline]
    pub const fn new(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Radii as requested by the caller.
    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    /// Zero-area paths clip everything away.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    /// The shape handed to renderers.
    pub fn shape(&self) -> RoundedRect {
        let radii = self.radii.map(|v| if v > 0.0 { v } else { 0.0 });
        RoundedRect::from_rect(self.rect.into(), RoundedRectRadii::from(radii))
    }

    /// Radii after clamping to the rectangle.
    pub fn effective_radii(&self) -> CornerRadii {
        self.shape().radii().into()
    }

    /// Returns `true` if `p` lies inside the shape; the area cut away by a
    /// rounded corner is outside. Empty paths contain nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        !self.is_empty() && self.shape().contains(p.into())
    }

    /// The outline as a Bézier path, arcs flattened within `tolerance`.
    ///
    /// Empty rectangles produce an empty path.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        if self.is_empty() {
            return BezPath::new();
        }
        self.shape().to_path(tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Corners;
    use kurbo::PathEl;

    fn path(w: f32, h: f32, corners: Corners, r: f32) -> RoundedRectPath {
        RoundedRectPath::new(Rect::from_size(w, h), CornerRadii::for_corners(corners, r))
    }

    // ── effective_radii ───────────────────────────────────────────────────

    #[test]
    fn requested_radii_are_kept_verbatim() {
        let p = path(100.0, 40.0, Corners::ALL, 80.0);
        assert_eq!(p.radii(), CornerRadii::all(80.0));
    }

    #[test]
    fn effective_radii_clamp_to_half_the_short_side() {
        let p = path(100.0, 40.0, Corners::ALL, 80.0);
        assert_eq!(p.effective_radii(), CornerRadii::all(20.0));
    }

    #[test]
    fn effective_radii_clamp_negative_and_nan_to_zero() {
        let p = RoundedRectPath::new(
            Rect::from_size(10.0, 10.0),
            CornerRadii::new(-3.0, f32::NAN, 2.0, 0.0),
        );
        assert_eq!(p.effective_radii(), CornerRadii::new(0.0, 0.0, 2.0, 0.0));
    }

    #[test]
    fn zero_size_rect_has_zero_effective_radii() {
        let p = path(0.0, 0.0, Corners::ALL, 10.0);
        assert!(p.is_empty());
        assert_eq!(p.effective_radii(), CornerRadii::zero());
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn rounded_corner_excludes_its_tip() {
        let p = path(100.0, 40.0, Corners::ALL, 20.0);
        assert!(!p.contains(Vec2::new(0.5, 0.5)));
        assert!(!p.contains(Vec2::new(99.5, 39.5)));
        assert!(p.contains(Vec2::new(50.0, 20.0)));
        assert!(p.contains(Vec2::new(50.0, 0.5)));
    }

    #[test]
    fn only_selected_corners_are_cut_for_every_subset() {
        let tips = [
            (Corners::TOP_LEFT, Vec2::new(0.5, 0.5)),
            (Corners::TOP_RIGHT, Vec2::new(59.5, 0.5)),
            (Corners::BOTTOM_RIGHT, Vec2::new(59.5, 59.5)),
            (Corners::BOTTOM_LEFT, Vec2::new(0.5, 59.5)),
        ];
        for bits in 1..=Corners::ALL.bits() {
            let corners = Corners::from_bits_truncate(bits);
            let p = path(60.0, 60.0, corners, 10.0);
            for (corner, tip) in tips {
                assert_eq!(p.contains(tip), !corners.contains(corner), "{corners:?} / {corner:?}");
            }
        }
    }

    #[test]
    fn empty_path_contains_nothing() {
        assert!(!path(0.0, 0.0, Corners::ALL, 4.0).contains(Vec2::zero()));
    }

    // ── to_bez_path ───────────────────────────────────────────────────────

    #[test]
    fn outline_is_a_closed_path_within_the_rect() {
        let bez = path(100.0, 40.0, Corners::ALL, 10.0).to_bez_path(0.1);
        let els = bez.elements();
        assert!(matches!(els.first(), Some(PathEl::MoveTo(_))));
        assert!(matches!(els.last(), Some(PathEl::ClosePath)));
        assert!(els.iter().any(|el| matches!(el, PathEl::CurveTo(..))));

        let bbox = bez.bounding_box();
        assert!((bbox.x0 - 0.0).abs() < 1e-6 && (bbox.y0 - 0.0).abs() < 1e-6);
        assert!((bbox.x1 - 100.0).abs() < 1e-6 && (bbox.y1 - 40.0).abs() < 1e-6);
    }

    #[test]
    fn empty_rect_flattens_to_nothing() {
        assert!(path(0.0, 10.0, Corners::ALL, 2.0).to_bez_path(0.1).elements().is_empty());
    }
}
