use roundable_engine::coords::{CornerRadii, Rect};
use roundable_engine::layer::{Layer, OutlineLayer, SublayerRole};
use roundable_engine::path::RoundedRectPath;

use super::RoundingConfig;

/// What [`apply_rounding`] wrote to the layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Applied {
    /// Mask cleared; the border, if any, went to the native border.
    Unmasked,
    /// Mask set with this radius on the configured corners.
    Masked { radius: f32, outlined: bool },
}

/// Evaluates `config` against `bounds` and writes the result into `layer`.
///
/// Every call starts by removing existing border outline sublayers, so the
/// layer never holds more than one, and each variant overwrites everything
/// the other variants may have set:
///
/// - `None`: mask cleared, border (or nothing) on the native border.
/// - `Complete` / `Partial`: rounded mask over `bounds`, native border cleared,
///   and, with a border, one outline sublayer tracing the mask path. The
///   outline is needed because the native border is clipped by the mask.
pub fn apply_rounding(layer: &mut Layer, bounds: Rect, config: &RoundingConfig) -> Applied {
    layer.remove_border_outlines();

    let Some(radius) = config.method.radius_for(bounds) else {
        layer.set_mask(None);
        layer.set_native_border(config.border);
        return Applied::Unmasked;
    };

    let path = RoundedRectPath::new(bounds, CornerRadii::for_corners(config.corners, radius));
    layer.set_mask(Some(path));
    layer.set_native_border(None);

    if let Some(border) = config.border {
        layer.add_sublayer(SublayerRole::BorderOutline(OutlineLayer { path, border }));
    }

    Applied::Masked { radius, outlined: config.border.is_some() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundable_engine::coords::{Corners, Vec2};
    use roundable_engine::paint::Color;
    use roundable_engine::scene::{Border, DrawList};

    use crate::rounding::{Axis, RoundingMethod};

    fn config(method: RoundingMethod, corners: Corners, border: Option<Border>) -> RoundingConfig {
        RoundingConfig { method, corners, border }
    }

    fn red(width: f32) -> Option<Border> {
        Some(Border::new(width, Color::RED))
    }

    fn snapshot(layer: &Layer, bounds: Rect) -> DrawList {
        let mut list = DrawList::new();
        layer.record(bounds, &mut list);
        list
    }

    // ── Complete / Partial ────────────────────────────────────────────────

    #[test]
    fn complete_horizontal_pill() {
        let mut layer = Layer::new();
        let bounds = Rect::from_size(100.0, 40.0);
        let applied = apply_rounding(&mut layer, bounds, &config(RoundingMethod::complete(), Corners::ALL, None));

        assert_eq!(applied, Applied::Masked { radius: 50.0, outlined: false });
        let mask = layer.mask().copied();
        assert_eq!(mask, Some(RoundedRectPath::new(bounds, CornerRadii::all(50.0))));
    }

    #[test]
    fn complete_vertical_uses_height() {
        let mut layer = Layer::new();
        let cfg = config(RoundingMethod::complete_along(Axis::Vertical), Corners::ALL, None);
        let applied = apply_rounding(&mut layer, Rect::from_size(100.0, 40.0), &cfg);
        assert_eq!(applied, Applied::Masked { radius: 20.0, outlined: false });
    }

    #[test]
    fn partial_rounds_only_selected_corners() {
        let mut layer = Layer::new();
        let cfg = config(RoundingMethod::partial(6.0), Corners::TOP, None);
        apply_rounding(&mut layer, Rect::from_size(30.0, 30.0), &cfg);

        let mask = layer.mask().copied().expect("masked");
        assert_eq!(mask.radii(), CornerRadii::new(6.0, 6.0, 0.0, 0.0));
        assert!(!mask.contains(Vec2::new(0.2, 0.2)));
        assert!(mask.contains(Vec2::new(0.2, 29.8)));
    }

    #[test]
    fn zero_bounds_give_zero_radius_not_an_error() {
        let mut layer = Layer::new();
        let applied = apply_rounding(&mut layer, Rect::zero(), &config(RoundingMethod::complete(), Corners::ALL, red(1.0)));
        assert_eq!(applied, Applied::Masked { radius: 0.0, outlined: true });
        assert!(layer.mask().is_some_and(RoundedRectPath::is_empty));
    }

    // ── borders ───────────────────────────────────────────────────────────

    #[test]
    fn masked_border_becomes_an_outline_sublayer() {
        let mut layer = Layer::new();
        let cfg = config(RoundingMethod::partial(8.0), Corners::ALL, red(2.0));
        apply_rounding(&mut layer, Rect::from_size(50.0, 20.0), &cfg);

        assert_eq!(layer.native_border(), None);
        let outlines: Vec<_> = layer.border_outlines().copied().collect();
        assert_eq!(outlines.len(), 1);
        assert_eq!(Some(&outlines[0].path), layer.mask());
        assert_eq!(outlines[0].border, Border::new(2.0, Color::RED));
    }

    #[test]
    fn none_with_border_uses_native_border() {
        let mut layer = Layer::new();
        let applied = apply_rounding(&mut layer, Rect::from_size(50.0, 20.0), &config(RoundingMethod::None, Corners::ALL, red(1.0)));

        assert_eq!(applied, Applied::Unmasked);
        assert!(layer.mask().is_none());
        assert_eq!(layer.native_border(), red(1.0));
        assert_eq!(layer.border_outlines().count(), 0);
    }

    // ── transitions ───────────────────────────────────────────────────────

    #[test]
    fn switching_to_none_drops_mask_and_outline() {
        let mut layer = Layer::new();
        let bounds = Rect::from_size(50.0, 20.0);
        apply_rounding(&mut layer, bounds, &config(RoundingMethod::complete(), Corners::ALL, red(1.0)));
        apply_rounding(&mut layer, bounds, &config(RoundingMethod::None, Corners::ALL, None));

        assert!(layer.mask().is_none());
        assert_eq!(layer.native_border(), None);
        assert!(layer.sublayers().is_empty());
    }

    #[test]
    fn switching_from_none_clears_native_border() {
        let mut layer = Layer::new();
        let bounds = Rect::from_size(50.0, 20.0);
        apply_rounding(&mut layer, bounds, &config(RoundingMethod::None, Corners::ALL, red(1.0)));
        apply_rounding(&mut layer, bounds, &config(RoundingMethod::partial(4.0), Corners::ALL, red(1.0)));

        assert_eq!(layer.native_border(), None);
        assert_eq!(layer.border_outlines().count(), 1);
    }

    // ── idempotence ───────────────────────────────────────────────────────

    #[test]
    fn repeated_apply_is_idempotent() {
        let mut layer = Layer::new();
        layer.add_content(Rect::from_size(10.0, 10.0), Color::WHITE);
        let bounds = Rect::from_size(80.0, 30.0);
        let cfg = config(RoundingMethod::partial(10.0), Corners::LEFT, red(1.0));

        apply_rounding(&mut layer, bounds, &cfg);
        let first = snapshot(&layer, bounds);
        for _ in 0..3 {
            apply_rounding(&mut layer, bounds, &cfg);
        }
        let again = snapshot(&layer, bounds);

        assert_eq!(first.items(), again.items());
        assert_eq!(layer.border_outlines().count(), 1);
        assert_eq!(layer.sublayers().len(), 2);
    }
}
