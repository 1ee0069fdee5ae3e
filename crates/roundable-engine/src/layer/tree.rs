use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::path::RoundedRectPath;
use crate::scene::{Border, ClipShape, DrawList, ZIndex};

use super::{ContentLayer, OutlineLayer, Sublayer, SublayerId, SublayerRole};

/// Render state of one view.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    mask: Option<RoundedRectPath>,
    border_width: f32,
    border_color: Color,
    background: Option<Color>,
    /// Back-to-front.
    sublayers: Vec<Sublayer>,
    next_id: u32,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    // ── mask ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn mask(&self) -> Option<&RoundedRectPath> {
        self.mask.as_ref()
    }

    /// Replaces the clip mask. `None` removes clipping entirely.
    #[inline]
    pub fn set_mask(&mut self, mask: Option<RoundedRectPath>) {
        self.mask = mask;
    }

    // ── native border ─────────────────────────────────────────────────────

    /// The built-in border, if its width is positive.
    pub fn native_border(&self) -> Option<Border> {
        (self.border_width > 0.0).then(|| Border::new(self.border_width, self.border_color))
    }

    pub fn set_native_border(&mut self, border: Option<Border>) {
        match border {
            Some(b) => {
                self.border_width = b.width.max(0.0);
                self.border_color = b.color;
            }
            None => {
                self.border_width = 0.0;
                self.border_color = Color::transparent();
            }
        }
    }

    // ── background ────────────────────────────────────────────────────────

    #[inline]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    #[inline]
    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    // ── sublayers ─────────────────────────────────────────────────────────

    #[inline]
    pub fn sublayers(&self) -> &[Sublayer] {
        &self.sublayers
    }

    /// Adds a sublayer on top of the existing ones.
    pub fn add_sublayer(&mut self, role: SublayerRole) -> SublayerId {
        let id = SublayerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.sublayers.push(Sublayer { id, role });
        id
    }

    /// Convenience for a content sublayer.
    pub fn add_content(&mut self, rect: Rect, color: Color) -> SublayerId {
        self.add_sublayer(SublayerRole::Content(ContentLayer { rect, color }))
    }

    /// Removes one sublayer. Returns `false` if `id` is not a child of this layer.
    pub fn remove_sublayer(&mut self, id: SublayerId) -> bool {
        let before = self.sublayers.len();
        self.sublayers.retain(|s| s.id != id);
        self.sublayers.len() != before
    }

    /// Border outline sublayers, back-to-front.
    pub fn border_outlines(&self) -> impl Iterator<Item = &OutlineLayer> {
        self.sublayers.iter().filter_map(|s| match &s.role {
            SublayerRole::BorderOutline(outline) => Some(outline),
            SublayerRole::Content(_) => None,
        })
    }

    /// Removes every border outline sublayer and returns how many were removed.
    pub fn remove_border_outlines(&mut self) -> usize {
        let before = self.sublayers.len();
        self.sublayers.retain(|s| !s.role.is_border_outline());
        before - self.sublayers.len()
    }

    // ── recording ─────────────────────────────────────────────────────────

    /// Flattens the layer, laid out over `bounds`, into `list`.
    ///
    /// Paint order: background, content sublayers, native border (all inside
    /// the mask), then border outlines outside the mask. Borders with no
    /// width or a transparent color are not recorded.
    pub fn record(&self, bounds: Rect, list: &mut DrawList) {
        let mut z = ZIndex::default();
        let square = RoundedRectPath::new(bounds, CornerRadii::zero());

        if let Some(mask) = self.mask {
            list.push_clip(ClipShape::RoundedRect(mask.shape()));
        }

        if let Some(color) = self.background {
            list.push_fill(z, square, color);
            z = z.above();
        }

        for sublayer in &self.sublayers {
            if let SublayerRole::Content(content) = sublayer.role {
                let path = RoundedRectPath::new(content.rect, CornerRadii::zero());
                list.push_fill(z, path, content.color);
                z = z.above();
            }
        }

        if let Some(border) = self.native_border().filter(Border::is_visible) {
            list.push_stroke(z, square, border);
            z = z.above();
        }

        if self.mask.is_some() {
            list.pop_clip();
        }

        for outline in self.border_outlines().filter(|o| o.border.is_visible()) {
            list.push_stroke(z, outline.path, outline.border);
            z = z.above();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    fn rounded(w: f32, h: f32, r: f32) -> RoundedRectPath {
        RoundedRectPath::new(Rect::from_size(w, h), CornerRadii::all(r))
    }

    fn outline(path: RoundedRectPath) -> SublayerRole {
        SublayerRole::BorderOutline(OutlineLayer { path, border: Border::new(1.0, Color::RED) })
    }

    // ── native border ─────────────────────────────────────────────────────

    #[test]
    fn native_border_round_trips() {
        let mut layer = Layer::new();
        assert_eq!(layer.native_border(), None);

        layer.set_native_border(Some(Border::new(2.0, Color::RED)));
        assert_eq!(layer.native_border(), Some(Border::new(2.0, Color::RED)));

        layer.set_native_border(None);
        assert_eq!(layer.native_border(), None);
    }

    #[test]
    fn negative_native_border_width_clamps_to_none() {
        let mut layer = Layer::new();
        layer.set_native_border(Some(Border::new(-1.0, Color::RED)));
        assert_eq!(layer.native_border(), None);
    }

    // ── sublayers ─────────────────────────────────────────────────────────

    #[test]
    fn remove_border_outlines_keeps_content() {
        let mut layer = Layer::new();
        let content = layer.add_content(Rect::from_size(4.0, 4.0), Color::WHITE);
        layer.add_sublayer(outline(rounded(10.0, 10.0, 2.0)));
        layer.add_sublayer(outline(rounded(10.0, 10.0, 3.0)));

        assert_eq!(layer.remove_border_outlines(), 2);
        assert_eq!(layer.sublayers().len(), 1);
        assert_eq!(layer.sublayers()[0].id, content);
        assert_eq!(layer.border_outlines().count(), 0);
    }

    #[test]
    fn sublayer_ids_are_unique() {
        let mut layer = Layer::new();
        let a = layer.add_content(Rect::from_size(1.0, 1.0), Color::WHITE);
        let b = layer.add_content(Rect::from_size(1.0, 1.0), Color::WHITE);
        assert_ne!(a, b);
        assert!(layer.remove_sublayer(a));
        assert!(!layer.remove_sublayer(a));
    }

    // ── record ────────────────────────────────────────────────────────────

    #[test]
    fn unmasked_layer_records_without_clip() {
        let mut layer = Layer::new();
        layer.set_background(Some(Color::WHITE));
        layer.set_native_border(Some(Border::new(1.0, Color::RED)));

        let mut list = DrawList::new();
        layer.record(Rect::from_size(20.0, 10.0), &mut list);

        assert_eq!(list.len(), 2);
        assert!(list.items().iter().all(|item| item.clip.is_none()));
        assert!(matches!(list.items()[1].cmd, DrawCmd::Stroke(s) if s.border.width == 1.0));
    }

    #[test]
    fn outline_is_recorded_outside_the_mask() {
        let mask = rounded(20.0, 10.0, 5.0);
        let mut layer = Layer::new();
        layer.set_mask(Some(mask));
        layer.set_background(Some(Color::WHITE));
        layer.add_sublayer(outline(mask));

        let mut list = DrawList::new();
        layer.record(Rect::from_size(20.0, 10.0), &mut list);

        let items = list.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].clip, Some(ClipShape::RoundedRect(mask.shape())));
        assert_eq!(items[1].clip, None);
        assert!(items[1].key.z > items[0].key.z);
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn native_border_is_clipped_by_the_mask() {
        let mut layer = Layer::new();
        layer.set_mask(Some(rounded(20.0, 10.0, 5.0)));
        layer.set_native_border(Some(Border::new(1.0, Color::RED)));

        let mut list = DrawList::new();
        layer.record(Rect::from_size(20.0, 10.0), &mut list);

        assert_eq!(list.len(), 1);
        assert!(list.items()[0].clip.is_some());
    }

    #[test]
    fn invisible_borders_are_not_recorded() {
        let mut layer = Layer::new();
        layer.set_native_border(Some(Border::new(1.0, Color::transparent())));
        layer.set_mask(Some(rounded(20.0, 10.0, 5.0)));
        layer.add_sublayer(SublayerRole::BorderOutline(OutlineLayer {
            path: rounded(20.0, 10.0, 5.0),
            border: Border::new(0.0, Color::RED),
        }));

        let mut list = DrawList::new();
        layer.record(Rect::from_size(20.0, 10.0), &mut list);

        assert!(list.is_empty());
        assert_eq!(layer.border_outlines().count(), 1);
    }
}
