use crate::paint::Color;
use crate::path::RoundedRectPath;

use super::{Border, ClipShape, DrawCmd, FillCmd, SortKey, StrokeCmd, ZIndex};

/// A single draw item: sort key + command + clip.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Effective clip when the item was pushed. `None` = draw everywhere.
    pub clip: Option<ClipShape>,
}

/// Recorded draw stream.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
///
/// # Clipping
///
/// [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) scope draw
/// commands to a clip shape. A rectangular clip pushed under a rectangular
/// parent is intersected with it; a rounded clip becomes the effective clip
/// as-is, since a layer mask is always the innermost clip of its layer.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    clip_stack: Vec<ClipShape>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current clip nesting depth.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Pushes a draw command; the item inherits the current clip.
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Records a solid fill.
    #[inline]
    pub fn push_fill(&mut self, z: ZIndex, path: RoundedRectPath, color: Color) {
        self.push(z, DrawCmd::Fill(FillCmd { path, color }));
    }

    /// Records an outline stroke.
    #[inline]
    pub fn push_stroke(&mut self, z: ZIndex, path: RoundedRectPath, border: Border) {
        self.push(z, DrawCmd::Stroke(StrokeCmd { path, border }));
    }

    /// Begins a clip region. Calls must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, clip: ClipShape) {
        let effective = match (self.clip_stack.last(), clip) {
            (Some(ClipShape::Rect(parent)), ClipShape::Rect(rect)) => {
                // No overlap: a zero-area rect makes renderers skip the items.
                ClipShape::Rect(parent.intersect(rect).unwrap_or_default())
            }
            _ => clip,
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip region.
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order (back-to-front).
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices.sort_by_key(|&i| self.items[i].key);
        self.sorted_dirty = false;
    }
}
