use crate::coords::Rect;

/// A shape used to clip draw items.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ClipShape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A rectangle with rounded corners (a layer mask), radii already clamped.
    RoundedRect(kurbo::RoundedRect),
}

impl ClipShape {
    /// Axis-aligned bounds of the clip.
    #[inline]
    pub fn bounds(&self) -> Rect {
        match self {
            ClipShape::Rect(r) => *r,
            ClipShape::RoundedRect(rr) => rr.rect().into(),
        }
    }
}
