use core::fmt;

use crate::coords::Rect;
use crate::paint::Color;
use crate::path::RoundedRectPath;
use crate::scene::Border;

/// Handle to a sublayer, unique within its parent [`Layer`](super::Layer).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SublayerId(pub(crate) u32);

impl fmt::Debug for SublayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SublayerId({})", self.0)
    }
}

/// Plain content drawn inside the parent's mask.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContentLayer {
    pub rect: Rect,
    pub color: Color,
}

/// Stroked outline drawn above content and outside the parent's mask.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutlineLayer {
    pub path: RoundedRectPath,
    pub border: Border,
}

/// What a sublayer is for.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SublayerRole {
    Content(ContentLayer),
    BorderOutline(OutlineLayer),
}

impl SublayerRole {
    #[inline]
    pub fn is_border_outline(&self) -> bool {
        matches!(self, SublayerRole::BorderOutline(_))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sublayer {
    pub id: SublayerId,
    pub role: SublayerRole,
}
