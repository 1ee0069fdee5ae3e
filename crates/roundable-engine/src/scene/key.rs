/// Z-ordering key for draw items. Higher values appear on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// The next layer up.
    #[inline]
    pub const fn above(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Stable sort key for draw items.
///
/// Field order drives the derived ordering:
/// 1) `z` ascending (back-to-front)
/// 2) `order` ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
