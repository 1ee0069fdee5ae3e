bitflags::bitflags! {
    /// Set of rectangle corners to round.
    ///
    /// Corners outside the set stay square. The default is [`Corners::ALL`].
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_RIGHT = 1 << 2;
        const BOTTOM_LEFT = 1 << 3;

        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for Corners {
    fn default() -> Self {
        Self::ALL
    }
}
