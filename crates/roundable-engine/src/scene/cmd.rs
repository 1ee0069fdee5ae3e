use crate::paint::Color;
use crate::path::RoundedRectPath;

/// Stroke drawn along the outline of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// A border with no width or no alpha draws nothing.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && !self.color.is_transparent()
    }
}

/// Solid fill of a (possibly rounded) rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillCmd {
    pub path: RoundedRectPath,
    pub color: Color,
}

/// Stroke centered on the outline of a (possibly rounded) rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: RoundedRectPath,
    pub border: Border,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Stroke(StrokeCmd),
}
