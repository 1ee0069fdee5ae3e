//! Color model shared between layers and the draw stream.

pub mod color;

pub use color::Color;
