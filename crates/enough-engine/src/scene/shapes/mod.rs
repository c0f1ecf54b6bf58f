pub(crate) mod bitmap;
pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod rounded_rect;

use crate::paint::Color;

/// Stroke used for lines and shape outlines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
