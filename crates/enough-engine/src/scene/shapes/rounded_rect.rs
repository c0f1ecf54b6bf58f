use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled rounded rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    /// Same radius on every corner. Sinks clamp it to half the shorter side.
    pub radius: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a solid rounded rectangle with uniform corner radius.
    #[inline]
    pub fn push_solid_rounded_rect(&mut self, z: ZIndex, rect: Rect, radius: f32, color: Color) {
        self.push(
            z,
            DrawCmd::RoundedRect(RoundedRectCmd { rect, radius, color }),
        );
    }
}
