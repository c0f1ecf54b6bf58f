use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Circle draw payload.
///
/// `fill = None` draws the outline only; `border = None` draws the disc only.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Color>,
    pub border: Option<Stroke>,
}

impl DrawList {
    /// Records a solid disc.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(
            z,
            DrawCmd::Circle(CircleCmd { center, radius, fill: Some(color), border: None }),
        );
    }

    /// Records a circle outline centered on the radius.
    #[inline]
    pub fn push_circle_outline(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push(
            z,
            DrawCmd::Circle(CircleCmd { center, radius, fill: None, border: Some(stroke) }),
        );
    }
}
