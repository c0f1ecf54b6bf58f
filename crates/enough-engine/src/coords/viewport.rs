use super::Rect;

/// Physical outline of the display glass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DisplayShape {
    #[default]
    Rect,
    Round,
}

/// Display geometry supplied by the host for each frame.
///
/// Sinks treat this as the pixel basis of the frame: the draw stream is laid
/// out inside `bounds()` and anything outside is clipped by the sink.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub shape: DisplayShape,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32, shape: DisplayShape) -> Self {
        Self { width, height, shape }
    }

    /// Full display rectangle at the origin.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Half of the shorter side; the largest radius that stays on screen.
    #[inline]
    pub fn min_half_extent(self) -> f32 {
        self.width.min(self.height) * 0.5
    }

    #[inline]
    pub fn max_extent(self) -> f32 {
        self.width.max(self.height)
    }

    /// Positive, finite width and height.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
