use crate::coords::{DisplayShape, Viewport};
use crate::paint::Color;

/// Display/runtime configuration, fixed for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub viewport: Viewport,
    /// Window background, applied by the sink once at creation.
    pub background: Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "simple-enough".to_string(),
            viewport: Viewport::new(144.0, 168.0, DisplayShape::Rect),
            background: Color::opaque(1.0, 1.0, 1.0),
        }
    }
}
