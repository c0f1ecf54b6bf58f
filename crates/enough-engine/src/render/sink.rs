use anyhow::Result;

use crate::coords::Viewport;
use crate::runtime::RuntimeConfig;
use crate::scene::{DrawItem, DrawList};

/// Destination for finished frames.
///
/// The runtime calls [`configure`](DisplaySink::configure) once before the
/// first frame (the "window creation" moment) and [`present`](DisplaySink::present)
/// once per rendered frame.
pub trait DisplaySink {
    fn configure(&mut self, config: &RuntimeConfig) -> Result<()> {
        let _ = config;
        Ok(())
    }

    fn present(&mut self, viewport: Viewport, frame: &mut DrawList) -> Result<()>;
}

/// Sink that keeps a copy of every presented frame.
///
/// Used by tests and replay tooling to inspect the exact primitive sequence.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub config: Option<RuntimeConfig>,
    pub frames: Vec<Vec<DrawItem>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for RecordingSink {
    fn configure(&mut self, config: &RuntimeConfig) -> Result<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn present(&mut self, _viewport: Viewport, frame: &mut DrawList) -> Result<()> {
        self.frames.push(frame.items().to_vec());
        Ok(())
    }
}
