//! CPU rendering subsystem.
//!
//! Sinks consume `scene` draw streams. The only concrete sink paints onto a
//! `tiny_skia` pixmap (re-exported by `resvg`) and can encode the frame as PNG.
//!
//! Convention:
//! - geometry is in display pixels (top-left origin, +Y down)
//! - anything outside the viewport is clipped by the pixmap

mod bitmaps;
mod raster;
mod sink;

pub use bitmaps::BitmapStore;
pub use raster::RasterTarget;
pub use sink::{DisplaySink, RecordingSink};
