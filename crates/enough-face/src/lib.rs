//! Simple Enough: a minimal analog watchface on top of `enough-engine`.
//!
//! The face is a pure function of the wall time, the display geometry and a
//! single "invert colors" flag. [`face::render`] turns those into an ordered
//! draw stream; [`WatchfaceApp`] owns the flag and the last seen time and
//! plugs the renderer into the engine runtime.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use enough_engine::render::RasterTarget;
//! use enough_face::prelude::*;
//!
//! let mut source = ClockSource::new(inbox);
//! Application::new()
//!     .size(144.0, 168.0)
//!     .glyphs(on_light_svg, on_dark_svg)
//!     .settings(FileSettings::new("settings.json"))
//!     .run(&mut source, |bitmaps| RasterTarget::new(bitmaps).with_output("face.png"))?;
//! ```

pub mod app;
pub mod event;
pub mod face;
pub mod geometry;
pub mod glyph;
pub mod message;
pub mod settings;
pub mod source;
pub mod theme;
pub mod time;

pub use app::{Application, WatchfaceApp};
pub use event::FaceEvent;
pub use glyph::{Glyph, GlyphSet};
pub use source::ClockSource;
pub use theme::{ResolvedTheme, ThemeVariant};
pub use time::Time;

/// Everything a host needs to run the face.
pub mod prelude {
    pub use crate::app::{Application, WatchfaceApp};
    pub use crate::event::FaceEvent;
    pub use crate::glyph::{Glyph, GlyphSet};
    pub use crate::settings::{FileSettings, MemorySettings, Settings, SettingsStore};
    pub use crate::source::ClockSource;
    pub use crate::theme::{ResolvedTheme, ThemeVariant, palette, resolve};
    pub use crate::time::Time;

    pub use enough_engine::coords::{DisplayShape, Viewport};
}
