//! Coordinate and geometry types shared by the face renderer and sinks.
//!
//! Canonical space:
//! - Display pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::{DisplayShape, Viewport};
