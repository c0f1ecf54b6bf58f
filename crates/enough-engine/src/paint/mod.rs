//! Paint model shared between the face and sinks.
//!
//! Scope is solid colors only. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
