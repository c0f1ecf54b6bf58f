//! Simple Enough engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the watchface:
//! geometry, paint, the recorded draw stream, a CPU raster sink and the
//! single-threaded runtime that dispatches events and presents frames.

pub mod core;
pub mod runtime;
pub mod time;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
