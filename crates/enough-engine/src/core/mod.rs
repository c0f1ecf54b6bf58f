//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (dispatch
//! loop) and higher layers (the watchface). It keeps runtime internals out of
//! face code and provides a consistent per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
