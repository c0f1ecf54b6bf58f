//! Time subsystem.
//!
//! Provides testable wall-clock utilities without coupling to the runtime.
//! Intended usage:
//! - one `MinuteClock` per event source, fed with the current wall time
//! - the runtime stamps each presented frame with a `FrameTime`

mod minute_clock;

pub use minute_clock::{FrameTime, MinuteClock, local_now};
