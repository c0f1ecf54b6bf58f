use crate::runtime::RuntimeCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// All callbacks run on the dispatch thread, one at a time.
pub trait App {
    /// Events delivered by the runtime's event source.
    type Event;

    /// Called once before the first event. Requests the initial frame by default.
    fn on_start(&mut self, runtime: &mut RuntimeCtx) {
        runtime.request_redraw();
    }

    /// Called for every event. Use `runtime` to request a redraw or exit.
    fn on_event(&mut self, event: Self::Event, runtime: &mut RuntimeCtx) -> AppControl;

    /// Called once per rendered frame. Record the frame into `ctx.draw_list`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
