use crate::coords::Viewport;
use crate::scene::DrawList;
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
///
/// `draw_list` is cleared by the runtime before the callback and handed to
/// the display sink right after it returns.
pub struct FrameCtx<'a> {
    pub viewport: Viewport,
    pub draw_list: &'a mut DrawList,
    pub time: FrameTime,
}
