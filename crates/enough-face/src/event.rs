use crate::time::Time;

/// Events that drive the face.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FaceEvent {
    /// A new minute started.
    TimeTick(Time),
    /// The "invert colors" setting arrived from the companion.
    ThemeChanged(bool),
}
