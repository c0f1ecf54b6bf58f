use anyhow::Result;

/// Producer of app events.
///
/// `next_event` may block until something happens. `Ok(None)` means the
/// source is exhausted and the runtime should stop.
pub trait EventSource {
    type Event;

    fn next_event(&mut self) -> Result<Option<Self::Event>>;
}
