use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;

use anyhow::Result;
use chrono::NaiveTime;
use enough_engine::runtime::EventSource;
use enough_engine::time::{MinuteClock, local_now};
use serde_json::Value;

use crate::event::FaceEvent;
use crate::message::{self, INVERT_COLORS_KEY};
use crate::time::Time;

/// Event source combining the wall clock with an inbox of companion messages.
///
/// Blocks until the next minute boundary or the next message, whichever comes
/// first. Messages without a usable invert flag are dropped here and never
/// reach the app. Never runs dry on its own; a closed inbox only leaves the
/// minute ticks.
pub struct ClockSource {
    clock: MinuteClock,
    now: Box<dyn FnMut() -> NaiveTime>,
    inbox: Option<Receiver<Value>>,
}

impl ClockSource {
    pub fn new(inbox: Receiver<Value>) -> Self {
        Self { clock: MinuteClock::new(), now: Box::new(local_now), inbox: Some(inbox) }
    }

    /// Replaces the wall clock, e.g. with a fixed or simulated time.
    pub fn with_time_fn(mut self, now: impl FnMut() -> NaiveTime + 'static) -> Self {
        self.now = Box::new(now);
        self
    }
}

impl EventSource for ClockSource {
    type Event = FaceEvent;

    fn next_event(&mut self) -> Result<Option<FaceEvent>> {
        loop {
            let now = (self.now)();
            if let Some(tick) = self.clock.poll(now) {
                return Ok(Some(FaceEvent::TimeTick(Time::from(tick))));
            }

            let wait = MinuteClock::until_next_minute(now);
            let Some(inbox) = &self.inbox else {
                thread::sleep(wait);
                continue;
            };

            match inbox.recv_timeout(wait) {
                Ok(msg) => match message::decode_invert(&msg) {
                    Some(inverted) => return Ok(Some(FaceEvent::ThemeChanged(inverted))),
                    None => log::warn!("ignoring message without a usable {INVERT_COLORS_KEY}: {msg}"),
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    log::info!("message inbox closed, continuing with clock ticks only");
                    self.inbox = None;
                }
            }
        }
    }
}
