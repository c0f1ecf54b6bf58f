//! Single-threaded dispatch loop.
//!
//! The runtime pulls events from an [`EventSource`], hands them to the
//! [`App`](crate::core::App), and renders a frame whenever the app asked for
//! one. Redraw requests raised while handling a single event are coalesced.

mod config;
mod ctx;
mod source;

pub use config::RuntimeConfig;
pub use ctx::RuntimeCtx;
pub use source::EventSource;

use anyhow::{Context, Result};

use crate::core::{App, AppControl, FrameCtx};
use crate::render::DisplaySink;
use crate::scene::DrawList;
use crate::time::FrameTime;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs until the source is exhausted or the app asks to exit.
    ///
    /// Returns the number of frames presented.
    pub fn run<A, S, D>(config: RuntimeConfig, source: &mut S, sink: &mut D, app: &mut A) -> Result<u64>
    where
        A: App,
        S: EventSource<Event = A::Event> + ?Sized,
        D: DisplaySink + ?Sized,
    {
        sink.configure(&config).context("failed to configure display sink")?;
        log::info!("runtime started: {}", config.title);

        let mut driver = Driver { config, draw_list: DrawList::new(), frame_index: 0 };
        let mut ctx = RuntimeCtx::default();

        app.on_start(&mut ctx);
        if driver.drain(&mut ctx, app, sink)? == AppControl::Exit {
            return Ok(driver.frame_index);
        }

        while let Some(event) = source.next_event().context("event source failed")? {
            if app.on_event(event, &mut ctx) == AppControl::Exit {
                log::info!("app requested exit");
                break;
            }
            if driver.drain(&mut ctx, app, sink)? == AppControl::Exit {
                break;
            }
        }

        log::info!("runtime stopped after {} frames", driver.frame_index);
        Ok(driver.frame_index)
    }
}

struct Driver {
    config: RuntimeConfig,
    draw_list: DrawList,
    frame_index: u64,
}

impl Driver {
    /// Applies buffered runtime commands. At most one frame is rendered per call.
    fn drain<A, D>(&mut self, ctx: &mut RuntimeCtx, app: &mut A, sink: &mut D) -> Result<AppControl>
    where
        A: App,
        D: DisplaySink + ?Sized,
    {
        let (redraw, exit) = ctx.take();
        if exit {
            return Ok(AppControl::Exit);
        }
        if !redraw {
            return Ok(AppControl::Continue);
        }

        self.draw_list.clear();
        let mut frame = FrameCtx {
            viewport: self.config.viewport,
            draw_list: &mut self.draw_list,
            time: FrameTime { frame_index: self.frame_index },
        };
        let control = app.on_frame(&mut frame);

        sink.present(self.config.viewport, &mut self.draw_list)
            .with_context(|| format!("failed to present frame {}", self.frame_index))?;
        log::debug!("frame {} presented ({} items)", self.frame_index, self.draw_list.len());
        self.frame_index += 1;

        Ok(control)
    }
}
