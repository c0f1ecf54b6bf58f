use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::{Context, Result};
use enough_engine::coords::DisplayShape;
use enough_engine::logging::{LoggingConfig, init_logging};
use enough_engine::render::RasterTarget;
use enough_face::prelude::*;
use serde_json::Value;

/// Desktop preview of the watchface.
///
/// Renders the face once per minute into a PNG and accepts companion
/// messages as JSON lines on stdin, e.g. `{"INVERT_COLORS": 1}`.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let display = DisplayConfig::from_env();
    let inbox = spawn_stdin_inbox()?;
    let mut source = ClockSource::new(inbox);

    let output = display.output.clone();
    let frames = Application::new()
        .title("Simple Enough")
        .size(display.width, display.height)
        .shape(display.shape)
        .color(display.color)
        .glyphs(
            include_bytes!("../assets/number-6-black.svg").as_slice(),
            include_bytes!("../assets/number-6-white.svg").as_slice(),
        )
        .settings(FileSettings::new(&display.settings))
        .run(&mut source, move |bitmaps| RasterTarget::new(bitmaps).with_output(output))?;

    log::info!("studio exited after {frames} frames");
    Ok(())
}

// ── configuration ─────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
struct DisplayConfig {
    width: f32,
    height: f32,
    shape: DisplayShape,
    color: bool,
    settings: PathBuf,
    output: PathBuf,
}

impl DisplayConfig {
    /// `ENOUGH_SHAPE` (`rect`/`round`), `ENOUGH_COLOR` (`0`/`1`),
    /// `ENOUGH_SETTINGS` and `ENOUGH_OUT`.
    fn from_env() -> Self {
        let config = Self::from_vars(
            env::var("ENOUGH_SHAPE").ok().as_deref(),
            env::var("ENOUGH_COLOR").ok().as_deref(),
            env::var_os("ENOUGH_SETTINGS").map(PathBuf::from),
            env::var_os("ENOUGH_OUT").map(PathBuf::from),
        );
        log::info!(
            "display {}x{} {:?}, color={}, writing {}",
            config.width,
            config.height,
            config.shape,
            config.color,
            config.output.display()
        );
        config
    }

    fn from_vars(
        shape: Option<&str>,
        color: Option<&str>,
        settings: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        let shape = parse_shape(shape).unwrap_or_else(|| {
            log::warn!("unknown ENOUGH_SHAPE {shape:?}, using rect");
            DisplayShape::Rect
        });
        let (width, height) = match shape {
            DisplayShape::Rect => (144.0, 168.0),
            DisplayShape::Round => (180.0, 180.0),
        };
        Self {
            width,
            height,
            shape,
            color: parse_color(color),
            settings: settings.unwrap_or_else(|| "settings.json".into()),
            output: output.unwrap_or_else(|| "face.png".into()),
        }
    }
}

/// Unset means rectangular; `None` for anything unrecognised.
fn parse_shape(value: Option<&str>) -> Option<DisplayShape> {
    match value.map(str::trim) {
        None | Some("rect") => Some(DisplayShape::Rect),
        Some("round") => Some(DisplayShape::Round),
        Some(_) => None,
    }
}

/// Color unless explicitly `0`.
fn parse_color(value: Option<&str>) -> bool {
    value.map(str::trim) != Some("0")
}

// ── stdin inbox ───────────────────────────────────────────────────────────

/// Forwards each JSON line from stdin to the dispatch thread.
///
/// The reader thread does no decoding beyond JSON parsing; the channel closes
/// when stdin does.
fn spawn_stdin_inbox() -> Result<Receiver<Value>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-inbox".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<Value>(line) {
                    Ok(msg) => {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                    Err(e) => log::warn!("ignoring malformed message {line:?}: {e}"),
                }
            }
        })
        .context("failed to spawn stdin reader")?;
    Ok(rx)
}
