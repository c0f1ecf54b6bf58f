use anyhow::Result;
use enough_engine::coords::{DisplayShape, Viewport};
use enough_engine::core::{App, AppControl, FrameCtx};
use enough_engine::render::{BitmapStore, DisplaySink};
use enough_engine::runtime::{EventSource, Runtime, RuntimeConfig, RuntimeCtx};
use enough_engine::time::local_now;

use crate::event::FaceEvent;
use crate::face;
use crate::glyph::GlyphSet;
use crate::settings::{self, MemorySettings, Settings, SettingsStore};
use crate::theme::{self, ResolvedTheme};
use crate::time::Time;

/// The watchface: owns the last seen time and the invert flag.
///
/// Every event requests a redraw; [`on_frame`](App::on_frame) resolves the
/// theme afresh and records the whole face.
pub struct WatchfaceApp {
    time: Time,
    inverted: bool,
    color_capable: bool,
    glyphs: GlyphSet,
    settings: Box<dyn SettingsStore>,
}

impl WatchfaceApp {
    /// Loads the persisted flag from `settings`; an absent or unreadable flag means `false`.
    pub fn new(
        mut settings: Box<dyn SettingsStore>,
        glyphs: GlyphSet,
        color_capable: bool,
        time: Time,
    ) -> Self {
        let inverted = settings::load_invert_flag(settings.as_mut());
        Self { time, inverted, color_capable, glyphs, settings }
    }

    #[inline]
    pub fn time(&self) -> Time {
        self.time
    }

    #[inline]
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn theme(&self) -> ResolvedTheme {
        theme::resolve(self.inverted, self.color_capable)
    }

    fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
        // A failed save only loses persistence; the face still switches.
        if let Err(e) = self.settings.save(&Settings { invert_colors: inverted }) {
            log::warn!("failed to persist invert_colors={inverted}: {e:#}");
        }
    }
}

impl App for WatchfaceApp {
    type Event = FaceEvent;

    fn on_event(&mut self, event: FaceEvent, runtime: &mut RuntimeCtx) -> AppControl {
        match event {
            FaceEvent::TimeTick(time) => {
                log::debug!("tick {:02}:{:02}", time.hour(), time.minute());
                self.time = time;
            }
            FaceEvent::ThemeChanged(inverted) => {
                log::info!("invert_colors -> {inverted}");
                self.set_inverted(inverted);
            }
        }
        runtime.request_redraw();
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let theme = self.theme();
        face::render(self.time, ctx.viewport, &theme, &self.glyphs, ctx.draw_list);
        log::debug!("frame {} recorded ({} primitives)", ctx.time.frame_index, ctx.draw_list.len());
        AppControl::Continue
    }
}

// ── Application builder ───────────────────────────────────────────────────

/// Builder that wires the face into the engine runtime.
///
/// ```rust,ignore
/// Application::new()
///     .shape(DisplayShape::Round)
///     .size(180.0, 180.0)
///     .color(true)
///     .settings(FileSettings::new("settings.json"))
///     .run(&mut source, |bitmaps| RasterTarget::new(bitmaps))?;
/// ```
pub struct Application {
    title: String,
    width: f32,
    height: f32,
    shape: DisplayShape,
    color_capable: bool,
    glyph_svgs: Option<(Vec<u8>, Vec<u8>)>,
    settings: Box<dyn SettingsStore>,
    time: Option<Time>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "Simple Enough".to_string(),
            width: 144.0,
            height: 168.0,
            shape: DisplayShape::Rect,
            color_capable: true,
            glyph_svgs: None,
            settings: Box::new(MemorySettings::new()),
            time: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn shape(mut self, shape: DisplayShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn color(mut self, color_capable: bool) -> Self {
        self.color_capable = color_capable;
        self
    }

    /// SVG sources for the glyph drawn over the light and the inverted theme.
    pub fn glyphs(mut self, on_light_svg: impl Into<Vec<u8>>, on_dark_svg: impl Into<Vec<u8>>) -> Self {
        self.glyph_svgs = Some((on_light_svg.into(), on_dark_svg.into()));
        self
    }

    pub fn settings(mut self, store: impl SettingsStore + 'static) -> Self {
        self.settings = Box::new(store);
        self
    }

    /// Time shown before the first tick. Defaults to the local wall time.
    pub fn time(mut self, time: Time) -> Self {
        self.time = Some(time);
        self
    }

    /// Loads glyphs into `bitmaps` and the persisted flag from the settings
    /// store, then returns the runtime config and the app.
    ///
    /// The window background is resolved once here from the loaded flag.
    pub fn build(self, bitmaps: &mut BitmapStore) -> (RuntimeConfig, WatchfaceApp) {
        let glyphs = match &self.glyph_svgs {
            Some((light, dark)) => GlyphSet::load(bitmaps, light, dark),
            None => GlyphSet::empty(),
        };
        let time = self.time.unwrap_or_else(|| Time::from(local_now()));
        let app = WatchfaceApp::new(self.settings, glyphs, self.color_capable, time);

        let config = RuntimeConfig {
            title: self.title,
            viewport: Viewport::new(self.width, self.height, self.shape),
            background: app.theme().background,
        };
        (config, app)
    }

    /// Builds the app, creates the sink from the loaded bitmaps and runs
    /// until `source` is exhausted. Returns the number of frames presented.
    pub fn run<S, D>(self, source: &mut S, make_sink: impl FnOnce(BitmapStore) -> D) -> Result<u64>
    where
        S: EventSource<Event = FaceEvent> + ?Sized,
        D: DisplaySink,
    {
        let mut bitmaps = BitmapStore::new();
        let (config, mut app) = self.build(&mut bitmaps);
        log::info!(
            "starting {} on a {}x{} {:?} display (color: {}, inverted: {})",
            config.title,
            config.viewport.width,
            config.viewport.height,
            config.viewport.shape,
            app.color_capable,
            app.inverted,
        );
        let mut sink = make_sink(bitmaps);
        Runtime::run(config, source, &mut sink, &mut app)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;
    use enough_engine::render::RecordingSink;
    use enough_engine::scene::{DrawCmd, RectCmd};

    use super::*;
    use crate::theme::palette::{BLACK, WHITE};

    struct Scripted(std::vec::IntoIter<FaceEvent>);

    impl EventSource for Scripted {
        type Event = FaceEvent;

        fn next_event(&mut self) -> Result<Option<FaceEvent>> {
            Ok(self.0.next())
        }
    }

    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn load(&mut self) -> Result<Option<Settings>> {
            bail!("storage offline")
        }

        fn save(&mut self, _: &Settings) -> Result<()> {
            bail!("storage offline")
        }
    }

    fn at(h: u32, m: u32) -> Time {
        Time::new(h, m).unwrap()
    }

    fn background_of(frame: &[enough_engine::scene::DrawItem]) -> Option<enough_engine::paint::Color> {
        match &frame.first()?.cmd {
            DrawCmd::Rect(RectCmd { color, .. }) => Some(*color),
            _ => None,
        }
    }

    // ── event handling ────────────────────────────────────────────────────

    #[test]
    fn flag_is_loaded_at_startup() {
        let store = MemorySettings::with(Settings { invert_colors: true });
        let app = WatchfaceApp::new(Box::new(store), GlyphSet::empty(), true, at(1, 2));
        assert!(app.inverted());
        assert_eq!(app.theme().background, BLACK);
    }

    #[test]
    fn unreadable_store_means_not_inverted() {
        let app = WatchfaceApp::new(Box::new(BrokenStore), GlyphSet::empty(), true, at(1, 2));
        assert!(!app.inverted());
    }

    #[test]
    fn tick_updates_time_and_redraws() {
        let mut app = WatchfaceApp::new(Box::new(MemorySettings::new()), GlyphSet::empty(), true, at(1, 2));
        let mut ctx = RuntimeCtx::default();
        app.on_event(FaceEvent::TimeTick(at(1, 3)), &mut ctx);
        assert_eq!(app.time(), at(1, 3));
        assert!(ctx.redraw_requested());
    }

    #[test]
    fn failed_save_still_switches_theme() {
        let mut app = WatchfaceApp::new(Box::new(BrokenStore), GlyphSet::empty(), false, at(1, 2));
        let mut ctx = RuntimeCtx::default();
        app.on_event(FaceEvent::ThemeChanged(true), &mut ctx);
        assert!(app.inverted());
        assert!(ctx.redraw_requested());
    }

    // ── full run ──────────────────────────────────────────────────────────

    #[test]
    fn run_renders_initial_frame_and_each_event() {
        let mut source = Scripted(
            vec![FaceEvent::TimeTick(at(10, 11)), FaceEvent::ThemeChanged(true)].into_iter(),
        );
        let frames = Application::new()
            .time(at(10, 10))
            .run(&mut source, |_| RecordingSink::new())
            .unwrap();
        assert_eq!(frames, 3);
    }

    #[test]
    fn theme_change_repaints_with_new_background() {
        let mut source = Scripted(vec![FaceEvent::ThemeChanged(true)].into_iter());
        let mut sink = RecordingSink::new();
        let mut bitmaps = BitmapStore::new();
        let (config, mut app) = Application::new().time(at(10, 10)).build(&mut bitmaps);
        assert_eq!(config.background, WHITE);

        Runtime::run(config, &mut source, &mut sink, &mut app).unwrap();

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(background_of(&sink.frames[0]), Some(WHITE));
        assert_eq!(background_of(&sink.frames[1]), Some(BLACK));
        assert_eq!(sink.frames[1].len(), 23);
    }

    #[test]
    fn window_background_follows_stored_flag() {
        let mut bitmaps = BitmapStore::new();
        let (config, _) = Application::new()
            .settings(MemorySettings::with(Settings { invert_colors: true }))
            .time(at(0, 0))
            .build(&mut bitmaps);
        assert_eq!(config.background, BLACK);
        assert_eq!(config.viewport, Viewport::new(144.0, 168.0, DisplayShape::Rect));
    }
}
