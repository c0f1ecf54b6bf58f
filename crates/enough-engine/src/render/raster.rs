use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use resvg::tiny_skia::{
    self as sk, FillRule, LineCap, PathBuilder, Pixmap, PixmapPaint, Transform,
};

use crate::coords::{Rect, Viewport};
use crate::paint::Color;
use crate::runtime::RuntimeConfig;
use crate::scene::{
    BitmapCmd, CircleCmd, DrawCmd, DrawList, LineCmd, RectCmd, RoundedRectCmd, Stroke,
};

use super::{BitmapStore, DisplaySink};

/// Software sink that paints draw streams onto a pixmap.
///
/// The pixmap is (re)allocated to match the viewport and cleared to the
/// configured background before every frame. When an output path is set the
/// finished frame is written as PNG after each present.
pub struct RasterTarget {
    bitmaps: BitmapStore,
    pixmap: Option<Pixmap>,
    background: Color,
    output: Option<PathBuf>,
}

impl RasterTarget {
    pub fn new(bitmaps: BitmapStore) -> Self {
        Self {
            bitmaps,
            pixmap: None,
            background: Color::opaque(0.0, 0.0, 0.0),
            output: None,
        }
    }

    /// Write every presented frame to `path` as PNG.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// The most recently painted frame.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Straight-alpha sRGB bytes of one pixel of the last frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Paints `list` in paint order onto a freshly cleared pixmap.
    pub fn paint(&mut self, viewport: Viewport, list: &mut DrawList) -> Result<()> {
        if !viewport.is_valid() {
            bail!("invalid viewport {}x{}", viewport.width, viewport.height);
        }
        let width = viewport.width.ceil() as u32;
        let height = viewport.height.ceil() as u32;

        let reuse = matches!(&self.pixmap, Some(p) if p.width() == width && p.height() == height);
        if !reuse {
            let Some(pixmap) = Pixmap::new(width, height) else {
                bail!("viewport {}x{} cannot back a pixmap", viewport.width, viewport.height);
            };
            self.pixmap = Some(pixmap);
        }

        let Self { bitmaps, pixmap, background, .. } = self;
        let Some(pixmap) = pixmap.as_mut() else {
            bail!("pixmap missing after allocation");
        };

        pixmap.fill(sk_color(*background));

        for item in list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Rect(cmd) => fill_rect(pixmap, cmd),
                DrawCmd::RoundedRect(cmd) => fill_rounded_rect(pixmap, cmd),
                DrawCmd::Line(cmd) => stroke_line(pixmap, cmd),
                DrawCmd::Circle(cmd) => draw_circle(pixmap, cmd),
                DrawCmd::Bitmap(cmd) => blit(pixmap, bitmaps, cmd),
            }
        }

        Ok(())
    }

    /// Encodes the last frame as PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let pixmap = self.pixmap.as_ref().context("no frame has been painted yet")?;

        let mut img = image::RgbaImage::new(pixmap.width(), pixmap.height());
        for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }

        img.save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write frame to {}", path.display()))
    }
}

impl DisplaySink for RasterTarget {
    fn configure(&mut self, config: &RuntimeConfig) -> Result<()> {
        self.background = config.background;
        log::info!(
            "raster sink ready: {}x{} {:?} display",
            config.viewport.width,
            config.viewport.height,
            config.viewport.shape
        );
        Ok(())
    }

    fn present(&mut self, viewport: Viewport, frame: &mut DrawList) -> Result<()> {
        self.paint(viewport, frame)?;
        if let Some(path) = &self.output {
            self.save_png(path)?;
            log::debug!("frame written to {}", path.display());
        }
        Ok(())
    }
}

// ── paint helpers ─────────────────────────────────────────────────────────

fn sk_color(color: Color) -> sk::Color {
    let [r, g, b, a] = color.to_srgb_u8();
    sk::Color::from_rgba8(r, g, b, a)
}

fn solid(color: Color) -> sk::Paint<'static> {
    let mut paint = sk::Paint::default();
    paint.set_color(sk_color(color));
    paint.anti_alias = true;
    paint
}

fn sk_stroke(stroke: Stroke) -> sk::Stroke {
    sk::Stroke {
        width: stroke.width,
        line_cap: LineCap::Round,
        ..sk::Stroke::default()
    }
}

fn fill_rect(pixmap: &mut Pixmap, cmd: &RectCmd) {
    let r = cmd.rect;
    if let Some(rect) = sk::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y) {
        pixmap.fill_rect(rect, &solid(cmd.color), Transform::identity(), None);
    }
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<sk::Path> {
    let r = radius.min(rect.size.x * 0.5).min(rect.size.y * 0.5).max(0.0);
    let (x0, y0) = (rect.origin.x, rect.origin.y);
    let max = rect.max();
    let (x1, y1) = (max.x, max.y);

    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.quad_to(x1, y0, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.quad_to(x1, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.quad_to(x0, y1, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.quad_to(x0, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

fn fill_rounded_rect(pixmap: &mut Pixmap, cmd: &RoundedRectCmd) {
    if cmd.rect.is_empty() {
        return;
    }
    if let Some(path) = rounded_rect_path(cmd.rect, cmd.radius) {
        pixmap.fill_path(&path, &solid(cmd.color), FillRule::Winding, Transform::identity(), None);
    }
}

fn stroke_line(pixmap: &mut Pixmap, cmd: &LineCmd) {
    // Zero-length segments draw nothing (a round cap would leave a dot).
    if cmd.length() <= 0.0 {
        return;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(cmd.from.x, cmd.from.y);
    pb.line_to(cmd.to.x, cmd.to.y);
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(
            &path,
            &solid(cmd.stroke.color),
            &sk_stroke(cmd.stroke),
            Transform::identity(),
            None,
        );
    }
}

fn draw_circle(pixmap: &mut Pixmap, cmd: &CircleCmd) {
    let Some(path) = PathBuilder::from_circle(cmd.center.x, cmd.center.y, cmd.radius) else {
        return;
    };
    if let Some(fill) = cmd.fill {
        pixmap.fill_path(&path, &solid(fill), FillRule::Winding, Transform::identity(), None);
    }
    if let Some(border) = cmd.border {
        pixmap.stroke_path(&path, &solid(border.color), &sk_stroke(border), Transform::identity(), None);
    }
}

fn blit(pixmap: &mut Pixmap, bitmaps: &BitmapStore, cmd: &BitmapCmd) {
    let Some(src) = bitmaps.get(cmd.bitmap) else {
        log::warn!("draw stream references unknown bitmap {:?}", cmd.bitmap);
        return;
    };
    pixmap.draw_pixmap(
        cmd.origin.x.round() as i32,
        cmd.origin.y.round() as i32,
        src.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{DisplayShape, Vec2};
    use crate::scene::ZIndex;

    const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);

    fn viewport() -> Viewport {
        Viewport::new(40.0, 30.0, DisplayShape::Rect)
    }

    fn configured() -> RasterTarget {
        let mut target = RasterTarget::new(BitmapStore::new());
        let config = RuntimeConfig { viewport: viewport(), background: WHITE, ..Default::default() };
        target.configure(&config).unwrap();
        target
    }

    // ── clearing ──────────────────────────────────────────────────────────

    #[test]
    fn empty_frame_is_background() {
        let mut target = configured();
        target.paint(viewport(), &mut DrawList::new()).unwrap();
        assert_eq!(target.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(39, 29), Some([255, 255, 255, 255]));
    }

    #[test]
    fn pixmap_matches_viewport() {
        let mut target = configured();
        target.paint(viewport(), &mut DrawList::new()).unwrap();
        let pixmap = target.pixmap().unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (40, 30));
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn later_items_paint_over_earlier_ones() {
        let mut target = configured();
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 40.0, 30.0), RED);
        list.push_solid_circle(ZIndex::new(1), Vec2::new(20.0, 15.0), 6.0, WHITE);
        target.paint(viewport(), &mut list).unwrap();

        assert_eq!(target.pixel(20, 15), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(2, 2), Some([255, 0, 0, 255]));
    }

    #[test]
    fn outline_leaves_circle_interior_untouched() {
        let mut target = configured();
        let mut list = DrawList::new();
        list.push_circle_outline(ZIndex::new(0), Vec2::new(20.0, 15.0), 10.0, Stroke::new(4.0, RED));
        target.paint(viewport(), &mut list).unwrap();

        assert_eq!(target.pixel(20, 15), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(29, 15), Some([255, 0, 0, 255]));
    }

    #[test]
    fn rounded_rect_leaves_its_corners_clear() {
        let mut target = configured();
        let mut list = DrawList::new();
        list.push_solid_rounded_rect(ZIndex::new(0), Rect::new(10.0, 5.0, 20.0, 20.0), 8.0, RED);
        target.paint(viewport(), &mut list).unwrap();

        assert_eq!(target.pixel(20, 15), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(10, 5), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(29, 24), Some([255, 255, 255, 255]));
    }

    #[test]
    fn zero_length_line_is_skipped() {
        let mut target = configured();
        let mut list = DrawList::new();
        let p = Vec2::new(5.0, 5.0);
        list.push_line(ZIndex::new(0), p, p, Stroke::new(3.0, RED));
        target.paint(viewport(), &mut list).unwrap();
        assert_eq!(target.pixel(5, 5), Some([255, 255, 255, 255]));
    }

    #[test]
    fn invalid_viewport_is_an_error() {
        let mut target = configured();
        let empty = Viewport::new(0.0, 0.0, DisplayShape::Rect);
        let infinite = Viewport::new(f32::INFINITY, 30.0, DisplayShape::Rect);
        assert!(target.paint(empty, &mut DrawList::new()).is_err());
        assert!(target.paint(infinite, &mut DrawList::new()).is_err());
        assert!(target.pixmap().is_none());
    }

    // ── output ────────────────────────────────────────────────────────────

    #[test]
    fn save_before_paint_fails() {
        let target = configured();
        assert!(target.save_png(Path::new("unused.png")).is_err());
    }
}
