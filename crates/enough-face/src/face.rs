//! The face renderer.
//!
//! [`render`] is a pure function of time, display geometry, theme and glyphs.
//! It emits the same primitives in the same order every time it is called
//! with the same inputs.

use enough_engine::coords::{Rect, Vec2, Viewport};
use enough_engine::scene::{DrawList, Stroke};

use crate::geometry::{self, HandPoints};
use crate::glyph::GlyphSet;
use crate::theme::{ResolvedTheme, palette};
use crate::time::Time;

/// Paint layers, back to front.
pub mod layer {
    use enough_engine::scene::ZIndex;

    pub const BACKGROUND: ZIndex = ZIndex::new(0);
    pub const TICKS: ZIndex = ZIndex::new(10);
    pub const ACCENTS: ZIndex = ZIndex::new(20);
    pub const HUB_BACKING: ZIndex = ZIndex::new(30);
    pub const GLYPH: ZIndex = ZIndex::new(40);
    pub const HANDS: ZIndex = ZIndex::new(50);
    pub const HUB: ZIndex = ZIndex::new(60);
}

pub const TICK_COUNT: u32 = 12;
pub const TICK_WIDTH: f32 = 1.0;

/// 12, 3 and 9 o'clock.
pub const ACCENT_ANGLES: [f32; 3] = [0.0, 90.0, 270.0];
pub const ACCENT_LENGTH: f32 = 45.0;
pub const ACCENT_WIDTH: f32 = 2.0;

pub const HUB_BACKING_RADIUS: f32 = 20.0;
pub const HAND_WIDTH: f32 = 3.0;
pub const HUB_RING_RADIUS: f32 = 4.0;
pub const HUB_RING_WIDTH: f32 = 2.0;
pub const HUB_DOT_RADIUS: f32 = 3.0;

/// Distance from the dial center down to the glyph's top edge.
pub const GLYPH_OFFSET: f32 = 22.0;
const GLYPH_PATCH_RADIUS: f32 = 2.0;

/// Records one frame of the face into `out`.
pub fn render(
    time: Time,
    viewport: Viewport,
    theme: &ResolvedTheme,
    glyphs: &GlyphSet,
    out: &mut DrawList,
) {
    let bounds = viewport.bounds();
    out.push_solid_rect(layer::BACKGROUND, bounds, theme.background);

    let center = bounds.center();

    // Ticks run past the edge; the display clips them.
    let tick_radius = viewport.max_extent();
    let tick = Stroke::new(TICK_WIDTH, theme.tick_line);
    for i in 0..TICK_COUNT {
        let to = geometry::project(center, (i * 30) as f32, tick_radius);
        out.push_line(layer::TICKS, center, to, tick);
    }

    let accent = Stroke::new(ACCENT_WIDTH, theme.accent);
    for angle in ACCENT_ANGLES {
        let to = geometry::project(center, angle, ACCENT_LENGTH);
        out.push_line(layer::ACCENTS, center, to, accent);
    }

    out.push_solid_circle(layer::HUB_BACKING, center, HUB_BACKING_RADIUS, theme.background);

    if let Some(glyph) = glyphs.select(theme.variant) {
        let top = center.y + GLYPH_OFFSET;
        let patch = Rect::new(
            center.x - (glyph.size.x - 4.0) / 2.0,
            top - 4.0,
            glyph.size.x - 4.0,
            glyph.size.y + 8.0,
        );
        out.push_solid_rounded_rect(layer::GLYPH, patch, GLYPH_PATCH_RADIUS, theme.background);
        out.push_bitmap(layer::GLYPH, glyph.bitmap, Vec2::new(center.x - glyph.size.x / 2.0, top));
    }

    let hour = HandPoints::new(center, geometry::hour_angle(time), geometry::hour_hand_length(viewport));
    draw_hand(out, hour, Stroke::new(HAND_WIDTH, theme.hour_hand));

    let minute = HandPoints::new(center, geometry::minute_angle(time), geometry::minute_hand_length(viewport));
    draw_hand(out, minute, Stroke::new(HAND_WIDTH, theme.minute_hand));

    out.push_circle_outline(layer::HUB, center, HUB_RING_RADIUS, Stroke::new(HUB_RING_WIDTH, palette::RED));
    out.push_solid_circle(layer::HUB, center, HUB_DOT_RADIUS, palette::WHITE);
}

/// Two segments meeting at the hub.
fn draw_hand(out: &mut DrawList, hand: HandPoints, stroke: Stroke) {
    out.push_line(layer::HANDS, hand.tail, hand.center, stroke);
    out.push_line(layer::HANDS, hand.center, hand.tip, stroke);
}
