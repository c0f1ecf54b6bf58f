//! Dial geometry: hand angles, hand lengths and polar projection.
//!
//! Angles are in degrees, 0° at 12 o'clock, growing clockwise.

use enough_engine::coords::{DisplayShape, Vec2, Viewport};

use crate::time::Time;

/// Length of the counterweight behind the hub.
pub const HAND_TAIL: f32 = 16.0;

/// How far each hand tip stays inside the display's short half-extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandInsets {
    pub hour: f32,
    pub minute: f32,
}

impl HandInsets {
    pub const RECT: Self = Self { hour: 28.0, minute: 8.0 };
    pub const ROUND: Self = Self { hour: 44.0, minute: 22.0 };

    #[inline]
    pub const fn for_shape(shape: DisplayShape) -> Self {
        match shape {
            DisplayShape::Rect => Self::RECT,
            DisplayShape::Round => Self::ROUND,
        }
    }
}

#[inline]
pub fn minute_angle(time: Time) -> f32 {
    360.0 * time.minute() as f32 / 60.0
}

/// The hour hand moves continuously with the minutes.
#[inline]
pub fn hour_angle(time: Time) -> f32 {
    360.0 * (time.dial_hour() * 60 + time.minute()) as f32 / 720.0
}

/// Point at `radius` from `center` along `degrees`, snapped to whole pixels.
#[inline]
pub fn project(center: Vec2, degrees: f32, radius: f32) -> Vec2 {
    center + (Vec2::from_dial_angle(degrees) * radius).round()
}

pub fn hour_hand_length(viewport: Viewport) -> f32 {
    (viewport.min_half_extent() - HandInsets::for_shape(viewport.shape).hour).max(0.0)
}

pub fn minute_hand_length(viewport: Viewport) -> f32 {
    (viewport.min_half_extent() - HandInsets::for_shape(viewport.shape).minute).max(0.0)
}

/// The three points a hand is drawn through: tail, hub, tip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandPoints {
    pub tail: Vec2,
    pub center: Vec2,
    pub tip: Vec2,
}

impl HandPoints {
    pub fn new(center: Vec2, degrees: f32, length: f32) -> Self {
        Self {
            tail: project(center, degrees + 180.0, HAND_TAIL),
            center,
            tip: project(center, degrees, length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> Time {
        Time::new(h, m).unwrap()
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn hour_angles() {
        assert_eq!(hour_angle(at(0, 0)), 0.0);
        assert_eq!(hour_angle(at(6, 0)), 180.0);
        assert_eq!(hour_angle(at(18, 0)), 180.0);
        assert_eq!(hour_angle(at(1, 30)), 45.0);
    }

    #[test]
    fn minute_angles() {
        assert_eq!(minute_angle(at(3, 0)), 0.0);
        assert_eq!(minute_angle(at(3, 30)), 180.0);
        assert_eq!(minute_angle(at(3, 10)), 60.0);
    }

    // ── insets ────────────────────────────────────────────────────────────

    #[test]
    fn inset_policy_on_large_square_display() {
        let rect = Viewport::new(800.0, 800.0, DisplayShape::Rect);
        let round = Viewport::new(800.0, 800.0, DisplayShape::Round);
        assert_eq!(hour_hand_length(rect), 372.0);
        assert_eq!(hour_hand_length(round), 356.0);
        assert_eq!(minute_hand_length(rect), 392.0);
        assert_eq!(minute_hand_length(round), 378.0);
    }

    #[test]
    fn hands_stay_inside_short_side() {
        let vp = Viewport::new(144.0, 168.0, DisplayShape::Rect);
        assert!(hour_hand_length(vp) < vp.min_half_extent());
        assert!(minute_hand_length(vp) < vp.min_half_extent());
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn cardinal_projections_are_exact() {
        let c = Vec2::new(72.0, 84.0);
        assert_eq!(project(c, 0.0, 10.0), Vec2::new(72.0, 74.0));
        assert_eq!(project(c, 90.0, 10.0), Vec2::new(82.0, 84.0));
        assert_eq!(project(c, 180.0, 10.0), Vec2::new(72.0, 94.0));
        assert_eq!(project(c, 270.0, 10.0), Vec2::new(62.0, 84.0));
    }

    #[test]
    fn tail_points_away_from_tip() {
        let c = Vec2::new(100.0, 100.0);
        let hand = HandPoints::new(c, 90.0, 50.0);
        assert_eq!(hand.tip, Vec2::new(150.0, 100.0));
        assert_eq!(hand.tail, Vec2::new(84.0, 100.0));
    }
}
