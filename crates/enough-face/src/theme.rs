//! Maps the "invert colors" flag and the display's color capability onto the
//! five semantic colors the face paints with.

use enough_engine::paint::Color;

/// Fixed device palette. The face never interpolates between these.
pub mod palette {
    use enough_engine::paint::Color;

    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    /// `#555555`
    pub const DARK_GRAY: Color = Color::opaque(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
    /// `#AAAAAA`
    pub const LIGHT_GRAY: Color = Color::opaque(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    /// `#AA0000`, "dark candy apple red".
    pub const DARK_RED: Color = Color::opaque(2.0 / 3.0, 0.0, 0.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
}

/// Which way round the two-tone scheme is.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ThemeVariant {
    /// Dark marks on a white background.
    #[default]
    Light,
    /// Light marks on a black background.
    Dark,
}

impl ThemeVariant {
    #[inline]
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted { Self::Dark } else { Self::Light }
    }

    #[inline]
    pub fn is_inverted(self) -> bool {
        self == Self::Dark
    }
}

/// Colors for one render. Recomputed every frame, never cached.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub variant: ThemeVariant,
    pub background: Color,
    pub tick_line: Color,
    pub accent: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
}

/// Resolves the theme for a flag value on a given display.
///
/// On color displays the hands keep their red tones in both variants; on
/// monochrome displays they follow the accent color.
pub fn resolve(inverted: bool, color_capable: bool) -> ResolvedTheme {
    use palette::*;

    let variant = ThemeVariant::from_inverted(inverted);
    let (background, tick_line, accent) = match variant {
        ThemeVariant::Light => (WHITE, LIGHT_GRAY, BLACK),
        ThemeVariant::Dark => (BLACK, DARK_GRAY, WHITE),
    };
    let (hour_hand, minute_hand) = if color_capable { (DARK_RED, RED) } else { (accent, accent) };

    ResolvedTheme { variant, background, tick_line, accent, hour_hand, minute_hand }
}

#[cfg(test)]
mod tests {
    use super::palette::*;
    use super::*;

    #[test]
    fn resolve_is_total() {
        for inverted in [false, true] {
            for color in [false, true] {
                let theme = resolve(inverted, color);
                let expected = if inverted { BLACK } else { WHITE };
                assert_eq!(theme.background, expected);
                assert_eq!(theme.variant.is_inverted(), inverted);
            }
        }
    }

    #[test]
    fn light_color_display() {
        let theme = resolve(false, true);
        assert_eq!(theme.tick_line, LIGHT_GRAY);
        assert_eq!(theme.accent, BLACK);
        assert_eq!(theme.hour_hand, DARK_RED);
        assert_eq!(theme.minute_hand, RED);
    }

    #[test]
    fn inverted_monochrome_display() {
        let theme = resolve(true, false);
        assert_eq!(theme.tick_line, DARK_GRAY);
        assert_eq!(theme.accent, WHITE);
        assert_eq!(theme.hour_hand, WHITE);
        assert_eq!(theme.minute_hand, WHITE);
    }

    #[test]
    fn palette_matches_device_values() {
        assert_eq!(DARK_GRAY.to_srgb_u8(), [0x55, 0x55, 0x55, 0xFF]);
        assert_eq!(LIGHT_GRAY.to_srgb_u8(), [0xAA, 0xAA, 0xAA, 0xFF]);
        assert_eq!(DARK_RED.to_srgb_u8(), [0xAA, 0x00, 0x00, 0xFF]);
    }
}
