use enough_engine::coords::Vec2;
use enough_engine::render::BitmapStore;
use enough_engine::scene::BitmapId;

use crate::theme::ThemeVariant;

/// A pre-rendered bitmap and its pixel size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Glyph {
    pub bitmap: BitmapId,
    pub size: Vec2,
}

/// The decorative "6" in both color variants.
///
/// The set is only usable when both variants loaded; a half-loaded set is
/// treated as missing so the glyph never clashes with its background.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphSet {
    on_light: Option<Glyph>,
    on_dark: Option<Glyph>,
}

impl GlyphSet {
    /// `on_light` is the dark digit drawn over the light theme, `on_dark` the
    /// light digit drawn over the inverted theme.
    pub fn new(on_light: Glyph, on_dark: Glyph) -> Self {
        Self { on_light: Some(on_light), on_dark: Some(on_dark) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Rasterizes both SVG variants into `store`.
    ///
    /// Decoding failures are logged and leave the set without that variant.
    pub fn load(store: &mut BitmapStore, on_light_svg: &[u8], on_dark_svg: &[u8]) -> Self {
        let set = Self {
            on_light: load_variant(store, on_light_svg, "light"),
            on_dark: load_variant(store, on_dark_svg, "dark"),
        };
        if !set.is_available() {
            log::warn!("glyph set incomplete, the face will be drawn without it");
        }
        set
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.on_light.is_some() && self.on_dark.is_some()
    }

    /// The variant matching `variant`, or `None` if the set is unusable.
    pub fn select(&self, variant: ThemeVariant) -> Option<Glyph> {
        if !self.is_available() {
            return None;
        }
        match variant {
            ThemeVariant::Light => self.on_light,
            ThemeVariant::Dark => self.on_dark,
        }
    }
}

fn load_variant(store: &mut BitmapStore, svg: &[u8], name: &str) -> Option<Glyph> {
    let bitmap = match store.load_svg(svg) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("failed to load {name} glyph: {e:#}");
            return None;
        }
    };
    let size = store.size(bitmap)?;
    Some(Glyph { bitmap, size })
}
