use anyhow::{Context, Result};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::coords::Vec2;
use crate::scene::BitmapId;

/// Owns decoded bitmaps and hands out [`BitmapId`] handles.
///
/// Bitmaps are immutable once inserted; ids are dense indices into the store.
#[derive(Default)]
pub struct BitmapStore {
    bitmaps: Vec<Pixmap>,
}

impl BitmapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterizes an SVG document at its intrinsic size and stores the result.
    pub fn load_svg(&mut self, data: &[u8]) -> Result<BitmapId> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .context("failed to parse SVG bitmap")?;
        let size = tree.size().to_int_size();
        let mut pixmap = Pixmap::new(size.width(), size.height())
            .context("SVG bitmap has zero size")?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        log::debug!("loaded SVG bitmap {}x{}", size.width(), size.height());
        Ok(self.insert(pixmap))
    }

    /// Stores an already decoded pixmap.
    pub fn insert(&mut self, pixmap: Pixmap) -> BitmapId {
        let id = BitmapId::from_raw(self.bitmaps.len() as u32);
        self.bitmaps.push(pixmap);
        id
    }

    #[inline]
    pub fn get(&self, id: BitmapId) -> Option<&Pixmap> {
        self.bitmaps.get(id.raw() as usize)
    }

    /// Pixel size of a stored bitmap.
    pub fn size(&self, id: BitmapId) -> Option<Vec2> {
        self.get(id)
            .map(|p| Vec2::new(p.width() as f32, p.height() as f32))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }
}
