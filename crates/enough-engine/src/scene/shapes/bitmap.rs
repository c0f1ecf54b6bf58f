use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Opaque handle to a bitmap owned by a [`BitmapStore`](crate::render::BitmapStore).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitmapId(pub(crate) u32);

impl BitmapId {
    /// Builds a handle from its raw index.
    ///
    /// Only meaningful for the store that issued the index; useful when a
    /// draw stream is produced without a store (tests, replays).
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Bitmap blit payload. `origin` is the top-left corner in display pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapCmd {
    pub bitmap: BitmapId,
    pub origin: Vec2,
}

impl DrawList {
    /// Records a bitmap draw at `origin`.
    #[inline]
    pub fn push_bitmap(&mut self, z: ZIndex, bitmap: BitmapId, origin: Vec2) {
        self.push(z, DrawCmd::Bitmap(BitmapCmd { bitmap, origin }));
    }
}
