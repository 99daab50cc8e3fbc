// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size thumbnail tiles addressed inside montage sprite sheets.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

use kurbo::{Size, Vec2};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use understory_infinite_scroll::ItemSource;

/// Number of thumbnails per montage sheet used by the album grid.
pub const DEFAULT_MONTAGE_BATCH: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(batch) => batch,
    None => unreachable!(),
};

/// Layout of a montage: square thumbnails packed side by side into sheets of
/// `batch` thumbnails each.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Montage {
    batch: NonZeroUsize,
    tile_extent: f64,
}

impl Montage {
    /// Creates a montage layout. The thumbnail edge is floored to whole pixels.
    #[must_use]
    pub fn new(batch: NonZeroUsize, tile_extent: f64) -> Self {
        Self {
            batch,
            tile_extent: tile_extent.max(0.0).floor(),
        }
    }

    /// Thumbnails per sheet.
    #[must_use]
    pub fn batch(&self) -> NonZeroUsize {
        self.batch
    }

    /// Edge length of one thumbnail in the sheet.
    #[must_use]
    pub fn tile_extent(&self) -> f64 {
        self.tile_extent
    }

    /// The sheet holding thumbnail `index`.
    #[must_use]
    pub fn sheet_of(&self, index: usize) -> usize {
        index / self.batch
    }

    /// Offset to apply to the sheet so thumbnail `index` shows at the origin.
    #[must_use]
    pub fn sheet_offset(&self, index: usize) -> Vec2 {
        let slot = index % self.batch;
        Vec2::new(-(self.tile_extent * slot as f64), 0.0)
    }

    /// Number of sheets needed for `len` thumbnails.
    #[must_use]
    pub fn sheet_count(&self, len: usize) -> usize {
        len.div_ceil(self.batch.get())
    }

    /// Names the sheets for thumbnails named `names`, one per batch.
    ///
    /// Each name is `{extent}x{extent}` followed by `-{name}` for every
    /// thumbnail on the sheet, so sheet `sheet_of(i)` holds `names[i]`.
    #[must_use]
    pub fn sheet_names<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let prefix = format!("{0}x{0}", self.tile_extent);
        names
            .chunks(self.batch.get())
            .map(|batch| {
                let mut sheet = prefix.clone();
                for name in batch {
                    sheet.push('-');
                    sheet.push_str(name.as_ref());
                }
                sheet
            })
            .collect()
    }
}

/// A materialized thumbnail tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Index of the photo in the dataset.
    pub index: usize,
    /// Montage sheet holding the thumbnail.
    pub sheet: usize,
    /// Background offset selecting the thumbnail within its sheet.
    pub sheet_offset: Vec2,
}

/// An [`ItemSource`] of fixed-size tiles, as in a thumbnail strip or an
/// album grid.
///
/// One page holds as many tiles as cover the container once.
#[derive(Clone, Debug)]
pub struct TileSource {
    len: usize,
    tile_size: Size,
    viewport: Size,
    montage: Montage,
}

impl TileSource {
    /// Creates a source of `len` square tiles, `montage.tile_extent()` on a
    /// side, shown in a container of size `viewport`.
    #[must_use]
    pub fn new(len: usize, montage: Montage, viewport: Size) -> Self {
        let extent = montage.tile_extent();
        Self {
            len,
            tile_size: Size::new(extent, extent),
            viewport,
            montage,
        }
    }

    /// Number of tiles in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replaces the dataset length.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Size of one tile on screen.
    #[must_use]
    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    /// Overrides the on-screen tile size, for tiles drawn larger or smaller
    /// than their montage thumbnail.
    pub fn set_tile_size(&mut self, tile_size: Size) {
        self.tile_size = tile_size;
    }

    /// The montage layout.
    #[must_use]
    pub fn montage(&self) -> &Montage {
        &self.montage
    }

    /// Records a new container size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// The container size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }
}

impl ItemSource for TileSource {
    type Item = Tile;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "tile counts are far below usize::MAX; the cast saturates anyway"
    )]
    fn items_per_page(&self) -> usize {
        let across = self.viewport.width / self.tile_size.width;
        let down = self.viewport.height / self.tile_size.height;
        let covering = (across * down).ceil();
        if !covering.is_finite() || covering < 1.0 {
            return 1;
        }
        covering as usize
    }

    fn materialize(&self, index: usize) -> Option<Tile> {
        (index < self.len).then(|| Tile {
            index,
            sheet: self.montage.sheet_of(index),
            sheet_offset: self.montage.sheet_offset(index),
        })
    }
}
