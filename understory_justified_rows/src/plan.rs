// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output of row planning.

use alloc::vec::Vec;
use core::ops::Range;

/// One justified row: a contiguous run of images and the height they share.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowPlanEntry {
    /// Index of the first image in the row.
    pub start: usize,
    /// One past the index of the last image in the row.
    pub end: usize,
    /// Height every image in the row is drawn at, padding excluded.
    pub height: f64,
    /// Whether the row exactly fills the container width.
    ///
    /// Only a trailing row too short to reach the width is `false`; it keeps
    /// the target height instead of being stretched.
    pub fills_width: bool,
}

impl RowPlanEntry {
    /// The image indices in this row.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of images in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the row holds no images. Planned rows never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Rows covering a flat image sequence, in order.
///
/// Rows are contiguous and increasing: the first starts at image 0, each
/// starts where the previous one ended, and the last ends at
/// [`image_count`](Self::image_count).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowPlan {
    pub(crate) rows: Vec<RowPlanEntry>,
    pub(crate) image_count: usize,
    pub(crate) container_width: f64,
}

impl RowPlan {
    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[RowPlanEntry] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the plan has no rows (the input was empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `row`, if any.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&RowPlanEntry> {
        self.rows.get(row)
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> core::slice::Iter<'_, RowPlanEntry> {
        self.rows.iter()
    }

    /// Number of images the plan covers.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Container width the plan was computed for.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// The row containing image `image`, or `None` if the plan does not cover it.
    #[must_use]
    pub fn row_of_image(&self, image: usize) -> Option<usize> {
        if image >= self.image_count {
            return None;
        }
        // Row 0 starts at image 0, so at least one row precedes any covered image.
        Some(self.rows.partition_point(|row| row.start <= image) - 1)
    }
}

impl<'a> IntoIterator for &'a RowPlan {
    type Item = &'a RowPlanEntry;
    type IntoIter = core::slice::Iter<'a, RowPlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
