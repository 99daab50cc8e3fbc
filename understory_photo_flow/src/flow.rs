// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Justified rows of photos as scroller items.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Size;
use smallvec::SmallVec;
use understory_infinite_scroll::ItemSource;
use understory_justified_rows::{JustifiedRowPlanner, RowPlan};

/// Anything with a natural pixel size that can be laid out in a flow.
pub trait Photo {
    /// Natural size of the photo. Degenerate sizes are replaced by the
    /// planner's fallback.
    fn size(&self) -> Size;
}

impl Photo for Size {
    fn size(&self) -> Size {
        *self
    }
}

impl<P: Photo + ?Sized> Photo for &P {
    fn size(&self) -> Size {
        (**self).size()
    }
}

/// One photo placed in a [`FlowRow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowCell {
    /// Index of the photo in the dataset.
    pub photo: usize,
    /// Drawn size, padding excluded.
    pub size: Size,
}

/// A materialized row of a photo flow.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowRow {
    /// Index of the row in the plan.
    pub row: usize,
    /// Height every cell is drawn at.
    pub height: f64,
    /// The photos in the row, in order.
    pub cells: SmallVec<[FlowCell; 8]>,
}

impl FlowRow {
    /// Dataset indices of the photos in this row.
    #[must_use]
    pub fn photos(&self) -> Range<usize> {
        match (self.cells.first(), self.cells.last()) {
            (Some(first), Some(last)) => first.photo..last.photo + 1,
            _ => 0..0,
        }
    }

    /// Returns `true` if the row shows photo `photo`.
    #[must_use]
    pub fn contains(&self, photo: usize) -> bool {
        self.photos().contains(&photo)
    }
}

/// An [`ItemSource`] whose items are the justified rows of a photo dataset.
///
/// The source owns the photos and keeps a [`RowPlan`] for the current
/// container width. One page is the planner's
/// [`rows_per_page`](JustifiedRowPlanner::rows_per_page) for the current
/// container height.
#[derive(Clone, Debug)]
pub struct FlowRowSource<P> {
    photos: Vec<P>,
    sizes: Vec<Size>,
    planner: JustifiedRowPlanner,
    viewport: Size,
    plan: RowPlan,
}

impl<P: Photo> FlowRowSource<P> {
    /// Creates an empty flow for a container of size `viewport`.
    #[must_use]
    pub fn new(planner: JustifiedRowPlanner, viewport: Size) -> Self {
        Self {
            photos: Vec::new(),
            sizes: Vec::new(),
            planner,
            viewport,
            plan: RowPlan::default(),
        }
    }

    /// The photos, in dataset order.
    #[must_use]
    pub fn photos(&self) -> &[P] {
        &self.photos
    }

    /// The planner settings.
    #[must_use]
    pub fn planner(&self) -> &JustifiedRowPlanner {
        &self.planner
    }

    /// The container size the plan was computed for.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The current row plan.
    #[must_use]
    pub fn plan(&self) -> &RowPlan {
        &self.plan
    }

    /// The row showing photo `photo`, if the dataset has one.
    #[must_use]
    pub fn row_of_photo(&self, photo: usize) -> Option<usize> {
        self.plan.row_of_image(photo)
    }

    /// Replaces the dataset and re-plans.
    pub fn set_photos(&mut self, photos: Vec<P>) {
        self.sizes = photos
            .iter()
            .map(|photo| self.planner.normalize(photo.size()))
            .collect();
        self.photos = photos;
        self.replan();
    }

    /// Replaces the planner settings and re-plans.
    pub fn set_planner(&mut self, planner: JustifiedRowPlanner) {
        self.planner = planner;
        self.sizes = self
            .photos
            .iter()
            .map(|photo| planner.normalize(photo.size()))
            .collect();
        self.replan();
    }

    /// Records a new container size.
    ///
    /// Rows only depend on the width, so the plan is recomputed only when the
    /// width changes. Returns whether it was.
    pub fn set_viewport(&mut self, viewport: Size) -> bool {
        let width_changed = viewport.width != self.viewport.width;
        self.viewport = viewport;
        if width_changed {
            self.replan();
        }
        width_changed
    }

    fn replan(&mut self) {
        self.plan = self
            .planner
            .plan(self.sizes.iter().copied(), self.viewport.width);
    }
}

impl<P: Photo> ItemSource for FlowRowSource<P> {
    type Item = FlowRow;

    fn items_per_page(&self) -> usize {
        self.planner.rows_per_page(self.viewport.height)
    }

    fn materialize(&self, row: usize) -> Option<FlowRow> {
        let entry = self.plan.get(row)?;
        let cells = entry
            .range()
            .map(|photo| FlowCell {
                photo,
                size: Size::new(
                    self.planner.scaled_width(self.sizes[photo], entry.height),
                    entry.height,
                ),
            })
            .collect();
        Some(FlowRow {
            row,
            height: entry.height,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Size;
    use understory_infinite_scroll::ItemSource;
    use understory_justified_rows::JustifiedRowPlanner;

    use super::FlowRowSource;

    fn source() -> FlowRowSource<Size> {
        let mut source = FlowRowSource::new(JustifiedRowPlanner::default(), Size::new(1000.0, 500.0));
        // Padded widths at the default target: 600, 500, 700, 900.
        source.set_photos(vec![
            Size::new(590.0, 200.0),
            Size::new(490.0, 200.0),
            Size::new(690.0, 200.0),
            Size::new(890.0, 200.0),
        ]);
        source
    }

    #[test]
    fn rows_materialize_from_the_plan() {
        let source = source();
        assert_eq!(source.plan().len(), 2);

        let first = source.materialize(0).unwrap();
        assert_eq!(first.row, 0);
        assert_eq!(first.photos(), 0..2);
        assert!(first.cells.iter().all(|cell| cell.size.height == first.height));
        let width: f64 = first.cells.iter().map(|cell| cell.size.width + 10.0).sum();
        assert!((width - 1000.0).abs() < 1e-6);

        assert_eq!(source.materialize(1).unwrap().photos(), 2..4);
        assert_eq!(source.materialize(2), None);
    }

    #[test]
    fn materialize_is_idempotent() {
        let source = source();
        assert_eq!(source.materialize(1), source.materialize(1));
    }

    #[test]
    fn page_size_follows_the_container_height() {
        let mut source = source();
        assert_eq!(source.items_per_page(), 4);
        assert!(!source.set_viewport(Size::new(1000.0, 900.0)));
        assert_eq!(source.items_per_page(), 6);
    }

    #[test]
    fn width_change_replans() {
        let mut source = source();
        assert!(source.set_viewport(Size::new(2000.0, 500.0)));
        assert_eq!(source.plan().container_width(), 2000.0);
        assert_eq!(source.plan().len(), 2);
        assert_eq!(source.row_of_photo(3), Some(1));
    }

    #[test]
    fn empty_dataset_materializes_nothing() {
        let source: FlowRowSource<Size> =
            FlowRowSource::new(JustifiedRowPlanner::default(), Size::new(800.0, 600.0));
        assert_eq!(source.materialize(0), None);
        assert_eq!(source.row_of_photo(0), None);
    }
}
