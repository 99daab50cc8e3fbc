// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy justified row partitioning.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Size;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::plan::{RowPlan, RowPlanEntry};

/// Default target row height.
pub const DEFAULT_TARGET_ROW_HEIGHT: f64 = 200.0;

/// Default horizontal padding charged per image.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Size substituted for images whose natural size is missing or degenerate.
pub const FALLBACK_SIZE: Size = Size::new(1200.0, 900.0);

/// Partitions a sequence of image sizes into justified rows.
///
/// Each image's *padded width* is its width scaled to the target row height,
/// plus the padding. Images are added to the current row while they fit; an
/// image whose padded width exceeds twice the remaining width closes the row
/// and starts the next one. A half-fitting image therefore joins the row and
/// the row shrinks slightly to absorb it.
///
/// Every row except the last is then given the height at which its images'
/// padded widths sum exactly to the container width. The last row takes the
/// same height only if that does not exceed the target; otherwise it keeps
/// the target height and is left short.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JustifiedRowPlanner {
    target_row_height: f64,
    padding: f64,
    fallback_size: Size,
}

impl Default for JustifiedRowPlanner {
    fn default() -> Self {
        Self {
            target_row_height: DEFAULT_TARGET_ROW_HEIGHT,
            padding: DEFAULT_PADDING,
            fallback_size: FALLBACK_SIZE,
        }
    }
}

impl JustifiedRowPlanner {
    /// Creates a planner with the given target row height and per-image padding.
    ///
    /// A non-positive or non-finite target falls back to
    /// [`DEFAULT_TARGET_ROW_HEIGHT`]; negative padding is treated as zero.
    #[must_use]
    pub fn new(target_row_height: f64, padding: f64) -> Self {
        let mut planner = Self::default();
        planner.set_target_row_height(target_row_height);
        planner.set_padding(padding);
        planner
    }

    /// Replaces the size used for images without a usable natural size.
    #[must_use]
    pub fn with_fallback_size(mut self, size: Size) -> Self {
        if is_usable(size) {
            self.fallback_size = size;
        }
        self
    }

    /// Target row height.
    #[must_use]
    pub fn target_row_height(&self) -> f64 {
        self.target_row_height
    }

    /// Sets the target row height.
    pub fn set_target_row_height(&mut self, height: f64) {
        debug_assert!(
            height.is_finite() && height > 0.0,
            "target row height must be finite and positive"
        );
        self.target_row_height = if height.is_finite() && height > 0.0 {
            height
        } else {
            DEFAULT_TARGET_ROW_HEIGHT
        };
    }

    /// Horizontal padding charged per image.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Sets the per-image padding.
    pub fn set_padding(&mut self, padding: f64) {
        debug_assert!(padding.is_finite(), "padding must be finite");
        self.padding = if padding.is_finite() {
            padding.max(0.0)
        } else {
            0.0
        };
    }

    /// Size used in place of unusable image sizes.
    #[must_use]
    pub fn fallback_size(&self) -> Size {
        self.fallback_size
    }

    /// Returns `size`, or the fallback size if `size` is not strictly positive
    /// and finite in both dimensions.
    #[must_use]
    pub fn normalize(&self, size: Size) -> Size {
        if is_usable(size) {
            size
        } else {
            tracing::warn!(
                width = size.width,
                height = size.height,
                "unusable image size, using fallback"
            );
            self.fallback_size
        }
    }

    /// Width of an image drawn at `height`, padding excluded.
    #[must_use]
    pub fn scaled_width(&self, size: Size, height: f64) -> f64 {
        let size = self.normalize(size);
        size.width / size.height * height
    }

    /// Width of an image drawn at `height`, padding included.
    #[must_use]
    pub fn padded_width_at(&self, size: Size, height: f64) -> f64 {
        self.scaled_width(size, height) + self.padding
    }

    /// Width of an image drawn at the target row height, padding included.
    #[must_use]
    pub fn padded_width(&self, size: Size) -> f64 {
        self.padded_width_at(size, self.target_row_height)
    }

    /// Number of rows to materialize per page for a viewport `viewport_height` tall.
    ///
    /// This is enough rows at the target height to cover the viewport, plus one.
    #[must_use]
    pub fn rows_per_page(&self, viewport_height: f64) -> usize {
        let covering = (viewport_height.max(0.0) / self.target_row_height).ceil();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "row counts are small and non-negative; saturating is fine"
        )]
        let covering = covering as usize;
        covering.saturating_add(1)
    }

    /// Partitions `sizes` into rows for a container `container_width` wide.
    pub fn plan<I>(&self, sizes: I, container_width: f64) -> RowPlan
    where
        I: IntoIterator<Item = Size>,
    {
        let mut rows = Vec::new();
        let mut start = 0;
        let mut count = 0;
        let mut remaining = container_width;
        let mut aspect_sum = 0.0;

        for (index, size) in sizes.into_iter().enumerate() {
            let size = self.normalize(size);
            let aspect = size.width / size.height;
            let padded = aspect * self.target_row_height + self.padding;
            if index > start && padded / 2.0 > remaining {
                // The closing image opens the next row with the full width.
                rows.push(self.close_row(start..index, aspect_sum, container_width, false));
                start = index;
                remaining = container_width;
                aspect_sum = aspect;
            } else {
                remaining -= padded;
                aspect_sum += aspect;
            }
            count = index + 1;
        }
        if count > start {
            rows.push(self.close_row(start..count, aspect_sum, container_width, true));
        }

        tracing::trace!(
            images = count,
            rows = rows.len(),
            container_width,
            "planned justified rows"
        );
        RowPlan {
            rows,
            image_count: count,
            container_width,
        }
    }

    /// Sizes a row so its padded widths sum to `container_width` exactly.
    ///
    /// The height solves `sum(aspect * h + padding) = container_width` rather
    /// than unpadding `target * container_width / sum(padded)`, which only
    /// approximates the width once padding is involved.
    fn close_row(
        &self,
        range: Range<usize>,
        aspect_sum: f64,
        container_width: f64,
        last: bool,
    ) -> RowPlanEntry {
        let padding = range.len() as f64 * self.padding;
        let justified = ((container_width - padding) / aspect_sum).max(0.0);
        let fills_width = !last || justified <= self.target_row_height;
        RowPlanEntry {
            start: range.start,
            end: range.end,
            height: if fills_width {
                justified
            } else {
                self.target_row_height
            },
            fills_width,
        }
    }
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Size;

    use super::{FALLBACK_SIZE, JustifiedRowPlanner};
    use crate::RowPlan;

    const EPSILON: f64 = 1e-9;

    /// An image whose padded width at the default target is `padded`.
    fn padded(padded: f64) -> Size {
        Size::new(padded - 10.0, 200.0)
    }

    fn ranges(plan: &RowPlan) -> Vec<(usize, usize)> {
        plan.iter().map(|row| (row.start, row.end)).collect()
    }

    #[test]
    fn empty_input_plans_no_rows() {
        let plan = JustifiedRowPlanner::default().plan([], 1000.0);
        assert!(plan.is_empty());
        assert_eq!(plan.image_count(), 0);
        assert_eq!(plan.row_of_image(0), None);
    }

    #[test]
    fn oversized_image_starts_a_new_row() {
        // Padded widths 600, 500, 12 in a 1000-wide container: the second
        // image half fits and joins, the third finds the row overfull.
        let planner = JustifiedRowPlanner::default();
        let plan = planner.plan([padded(600.0), padded(500.0), padded(12.0)], 1000.0);
        assert_eq!(ranges(&plan), vec![(0, 2), (2, 3)]);

        // The first row shrinks to absorb the overflow.
        let first = plan.rows()[0];
        assert!(first.fills_width);
        assert!(first.height < 200.0);
        // The short last row keeps the target height.
        let last = plan.rows()[1];
        assert!(!last.fills_width);
        assert_eq!(last.height, 200.0);
    }

    #[test]
    fn row_closes_when_image_exceeds_twice_the_remainder() {
        let planner = JustifiedRowPlanner::default();
        // 400 remain after the first image; 790 / 2 fits, 810 / 2 does not.
        let joins = planner.plan([padded(600.0), padded(790.0)], 1000.0);
        assert_eq!(ranges(&joins), vec![(0, 2)]);
        let splits = planner.plan([padded(600.0), padded(810.0)], 1000.0);
        assert_eq!(ranges(&splits), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn closing_image_starts_the_next_row_with_a_full_budget() {
        let planner = JustifiedRowPlanner::default();
        // 810 closes the first row; 810, 300 and 400 then share a fresh 1000.
        let plan = planner.plan(
            [padded(600.0), padded(810.0), padded(300.0), padded(400.0)],
            1000.0,
        );
        assert_eq!(ranges(&plan), vec![(0, 1), (1, 4)]);

        // The closing image still counts towards its row's height.
        let row = plan.rows()[1];
        assert!(row.fills_width);
        let aspects = (800.0 + 290.0 + 390.0) / 200.0;
        assert!((row.height - 970.0 / aspects).abs() < EPSILON);
    }

    #[test]
    fn image_wider_than_the_container_gets_its_own_row() {
        let planner = JustifiedRowPlanner::default();
        let plan = planner.plan([padded(3000.0), padded(3000.0)], 1000.0);
        assert_eq!(ranges(&plan), vec![(0, 1), (1, 2)]);
        for row in &plan {
            assert!(row.height < 200.0);
            assert!(row.fills_width);
        }
    }

    #[test]
    fn rows_cover_the_input_contiguously() {
        let planner = JustifiedRowPlanner::default();
        let sizes: Vec<Size> = (0..97)
            .map(|i| Size::new(300.0 + f64::from(i % 7) * 110.0, 200.0 + f64::from(i % 3) * 90.0))
            .collect();
        let plan = planner.plan(sizes.iter().copied(), 1280.0);

        assert_eq!(plan.image_count(), sizes.len());
        assert_eq!(plan.rows()[0].start, 0);
        for pair in plan.rows().windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(plan.rows().last().map(|row| row.end), Some(sizes.len()));
        assert!(plan.iter().all(|row| !row.is_empty()));
    }

    #[test]
    fn justified_rows_sum_to_the_container_width() {
        let planner = JustifiedRowPlanner::new(180.0, 8.0);
        let sizes: Vec<Size> = (0..60)
            .map(|i| Size::new(200.0 + f64::from(i % 5) * 170.0, 300.0 - f64::from(i % 4) * 40.0))
            .collect();
        let plan = planner.plan(sizes.iter().copied(), 1024.0);

        for row in plan.iter().filter(|row| row.fills_width) {
            let width: f64 = sizes[row.range()]
                .iter()
                .map(|size| planner.padded_width_at(*size, row.height))
                .sum();
            assert!((width - 1024.0).abs() < 1e-6, "row {row:?} spans {width}");
        }
    }

    #[test]
    fn overfull_last_row_shrinks() {
        let planner = JustifiedRowPlanner::default();
        let plan = planner.plan([padded(600.0), padded(500.0)], 1000.0);
        assert_eq!(plan.len(), 1);
        let row = plan.rows()[0];
        assert!(row.fills_width);
        // 2 * 10 padding; aspects 2.95 + 2.45 = 5.4.
        assert!((row.height - 980.0 / 5.4).abs() < EPSILON);
    }

    #[test]
    fn degenerate_sizes_use_the_fallback() {
        let planner = JustifiedRowPlanner::default();
        let degenerate = [
            Size::ZERO,
            Size::new(f64::NAN, 100.0),
            Size::new(100.0, -3.0),
            Size::new(f64::INFINITY, 100.0),
        ];
        let plan = planner.plan(degenerate, 4000.0);
        let expected = planner.plan([FALLBACK_SIZE; 4], 4000.0);
        assert_eq!(plan, expected);
        assert_eq!(planner.padded_width(Size::ZERO), 1200.0 / 900.0 * 200.0 + 10.0);
    }

    #[test]
    fn planning_is_deterministic() {
        let planner = JustifiedRowPlanner::default();
        let sizes = [padded(410.0), padded(220.0), padded(800.0), padded(330.0)];
        assert_eq!(planner.plan(sizes, 900.0), planner.plan(sizes, 900.0));
    }

    #[test]
    fn rows_per_page_covers_the_viewport_plus_one() {
        let planner = JustifiedRowPlanner::default();
        assert_eq!(planner.rows_per_page(500.0), 4);
        assert_eq!(planner.rows_per_page(400.0), 3);
        assert_eq!(planner.rows_per_page(0.0), 1);
        assert_eq!(planner.rows_per_page(-20.0), 1);
    }

    #[test]
    fn row_of_image_finds_the_containing_row() {
        let planner = JustifiedRowPlanner::default();
        let plan = planner.plan(
            [padded(600.0), padded(500.0), padded(700.0), padded(900.0)],
            1000.0,
        );
        assert_eq!(ranges(&plan), vec![(0, 2), (2, 4)]);
        assert_eq!(plan.row_of_image(0), Some(0));
        assert_eq!(plan.row_of_image(1), Some(0));
        assert_eq!(plan.row_of_image(2), Some(1));
        assert_eq!(plan.row_of_image(3), Some(1));
        assert_eq!(plan.row_of_image(4), None);
    }

    #[test]
    fn invalid_parameters_are_sanitized() {
        let planner = JustifiedRowPlanner::default().with_fallback_size(Size::ZERO);
        assert_eq!(planner.fallback_size(), FALLBACK_SIZE);
        let mut planner = planner;
        planner.set_padding(-4.0);
        assert_eq!(planner.padding(), 0.0);
    }
}
