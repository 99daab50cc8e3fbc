// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contiguous run of materialized items.

use alloc::collections::VecDeque;
use core::ops::Range;

/// Materialized item handles for a contiguous index range, in index order.
///
/// The window covers `start..end`. In the boundary vocabulary used by the
/// scroller, [`first_index`](Self::first_index) is the slot just *before* the
/// first item and [`last_index`](Self::last_index) the slot just *after* the
/// last one, so `len() == last_index - first_index - 1` always holds.
#[derive(Clone, Debug)]
pub struct Window<T> {
    start: usize,
    items: VecDeque<T>,
}

impl<T> Default for Window<T> {
    fn default() -> Self {
        Self::centered(0)
    }
}

impl<T> Window<T> {
    /// An empty window positioned so that `index` is the next item appended.
    #[must_use]
    pub fn centered(index: usize) -> Self {
        Self {
            start: index,
            items: VecDeque::new(),
        }
    }

    /// Number of materialized items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The materialized indices.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Index of the slot just before the first item, or `None` when the
    /// window starts at index 0.
    #[must_use]
    pub fn first_index(&self) -> Option<usize> {
        self.start.checked_sub(1)
    }

    /// Index of the slot just after the last item.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.end()
    }

    fn end(&self) -> usize {
        self.start + self.items.len()
    }

    /// Returns `true` if `index` is materialized.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// The handle materialized for `index`, if it is inside the window.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        index
            .checked_sub(self.start)
            .and_then(|offset| self.items.get(offset))
    }

    /// The handle at the leading edge.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// The handle at the trailing edge.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterates `(index, handle)` pairs in increasing index order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(offset, item)| (self.start + offset, item))
    }

    /// Adds the item for [`first_index`](Self::first_index) at the front.
    pub(crate) fn push_front(&mut self, item: T) {
        debug_assert!(self.start > 0, "cannot grow the window before index 0");
        self.start -= 1;
        self.items.push_front(item);
    }

    /// Adds the item for [`last_index`](Self::last_index) at the back.
    pub(crate) fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }
}
