// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item source contract implemented by each view.

use core::fmt;

/// Supplies renderable item descriptors to a [`WindowedScroller`](crate::WindowedScroller).
///
/// A source is a pure view of the current dataset: it holds no virtualization
/// state, and materializing the same index twice within one dataset epoch must
/// yield equivalent descriptors. Returning `None` signals the end of the data
/// in the direction the scroller was walking.
pub trait ItemSource {
    /// The descriptor (or handle) attached to the host for one index.
    type Item;

    /// How many items make up one page of growth.
    ///
    /// This is re-queried before every page, so it may track the current
    /// container size. Zero is treated as one.
    fn items_per_page(&self) -> usize;

    /// Builds the descriptor for `index`, or `None` if `index` is past the end
    /// of the dataset.
    fn materialize(&self, index: usize) -> Option<Self::Item>;
}

impl<S: ItemSource + ?Sized> ItemSource for &S {
    type Item = S::Item;

    fn items_per_page(&self) -> usize {
        (**self).items_per_page()
    }

    fn materialize(&self, index: usize) -> Option<Self::Item> {
        (**self).materialize(index)
    }
}

/// An [`ItemSource`] backed by a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    items_per_page: usize,
    materialize: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("items_per_page", &self.items_per_page)
            .finish_non_exhaustive()
    }
}

impl<F> FromFn<F> {
    /// Changes the page size reported by this source.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page;
    }
}

impl<T, F> ItemSource for FromFn<F>
where
    F: Fn(usize) -> Option<T>,
{
    type Item = T;

    fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    fn materialize(&self, index: usize) -> Option<T> {
        (self.materialize)(index)
    }
}

/// Creates an [`ItemSource`] with a fixed page size from a closure.
///
/// ```rust
/// use understory_infinite_scroll::{ItemSource, source};
///
/// let squares = source::from_fn(4, |i| (i < 10).then_some(i * i));
/// assert_eq!(squares.items_per_page(), 4);
/// assert_eq!(squares.materialize(3), Some(9));
/// assert_eq!(squares.materialize(10), None);
/// ```
pub fn from_fn<T, F>(items_per_page: usize, materialize: F) -> FromFn<F>
where
    F: Fn(usize) -> Option<T>,
{
    FromFn {
        items_per_page,
        materialize,
    }
}
