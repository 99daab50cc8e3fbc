// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A vertical photo flow driven by a windowed scroller.

use alloc::vec::Vec;

use kurbo::Size;
use tracing::debug;
use understory_infinite_scroll::{
    Axis, Growth, ScrollDirection, ScrollError, ScrollHost, ScrollerState, Sentinel,
    WindowedScroller,
};
use understory_justified_rows::JustifiedRowPlanner;

use crate::{FlowRow, FlowRowSource, Photo};

/// A vertically scrolling flow of justified photo rows around a focused photo.
///
/// The view owns a [`WindowedScroller`] whose items are [`FlowRow`]s and
/// applies the flow policy on top of it:
///
/// - [`show`](Self::show) swaps in a new dataset and rebuilds around the row
///   of the focused photo.
/// - [`focus`](Self::focus) moves the focus; a row already in the window is
///   scrolled into view, any other row is rebuilt around.
/// - [`resized`](Self::resized) re-plans for the new container and rebuilds
///   around the focused row when the width changed.
pub struct FlowView<H, P>
where
    H: ScrollHost<Item = FlowRow>,
    P: Photo,
{
    scroller: WindowedScroller<H, FlowRowSource<P>>,
    focus: Option<usize>,
}

impl<H, P> core::fmt::Debug for FlowView<H, P>
where
    H: ScrollHost<Item = FlowRow>,
    P: Photo,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlowView")
            .field("scroller", &self.scroller)
            .field("focus", &self.focus)
            .finish()
    }
}

impl<H, P> FlowView<H, P>
where
    H: ScrollHost<Item = FlowRow>,
    P: Photo,
{
    /// Creates an empty flow over `host`, laid out by `planner` for the
    /// host's current viewport.
    #[must_use]
    pub fn new(host: H, planner: JustifiedRowPlanner) -> Self {
        let source = FlowRowSource::new(planner, host.viewport().size());
        Self {
            scroller: WindowedScroller::new(host, source, Axis::Vertical),
            focus: None,
        }
    }

    /// The underlying scroller.
    #[must_use]
    pub fn scroller(&self) -> &WindowedScroller<H, FlowRowSource<P>> {
        &self.scroller
    }

    /// Mutable access to the underlying scroller, for host-side scrolling.
    pub fn scroller_mut(&mut self) -> &mut WindowedScroller<H, FlowRowSource<P>> {
        &mut self.scroller
    }

    /// The row source: photos, planner and current plan.
    #[must_use]
    pub fn source(&self) -> &FlowRowSource<P> {
        self.scroller.source()
    }

    /// The focused photo, if any.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    /// The row of the focused photo, if any.
    #[must_use]
    pub fn focused_row(&self) -> Option<usize> {
        self.focus
            .and_then(|photo| self.scroller.source().row_of_photo(photo))
    }

    /// Shows `photos`, focused on photo `focus`.
    ///
    /// This starts a new epoch and revives a destroyed view. A focus past the
    /// end of the data is clamped to the last photo; an empty dataset leaves
    /// the view built but empty.
    pub fn show(&mut self, photos: Vec<P>, focus: usize) {
        let len = photos.len();
        self.scroller.source_mut().set_photos(photos);
        self.focus = len.checked_sub(1).map(|last| focus.min(last));
        let row = self.focused_row().unwrap_or(0);
        debug!(photos = len, focus = ?self.focus, row, "showing photo flow");
        self.scroller.rebuild_around(row);
    }

    /// Moves the focus to photo `photo` and brings its row into view.
    ///
    /// Returns whether anything moved. Photos outside the dataset are ignored.
    pub fn focus(&mut self, photo: usize) -> Result<bool, ScrollError> {
        if self.scroller.state() == ScrollerState::Destroyed {
            return Err(ScrollError::Destroyed);
        }
        let Some(row) = self.scroller.source().row_of_photo(photo) else {
            return Ok(false);
        };
        self.focus = Some(photo);
        if self.scroller.window().contains(row) {
            self.scroller.ensure_visible(row)
        } else {
            self.scroller.rebuild_around(row);
            Ok(true)
        }
    }

    /// Records a new container size.
    ///
    /// Row layout depends only on the width: a width change re-plans and
    /// rebuilds around the focused row, returning `true`; a height change
    /// only affects the size of later pages.
    pub fn resized(&mut self, viewport: Size) -> Result<bool, ScrollError> {
        if self.scroller.state() == ScrollerState::Destroyed {
            return Err(ScrollError::Destroyed);
        }
        if !self.scroller.source_mut().set_viewport(viewport) {
            return Ok(false);
        }
        if self.scroller.state() == ScrollerState::Empty {
            return Ok(false);
        }
        let row = self.focused_row().unwrap_or(0);
        debug!(width = viewport.width, row, "container width changed, rebuilding");
        self.scroller.rebuild_around(row);
        Ok(true)
    }

    /// Forwards a sentinel crossing reported by the host.
    pub fn sentinel_crossed(
        &mut self,
        sentinel: Sentinel,
        direction: ScrollDirection,
    ) -> Result<Option<Growth>, ScrollError> {
        self.scroller.sentinel_crossed(sentinel, direction)
    }

    /// Tears the view down; see [`WindowedScroller::destroy`].
    pub fn destroy(&mut self) {
        self.scroller.destroy();
    }
}
