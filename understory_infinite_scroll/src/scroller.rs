// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The windowed scroller: owns the window, the sentinels and the growth policy.

use core::fmt;

use tracing::{debug, trace};

use crate::sentinel::SentinelPair;
use crate::{Axis, Edge, ItemSource, ScrollDirection, ScrollError, ScrollHost, Sentinel, Window};

/// Observable lifecycle state of a [`WindowedScroller`].
///
/// Growth runs to completion inside a single `&mut` call, so the transient
/// "growing" states are never observable and are not listed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollerState {
    /// Never built; no window and no sentinels.
    Empty,
    /// Built, with a sentinel armed at each edge.
    Centered,
    /// The leading edge ran out of data; only the trailing sentinel is armed.
    ExhaustedBackward,
    /// The trailing edge ran out of data; only the leading sentinel is armed.
    ExhaustedForward,
    /// Both edges ran out of data; the whole dataset is materialized.
    Exhausted,
    /// Torn down by [`WindowedScroller::destroy`].
    Destroyed,
}

/// Outcome of one page of growth at an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Growth {
    /// Number of items attached by this page.
    pub added: usize,
    /// Whether the edge is (now) exhausted.
    pub exhausted: bool,
}

/// Slack allowed when comparing item and viewport edges, absorbing the
/// rounding left by summing measured extents.
const EDGE_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeState {
    Open,
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Empty,
    Live,
    Destroyed,
}

/// Keeps a bounded, lazily growing window of materialized items in a
/// scrolling container.
///
/// The scroller owns its host and source, the window of materialized handles,
/// and the sentinel pair. One instance serves exactly one view; hosts showing
/// several views create several scrollers.
///
/// Typical use:
///
/// 1. [`rebuild_around`](Self::rebuild_around) whenever the dataset or the
///    container width changes.
/// 2. Forward every crossing the host observes to
///    [`sentinel_crossed`](Self::sentinel_crossed); the window grows a page at
///    a time at that edge.
/// 3. [`ensure_visible`](Self::ensure_visible) to follow a focus index that is
///    already materialized.
/// 4. [`destroy`](Self::destroy) when the view goes away.
pub struct WindowedScroller<H, S>
where
    H: ScrollHost,
    S: ItemSource<Item = H::Item>,
{
    host: H,
    source: S,
    axis: Axis,
    window: Window<H::Item>,
    sentinels: SentinelPair,
    backward: EdgeState,
    forward: EdgeState,
    phase: Phase,
}

impl<H, S> fmt::Debug for WindowedScroller<H, S>
where
    H: ScrollHost,
    S: ItemSource<Item = H::Item>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedScroller")
            .field("axis", &self.axis)
            .field("state", &self.state())
            .field("range", &self.window.range())
            .field("leading", &self.sentinels.get(Edge::Leading))
            .field("trailing", &self.sentinels.get(Edge::Trailing))
            .finish_non_exhaustive()
    }
}

impl<H, S> WindowedScroller<H, S>
where
    H: ScrollHost,
    S: ItemSource<Item = H::Item>,
{
    /// Creates an empty scroller over `host`, fed by `source`, scrolling along `axis`.
    ///
    /// Nothing is attached until [`rebuild_around`](Self::rebuild_around).
    #[must_use]
    pub fn new(host: H, source: S, axis: Axis) -> Self {
        Self {
            host,
            source,
            axis,
            window: Window::default(),
            sentinels: SentinelPair::default(),
            backward: EdgeState::Open,
            forward: EdgeState::Open,
            phase: Phase::Empty,
        }
    }

    /// The scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns `true` if the container scrolls horizontally.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.axis.is_horizontal()
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ScrollerState {
        match self.phase {
            Phase::Empty => ScrollerState::Empty,
            Phase::Destroyed => ScrollerState::Destroyed,
            Phase::Live => match (self.backward, self.forward) {
                (EdgeState::Open, EdgeState::Open) => ScrollerState::Centered,
                (EdgeState::Exhausted, EdgeState::Open) => ScrollerState::ExhaustedBackward,
                (EdgeState::Open, EdgeState::Exhausted) => ScrollerState::ExhaustedForward,
                (EdgeState::Exhausted, EdgeState::Exhausted) => ScrollerState::Exhausted,
            },
        }
    }

    /// The materialized window.
    #[must_use]
    pub fn window(&self) -> &Window<H::Item> {
        &self.window
    }

    /// The sentinel currently armed at `edge`, if any.
    #[must_use]
    pub fn sentinel(&self, edge: Edge) -> Option<Sentinel> {
        self.sentinels.get(edge)
    }

    /// Returns a shared reference to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns a mutable reference to the host.
    ///
    /// Hosts use this to scroll, resize, or collect crossings. Detaching items
    /// behind the scroller's back breaks the window invariants.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns a shared reference to the item source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the item source.
    ///
    /// Replacing the dataset ends the epoch: call
    /// [`rebuild_around`](Self::rebuild_around) afterwards.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the scroller, returning its host and source.
    ///
    /// Attached items and armed sentinels are left as they are; call
    /// [`destroy`](Self::destroy) first to release them.
    pub fn into_parts(self) -> (H, S) {
        (self.host, self.source)
    }

    /// Tears down the window and rebuilds it from scratch around `index`.
    ///
    /// Up to one page of items is materialized before `index` (walking
    /// backward) and one page from `index` on (walking forward). Each edge
    /// that did not run out of data gets a sentinel, then `index` is scrolled
    /// into view. This starts a new epoch and is valid in every state,
    /// including after [`destroy`](Self::destroy).
    pub fn rebuild_around(&mut self, index: usize) {
        self.teardown();
        self.window = Window::centered(index);
        self.backward = EdgeState::Open;
        self.forward = EdgeState::Open;
        self.phase = Phase::Live;

        let before = self.fill_backward();
        let after = self.fill_forward();
        if !before.exhausted {
            self.arm(Edge::Leading);
        }
        if !after.exhausted {
            self.arm(Edge::Trailing);
        }
        debug!(
            index,
            range = ?self.window.range(),
            backward_exhausted = before.exhausted,
            forward_exhausted = after.exhausted,
            "rebuilt window"
        );
        self.scroll_into_view(index);
    }

    /// Appends one page of items at the trailing edge.
    ///
    /// The trailing sentinel is disarmed first and re-armed on the new last
    /// item unless the data ran out. Growing an exhausted edge does nothing.
    /// The scroll offset is left untouched.
    pub fn grow_forward(&mut self) -> Result<Growth, ScrollError> {
        if !self.check_live()? {
            return Ok(Growth::default());
        }
        self.disarm(Edge::Trailing);
        if self.forward == EdgeState::Exhausted {
            return Ok(Growth {
                added: 0,
                exhausted: true,
            });
        }
        let growth = self.fill_forward();
        if !growth.exhausted {
            self.arm(Edge::Trailing);
        }
        trace!(added = growth.added, range = ?self.window.range(), "grew forward");
        Ok(growth)
    }

    /// Prepends one page of items at the leading edge without moving the content.
    ///
    /// Prepending pushes every attached item further along the axis. The
    /// position of the previously first item is measured before and after the
    /// insertion, and the scroll offset is shifted by the difference, so what
    /// the user sees does not move.
    pub fn grow_backward(&mut self) -> Result<Growth, ScrollError> {
        if !self.check_live()? {
            return Ok(Growth::default());
        }
        self.disarm(Edge::Leading);
        if self.backward == EdgeState::Exhausted {
            return Ok(Growth {
                added: 0,
                exhausted: true,
            });
        }

        let anchor_index = self.window.range().start;
        let anchor_before = self
            .window
            .front()
            .map(|item| self.axis.start(self.host.item_rect(item)));

        let growth = self.fill_backward();

        let anchor_after = self
            .window
            .get(anchor_index)
            .map(|item| self.axis.start(self.host.item_rect(item)));
        if let (Some(before), Some(after)) = (anchor_before, anchor_after) {
            let delta = after - before;
            if delta != 0.0 {
                self.scroll_by(delta);
            }
        }
        if !growth.exhausted {
            self.arm(Edge::Leading);
        }
        trace!(added = growth.added, range = ?self.window.range(), "grew backward");
        Ok(growth)
    }

    /// Handles a crossing reported by the host for `sentinel`.
    ///
    /// Grows the sentinel's edge when the sentinel is still armed and the
    /// crossing happened while scrolling toward that edge. Returns `Ok(None)`
    /// for stale tokens and crossings in the other direction.
    pub fn sentinel_crossed(
        &mut self,
        sentinel: Sentinel,
        direction: ScrollDirection,
    ) -> Result<Option<Growth>, ScrollError> {
        if !self.check_live()? {
            return Ok(None);
        }
        if !self.sentinels.is_armed(sentinel) {
            trace!(?sentinel, "ignoring stale sentinel");
            return Ok(None);
        }
        if !sentinel.fires_for(direction) {
            trace!(?sentinel, ?direction, "ignoring crossing away from edge");
            return Ok(None);
        }
        let growth = match sentinel.edge() {
            Edge::Leading => self.grow_backward()?,
            Edge::Trailing => self.grow_forward()?,
        };
        Ok(Some(growth))
    }

    /// Scrolls the minimum amount needed to show the item at `index` in full.
    ///
    /// Returns whether the scroll offset was changed. Indices outside the
    /// window are ignored; rebuild around them first.
    pub fn ensure_visible(&mut self, index: usize) -> Result<bool, ScrollError> {
        if !self.check_live()? {
            return Ok(false);
        }
        Ok(self.scroll_into_view(index))
    }

    /// Returns `true` if the item at `index` is materialized and lies fully
    /// inside the visible region along the scroll axis.
    #[must_use]
    pub fn is_fully_visible(&self, index: usize) -> bool {
        let Some(item) = self.window.get(index) else {
            return false;
        };
        let item = self.axis.span(self.host.item_rect(item));
        let view = self.axis.span(self.host.viewport());
        item.start >= view.start - EDGE_TOLERANCE && item.end <= view.end + EDGE_TOLERANCE
    }

    /// Detaches every item, disarms both sentinels and marks the scroller destroyed.
    ///
    /// Further calls other than [`rebuild_around`](Self::rebuild_around)
    /// return [`ScrollError::Destroyed`]; destroying twice is a no-op.
    pub fn destroy(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.teardown();
        self.window = Window::default();
        self.phase = Phase::Destroyed;
        debug!("destroyed scroller");
    }

    /// `Err` once destroyed, `Ok(false)` before the first build.
    fn check_live(&self) -> Result<bool, ScrollError> {
        match self.phase {
            Phase::Live => Ok(true),
            Phase::Empty => Ok(false),
            Phase::Destroyed => Err(ScrollError::Destroyed),
        }
    }

    fn teardown(&mut self) {
        self.disarm(Edge::Leading);
        self.disarm(Edge::Trailing);
        if self.phase == Phase::Live {
            self.host.detach_all();
        }
    }

    /// Page size for the next growth step; never zero.
    fn page_size(&self) -> usize {
        self.source.items_per_page().max(1)
    }

    fn fill_forward(&mut self) -> Growth {
        let page = self.page_size();
        let mut added = 0;
        while added < page {
            let index = self.window.last_index();
            let Some(item) = self.source.materialize(index) else {
                self.forward = EdgeState::Exhausted;
                debug!(index, "forward edge exhausted");
                return Growth {
                    added,
                    exhausted: true,
                };
            };
            self.host.attach(&item, Edge::Trailing);
            self.window.push_back(item);
            added += 1;
        }
        Growth {
            added,
            exhausted: false,
        }
    }

    fn fill_backward(&mut self) -> Growth {
        let page = self.page_size();
        let mut added = 0;
        while added < page {
            let item = self
                .window
                .first_index()
                .and_then(|index| self.source.materialize(index));
            let Some(item) = item else {
                self.backward = EdgeState::Exhausted;
                debug!(index = ?self.window.first_index(), "backward edge exhausted");
                return Growth {
                    added,
                    exhausted: true,
                };
            };
            self.host.attach(&item, Edge::Leading);
            self.window.push_front(item);
            added += 1;
        }
        Growth {
            added,
            exhausted: false,
        }
    }

    fn arm(&mut self, edge: Edge) {
        let item = match edge {
            Edge::Leading => self.window.front(),
            Edge::Trailing => self.window.back(),
        };
        if let Some(item) = item {
            let sentinel = self.sentinels.arm(edge);
            self.host.arm_sentinel(item, sentinel);
        }
    }

    fn disarm(&mut self, edge: Edge) {
        if let Some(sentinel) = self.sentinels.take(edge) {
            self.host.disarm_sentinel(sentinel);
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        let offset = self.host.scroll_offset();
        self.host.set_scroll_offset(offset + self.axis.vec(delta));
    }

    fn scroll_into_view(&mut self, index: usize) -> bool {
        let Some(item) = self.window.get(index) else {
            return false;
        };
        let item = self.axis.span(self.host.item_rect(item));
        let view = self.axis.span(self.host.viewport());
        let delta = if item.start < view.start - EDGE_TOLERANCE {
            item.start - view.start
        } else if item.end > view.end + EDGE_TOLERANCE {
            item.end - view.end
        } else {
            return false;
        };
        self.scroll_by(delta);
        true
    }
}
