// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities a host environment lends to the scroller.

use kurbo::{Rect, Vec2};

use crate::{Edge, Sentinel};

/// A scrollable container plus the contents region inside it.
///
/// The scroller never renders anything itself. It asks the host to attach and
/// detach the items it materializes, to measure them, to move the scroll
/// offset, and to watch edge items for visibility changes.
///
/// Geometry is reported in one coordinate space of the host's choosing (for
/// example page coordinates): [`viewport`](Self::viewport) and
/// [`item_rect`](Self::item_rect) must agree, and scrolling by `d` along the
/// axis must move every attached item by `-d` in that space.
pub trait ScrollHost {
    /// Handle for one attached item.
    type Item;

    /// The visible rectangle of the scrolling container.
    fn viewport(&self) -> Rect;

    /// The current rectangle of an attached item.
    ///
    /// The scroller only asks about items it attached and has not detached.
    fn item_rect(&self, item: &Self::Item) -> Rect;

    /// The container's current scroll offset.
    fn scroll_offset(&self) -> Vec2;

    /// Moves the container's scroll offset.
    ///
    /// Hosts may clamp the offset to their scrollable range.
    fn set_scroll_offset(&mut self, offset: Vec2);

    /// Inserts `item` at the given end of the contents region.
    ///
    /// [`Edge::Leading`] prepends, [`Edge::Trailing`] appends.
    fn attach(&mut self, item: &Self::Item, edge: Edge);

    /// Removes every attached item.
    fn detach_all(&mut self);

    /// Starts watching `item` on behalf of `sentinel`.
    ///
    /// When `item` crosses into the visible region the host reports
    /// `sentinel` back through
    /// [`WindowedScroller::sentinel_crossed`](crate::WindowedScroller::sentinel_crossed).
    fn arm_sentinel(&mut self, item: &Self::Item, sentinel: Sentinel);

    /// Stops watching for `sentinel`.
    fn disarm_sentinel(&mut self, sentinel: Sentinel);
}
