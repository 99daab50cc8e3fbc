// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless [`ScrollHost`] for tests, benches and demos.
//!
//! [`SimulatedHost`] lays attached items end to end along its axis, starting at
//! content offset zero, with each item's length given by a caller-supplied
//! function. The viewport sits at the origin; item rectangles are reported in
//! viewport coordinates, so an item at content offset `o` appears at `o - s`
//! for scroll offset `s`. Scrolling is clamped to the content like a browser
//! container.
//!
//! User scrolling goes through [`SimulatedHost::scroll_by`], which returns the
//! sentinel [`Crossing`]s a real host would report:
//!
//! - a trailing sentinel fires once its item is fully revealed at the trailing
//!   edge while scrolling toward it,
//! - a leading sentinel fires once its item is fully revealed at the leading
//!   edge while scrolling toward it.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

use crate::{Axis, Crossing, Edge, ScrollDirection, ScrollHost, Sentinel};

/// Sub-pixel slack for reveal checks.
const REVEAL_TOLERANCE: f64 = 1e-6;

/// In-memory scroll container. See the [module docs](self).
#[derive(Clone, Debug)]
pub struct SimulatedHost<T> {
    axis: Axis,
    viewport: Size,
    extent_of: fn(&T) -> f64,
    items: VecDeque<T>,
    scroll: Vec2,
    armed: Vec<(Sentinel, T)>,
    scroll_writes: usize,
}

impl<T: Clone + PartialEq> SimulatedHost<T> {
    /// Creates an empty container of size `viewport` scrolling along `axis`.
    #[must_use]
    pub fn new(axis: Axis, viewport: Size, extent_of: fn(&T) -> f64) -> Self {
        Self {
            axis,
            viewport,
            extent_of,
            items: VecDeque::new(),
            scroll: Vec2::ZERO,
            armed: Vec::new(),
            scroll_writes: 0,
        }
    }

    /// The scroll axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The container size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Resizes the container, re-clamping the scroll offset.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.clamp_scroll();
    }

    /// Attached items, leading to trailing.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Total length of the attached items along the axis.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.items.iter().map(self.extent_of).sum()
    }

    /// Largest reachable scroll offset along the axis.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.content_extent() - self.axis.extent(self.viewport)).max(0.0)
    }

    /// Current scroll offset along the axis.
    #[must_use]
    pub fn scroll_position(&self) -> f64 {
        self.axis.component(self.scroll)
    }

    /// How many times [`ScrollHost::set_scroll_offset`] has been called.
    #[must_use]
    pub fn scroll_writes(&self) -> usize {
        self.scroll_writes
    }

    /// Number of armed sentinels.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// The item observed by the sentinel armed at `edge`.
    #[must_use]
    pub fn sentinel_item(&self, edge: Edge) -> Option<&T> {
        self.armed
            .iter()
            .find(|(sentinel, _)| sentinel.edge() == edge)
            .map(|(_, item)| item)
    }

    /// Offset of `item` from the start of the content.
    #[must_use]
    pub fn content_offset(&self, item: &T) -> Option<f64> {
        let mut offset = 0.0;
        for attached in &self.items {
            if attached == item {
                return Some(offset);
            }
            offset += (self.extent_of)(attached);
        }
        None
    }

    /// Position of `item`'s leading edge relative to the viewport's leading edge.
    #[must_use]
    pub fn view_position(&self, item: &T) -> Option<f64> {
        self.content_offset(item)
            .map(|offset| offset - self.scroll_position())
    }

    /// Scrolls like a user would and reports the sentinel crossings it caused.
    pub fn scroll_by(&mut self, delta: f64) -> Vec<Crossing> {
        let before = self.scroll_position();
        self.scroll = self.axis.with_component(self.scroll, before + delta);
        self.clamp_scroll();
        let Some(direction) = ScrollDirection::from_delta(self.scroll_position() - before) else {
            return Vec::new();
        };
        let viewport_extent = self.axis.extent(self.viewport);
        self.armed
            .iter()
            .filter(|(sentinel, _)| sentinel.fires_for(direction))
            .filter(|(sentinel, item)| {
                let Some(start) = self.view_position(item) else {
                    return false;
                };
                match sentinel.edge() {
                    Edge::Leading => start >= -REVEAL_TOLERANCE,
                    Edge::Trailing => {
                        start + (self.extent_of)(item) <= viewport_extent + REVEAL_TOLERANCE
                    }
                }
            })
            .map(|(sentinel, _)| Crossing {
                sentinel: *sentinel,
                direction,
            })
            .collect()
    }

    fn clamp_scroll(&mut self) {
        let clamped = self.scroll_position().clamp(0.0, self.max_scroll());
        self.scroll = self.axis.with_component(self.scroll, clamped);
    }
}

impl<T: Clone + PartialEq> ScrollHost for SimulatedHost<T> {
    type Item = T;

    fn viewport(&self) -> Rect {
        self.axis.rect(
            0.0..self.axis.extent(self.viewport),
            0.0..self.axis.cross_extent(self.viewport),
        )
    }

    fn item_rect(&self, item: &T) -> Rect {
        let Some(start) = self.view_position(item) else {
            return Rect::ZERO;
        };
        self.axis.rect(
            start..start + (self.extent_of)(item),
            0.0..self.axis.cross_extent(self.viewport),
        )
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.scroll_writes += 1;
        self.scroll = offset;
        self.clamp_scroll();
    }

    fn attach(&mut self, item: &T, edge: Edge) {
        match edge {
            Edge::Leading => self.items.push_front(item.clone()),
            Edge::Trailing => self.items.push_back(item.clone()),
        }
    }

    fn detach_all(&mut self) {
        self.items.clear();
        self.clamp_scroll();
    }

    fn arm_sentinel(&mut self, item: &T, sentinel: Sentinel) {
        self.armed.push((sentinel, item.clone()));
    }

    fn disarm_sentinel(&mut self, sentinel: Sentinel) {
        self.armed.retain(|(armed, _)| *armed != sentinel);
    }
}
