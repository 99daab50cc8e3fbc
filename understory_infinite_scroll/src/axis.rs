// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll axis.
//!
//! All index and sentinel logic in this crate is orientation-agnostic. The
//! only place orientation matters is when reading or writing geometry, and
//! [`Axis`] is the single switch for that: it selects which coordinate of a
//! [`Rect`], [`Size`] or [`Vec2`] is the scroll (main) axis and which is the
//! cross axis.

use core::ops::Range;

use kurbo::{Rect, Size, Vec2};

/// Orientation of a scrolling container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items are laid out left to right and the container scrolls along x.
    Horizontal,
    /// Items are laid out top to bottom and the container scrolls along y.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns `true` for [`Axis::Horizontal`].
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Returns the other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Leading coordinate of `rect` along this axis.
    #[must_use]
    pub fn start(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x0,
            Self::Vertical => rect.y0,
        }
    }

    /// Trailing coordinate of `rect` along this axis.
    #[must_use]
    pub fn end(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x1,
            Self::Vertical => rect.y1,
        }
    }

    /// The `start..end` span of `rect` along this axis.
    #[must_use]
    pub fn span(self, rect: Rect) -> Range<f64> {
        self.start(rect)..self.end(rect)
    }

    /// Extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[must_use]
    pub fn cross_extent(self, size: Size) -> f64 {
        self.cross().extent(size)
    }

    /// The component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// A vector of length `amount` pointing along this axis.
    #[must_use]
    pub fn vec(self, amount: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(amount, 0.0),
            Self::Vertical => Vec2::new(0.0, amount),
        }
    }

    /// Replaces the component of `v` along this axis, keeping the cross component.
    #[must_use]
    pub fn with_component(self, v: Vec2, amount: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(amount, v.y),
            Self::Vertical => Vec2::new(v.x, amount),
        }
    }

    /// Builds a rectangle from a span along this axis and a span across it.
    #[must_use]
    pub fn rect(self, main: Range<f64>, cross: Range<f64>) -> Rect {
        match self {
            Self::Horizontal => Rect::new(main.start, cross.start, main.end, cross.end),
            Self::Vertical => Rect::new(cross.start, main.start, cross.end, main.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::Axis;

    #[test]
    fn accessors_follow_orientation() {
        let rect = Rect::new(1.0, 2.0, 11.0, 32.0);
        assert_eq!(Axis::Horizontal.span(rect), 1.0..11.0);
        assert_eq!(Axis::Vertical.span(rect), 2.0..32.0);

        let size = Size::new(640.0, 480.0);
        assert_eq!(Axis::Horizontal.extent(size), 640.0);
        assert_eq!(Axis::Horizontal.cross_extent(size), 480.0);
        assert_eq!(Axis::Vertical.extent(size), 480.0);
    }

    #[test]
    fn rect_round_trips_through_spans() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let rect = axis.rect(10.0..20.0, 0.0..5.0);
            assert_eq!(axis.span(rect), 10.0..20.0);
            assert_eq!(axis.cross().span(rect), 0.0..5.0);
        }
    }

    #[test]
    fn vectors_touch_only_the_main_component() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(Axis::Vertical.with_component(v, 9.0), Vec2::new(3.0, 9.0));
        assert_eq!(Axis::Horizontal.with_component(v, 9.0), Vec2::new(9.0, 4.0));
        assert_eq!(Axis::Horizontal.component(v + Axis::Horizontal.vec(2.0)), 5.0);
        assert_eq!(Axis::Vertical.component(v + Axis::Horizontal.vec(2.0)), 4.0);
    }
}
