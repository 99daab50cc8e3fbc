// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary sentinels: tokens for "this edge item crossed into view".
//!
//! The scroller arms at most one sentinel per window edge. Arming hands the
//! host a [`Sentinel`] token together with the item it should observe; when
//! the host notices that item crossing the visible region it reports the
//! token back through
//! [`WindowedScroller::sentinel_crossed`](crate::WindowedScroller::sentinel_crossed).
//!
//! Tokens are generation-stamped. A token that is no longer the armed one for
//! its edge (because growth re-armed the edge, or a rebuild tore everything
//! down) is stale, and crossings reported for it are ignored. This lets a host
//! deliver notifications lazily without ever racing a rebuild.

/// One end of the window (and of the contents region).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The end holding the lowest index; the top or left of the container.
    Leading,
    /// The end holding the highest index; the bottom or right of the container.
    Trailing,
}

/// Direction of a scroll movement along the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Scrolling up or left: lower indices move into view.
    TowardLeading,
    /// Scrolling down or right: higher indices move into view.
    TowardTrailing,
}

impl ScrollDirection {
    /// Classifies a scroll delta. Returns `None` for zero (or NaN) deltas.
    #[must_use]
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::TowardTrailing)
        } else if delta < 0.0 {
            Some(Self::TowardLeading)
        } else {
            None
        }
    }

    /// The edge this direction scrolls toward.
    #[must_use]
    pub const fn edge(self) -> Edge {
        match self {
            Self::TowardLeading => Edge::Leading,
            Self::TowardTrailing => Edge::Trailing,
        }
    }
}

/// Token identifying one armed sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sentinel {
    edge: Edge,
    generation: u64,
}

impl Sentinel {
    /// The window edge this sentinel guards.
    #[must_use]
    pub const fn edge(self) -> Edge {
        self.edge
    }

    /// Arming sequence number, unique per scroller.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    /// Returns `true` if a crossing in `direction` should trigger growth.
    ///
    /// A leading sentinel only fires while scrolling toward the leading edge,
    /// a trailing one only while scrolling toward the trailing edge.
    #[must_use]
    pub fn fires_for(self, direction: ScrollDirection) -> bool {
        direction.edge() == self.edge
    }
}

/// A host-reported crossing, ready to be fed to the scroller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    /// The sentinel whose item crossed the edge of the visible region.
    pub sentinel: Sentinel,
    /// The scroll direction at the time of the crossing.
    pub direction: ScrollDirection,
}

/// The (at most) two armed sentinels of one scroller.
#[derive(Clone, Debug, Default)]
pub(crate) struct SentinelPair {
    leading: Option<Sentinel>,
    trailing: Option<Sentinel>,
    next_generation: u64,
}

impl SentinelPair {
    fn slot(&mut self, edge: Edge) -> &mut Option<Sentinel> {
        match edge {
            Edge::Leading => &mut self.leading,
            Edge::Trailing => &mut self.trailing,
        }
    }

    /// Issues a fresh token for `edge`.
    ///
    /// The edge must have been disarmed first.
    pub(crate) fn arm(&mut self, edge: Edge) -> Sentinel {
        let sentinel = Sentinel {
            edge,
            generation: self.next_generation,
        };
        self.next_generation += 1;
        let slot = self.slot(edge);
        debug_assert!(slot.is_none(), "{edge:?} sentinel armed twice");
        *slot = Some(sentinel);
        sentinel
    }

    /// Disarms `edge`, returning the token that was armed there.
    pub(crate) fn take(&mut self, edge: Edge) -> Option<Sentinel> {
        self.slot(edge).take()
    }

    /// The token currently armed at `edge`.
    pub(crate) fn get(&self, edge: Edge) -> Option<Sentinel> {
        match edge {
            Edge::Leading => self.leading,
            Edge::Trailing => self.trailing,
        }
    }

    /// Returns `true` if `sentinel` is the live token for its edge.
    pub(crate) fn is_armed(&self, sentinel: Sentinel) -> bool {
        self.get(sentinel.edge) == Some(sentinel)
    }
}
