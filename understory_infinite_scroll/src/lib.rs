// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_infinite_scroll --heading-base-level=0

//! Understory Infinite Scroll: a windowed scroller that grows lazily at either edge.
//!
//! This crate keeps a scrollable container populated with a bounded,
//! contiguous run of items around a focus index. Instead of computing a
//! visible range from known extents, it materializes a page of items on each
//! side of the focus and grows by another page whenever the item at one edge
//! of the window comes into view. It suits data whose item extents are only
//! known once the host has rendered them.
//!
//! The core concepts are:
//!
//! - [`ItemSource`]: implemented by each view; reports a page size and
//!   materializes the descriptor for an index, or `None` past the end of the
//!   data. [`source::from_fn`] builds one from a closure.
//! - [`ScrollHost`]: the capabilities the host lends to the scroller: viewport
//!   and item geometry, the scroll offset, attaching items at either end of the
//!   contents, and arming [`Sentinel`]s on edge items.
//! - [`WindowedScroller`]: owns the host, the source, the [`Window`] of
//!   materialized handles and the sentinel pair. It rebuilds around an index,
//!   grows a page at a time when a sentinel fires, keeps the visible content
//!   still while prepending, and scrolls already materialized items into view.
//! - [`Axis`]: selects which coordinate of the host geometry is the scroll axis.
//!   Everything else is orientation-agnostic.
//!
//! Like the rest of Understory, this crate does **not** know about widgets or
//! any particular UI framework. Hosts are responsible for:
//!
//! - Rendering the items they are asked to attach.
//! - Observing the items sentinels are armed on, and calling
//!   [`WindowedScroller::sentinel_crossed`] when one crosses into view.
//! - Rebuilding the scroller when the dataset or the container width changes.
//!
//! ## Minimal example
//!
//! A vertical list of 100 items, ten units tall each, in a container fifty
//! units tall, driven through the headless [`testing::SimulatedHost`]:
//!
//! ```rust
//! # #[cfg(feature = "testing")]
//! # {
//! use kurbo::Size;
//! use understory_infinite_scroll::testing::SimulatedHost;
//! use understory_infinite_scroll::{Axis, WindowedScroller, source};
//!
//! let host = SimulatedHost::new(Axis::Vertical, Size::new(200.0, 50.0), |_: &usize| 10.0);
//! let items = source::from_fn(5, |i| (i < 100).then_some(i));
//! let mut scroller = WindowedScroller::new(host, items, Axis::Vertical);
//!
//! // One page on each side of item 50.
//! scroller.rebuild_around(50);
//! assert_eq!(scroller.window().range(), 45..55);
//!
//! // Scroll to the end of what is loaded; the trailing sentinel fires.
//! for crossing in scroller.host_mut().scroll_by(100.0) {
//!     scroller
//!         .sentinel_crossed(crossing.sentinel, crossing.direction)
//!         .unwrap();
//! }
//! assert_eq!(scroller.window().range(), 45..60);
//! # }
//! ```
//!
//! The example needs the `testing` feature, which provides the simulated host.
//!
//! All geometry uses [`kurbo`] types in a host-chosen coordinate space
//! (typically logical pixels). This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod error;
mod host;
mod scroller;
mod sentinel;
pub mod source;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod window;

pub use axis::Axis;
pub use error::ScrollError;
pub use host::ScrollHost;
pub use scroller::{Growth, ScrollerState, WindowedScroller};
pub use sentinel::{Crossing, Edge, ScrollDirection, Sentinel};
pub use source::ItemSource;
pub use window::Window;
