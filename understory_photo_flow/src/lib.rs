// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_photo_flow --heading-base-level=0

//! Understory Photo Flow: gallery views on top of the windowed scroller.
//!
//! This crate composes [`understory_infinite_scroll`] with
//! [`understory_justified_rows`] into the item sources a photo gallery needs:
//!
//! - [`FlowRowSource`]: the photos of a dataset packed into justified rows;
//!   each scroller item is one [`FlowRow`]. A page is enough rows to cover the
//!   container once, plus one.
//! - [`TileSource`]: fixed-size thumbnails for a strip or grid, each carrying
//!   the address of its image inside a [`Montage`] sprite sheet.
//! - [`FlowView`]: a vertical flow that owns its scroller and follows a
//!   focused photo across dataset changes and resizes.
//!
//! Photos only need to report their natural size through the [`Photo`]
//! trait, which [`kurbo::Size`] implements.
//!
//! ## Minimal example
//!
//! The thumbnails of a horizontal strip, addressed in sheets of eight:
//!
//! ```rust
//! use kurbo::Size;
//! use understory_infinite_scroll::ItemSource;
//! use understory_photo_flow::{DEFAULT_MONTAGE_BATCH, Montage, TileSource};
//!
//! let montage = Montage::new(DEFAULT_MONTAGE_BATCH, 64.0);
//! let strip = TileSource::new(500, montage, Size::new(640.0, 64.0));
//!
//! // One page covers the strip once.
//! assert_eq!(strip.items_per_page(), 10);
//!
//! let tile = strip.materialize(42).unwrap();
//! assert_eq!(tile.sheet, 5);
//! assert_eq!(tile.sheet_offset.x, -128.0);
//! assert!(strip.materialize(500).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flow;
mod tile;
mod view;

pub use flow::{FlowCell, FlowRow, FlowRowSource, Photo};
pub use tile::{DEFAULT_MONTAGE_BATCH, Montage, Tile, TileSource};
pub use view::FlowView;
