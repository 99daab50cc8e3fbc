// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_justified_rows --heading-base-level=0

//! Understory Justified Rows: pack variable-aspect images into rows that fill a width.
//!
//! Given the natural sizes of a sequence of images and a container width,
//! [`JustifiedRowPlanner::plan`] partitions the images into consecutive rows
//! and assigns each row a height at which its images, scaled to that height
//! and padded, span the container exactly. The trailing row may stay short at
//! the target height rather than being blown up to fill the width.
//!
//! - [`JustifiedRowPlanner`]: target row height, per-image padding and the
//!   fallback size used for images with a missing or degenerate size.
//! - [`RowPlan`]: the resulting [`RowPlanEntry`] list, with lookups from an
//!   image index to its row.
//!
//! The planner is a pure function of its inputs; it renders nothing and keeps
//! no state between calls. Hosts typically replan whenever the container
//! width changes and feed the rows to a windowed scroller as items.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_justified_rows::JustifiedRowPlanner;
//!
//! let planner = JustifiedRowPlanner::default();
//! let sizes = [
//!     Size::new(1600.0, 1200.0),
//!     Size::new(800.0, 1200.0),
//!     Size::new(1920.0, 1080.0),
//!     Size::new(1000.0, 1000.0),
//! ];
//! let plan = planner.plan(sizes, 1000.0);
//!
//! assert_eq!(plan.image_count(), 4);
//! assert_eq!(plan.rows()[0].start, 0);
//! for row in &plan {
//!     // Full rows are scaled to fill the width exactly.
//!     if row.fills_width {
//!         let width: f64 = sizes[row.range()]
//!             .iter()
//!             .map(|size| planner.padded_width_at(*size, row.height))
//!             .sum();
//!         assert!((width - 1000.0).abs() < 1e-6);
//!     }
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod plan;
mod planner;

pub use plan::{RowPlan, RowPlanEntry};
pub use planner::{DEFAULT_PADDING, DEFAULT_TARGET_ROW_HEIGHT, FALLBACK_SIZE, JustifiedRowPlanner};
