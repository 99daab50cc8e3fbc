// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A photo flow and its thumbnail strip, driven headlessly.
//!
//! This example shows how to:
//! - pack photos into justified rows with `understory_justified_rows`,
//! - let a `FlowView` keep a window of rows around the focused photo,
//! - forward sentinel crossings from the host back to the scroller,
//! - keep a horizontal thumbnail strip in step with the focus.
//!
//! Run:
//! - `cargo run -p understory_demos --example photo_flow_headless`
//! - `RUST_LOG=understory_infinite_scroll=trace cargo run -p understory_demos --example photo_flow_headless`

use kurbo::Size;
use tracing::info;
use understory_infinite_scroll::testing::SimulatedHost;
use understory_infinite_scroll::{Axis, ScrollError, WindowedScroller};
use understory_justified_rows::JustifiedRowPlanner;
use understory_photo_flow::{DEFAULT_MONTAGE_BATCH, FlowRow, FlowView, Montage, Tile, TileSource};

const MINI_EXTENT: f64 = 75.0;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            match tracing_subscriber::EnvFilter::try_new("info,understory_infinite_scroll=debug") {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("info"),
            }
        }
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// A camera roll: mostly landscape, some portrait, the odd panorama and one
/// photo whose metadata never arrived.
fn camera_roll(len: u32) -> Vec<Size> {
    (0..len)
        .map(|i| match i % 11 {
            3 | 7 => Size::new(3000.0, 4000.0),
            5 => Size::new(8000.0, 2000.0),
            _ if i == 42 => Size::ZERO,
            _ => Size::new(4000.0, 3000.0 - f64::from(i % 5) * 250.0),
        })
        .collect()
}

fn describe(view: &FlowView<SimulatedHost<FlowRow>, Size>) {
    let scroller = view.scroller();
    info!(
        state = ?scroller.state(),
        rows = ?scroller.window().range(),
        scroll = scroller.host().scroll_position(),
        focus = ?view.focused(),
        "flow"
    );
    for (_, row) in scroller.window().iter() {
        let widths: Vec<String> = row
            .cells
            .iter()
            .map(|cell| format!("{:.0}", cell.size.width))
            .collect();
        info!(
            row = row.row,
            photos = ?row.photos(),
            height = row.height,
            widths = %widths.join(" "),
            "  row"
        );
    }
}

fn scroll_flow(
    view: &mut FlowView<SimulatedHost<FlowRow>, Size>,
    delta: f64,
    steps: usize,
) -> Result<(), ScrollError> {
    for _ in 0..steps {
        let crossings = view.scroller_mut().host_mut().scroll_by(delta);
        for crossing in crossings {
            if let Some(growth) = view.sentinel_crossed(crossing.sentinel, crossing.direction)? {
                info!(
                    edge = ?crossing.sentinel.edge(),
                    added = growth.added,
                    exhausted = growth.exhausted,
                    "grew"
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), ScrollError> {
    init_tracing();

    let photos = camera_roll(240);
    let viewport = Size::new(1200.0, 700.0);

    // The main flow.
    let host = SimulatedHost::new(Axis::Vertical, viewport, |row: &FlowRow| row.height);
    let mut flow = FlowView::new(host, JustifiedRowPlanner::default());
    flow.show(photos.clone(), 120);
    describe(&flow);

    // The thumbnail strip under it.
    let montage = Montage::new(DEFAULT_MONTAGE_BATCH, MINI_EXTENT);
    let strip_viewport = Size::new(viewport.width, MINI_EXTENT);
    let strip_host = SimulatedHost::new(Axis::Horizontal, strip_viewport, |_: &Tile| MINI_EXTENT);
    let mut strip = WindowedScroller::new(
        strip_host,
        TileSource::new(photos.len(), montage, strip_viewport),
        Axis::Horizontal,
    );
    strip.rebuild_around(120);
    info!(tiles = ?strip.window().range(), "strip");

    // Scroll down through a few pages, then back up past the start.
    scroll_flow(&mut flow, 90.0, 40)?;
    describe(&flow);
    scroll_flow(&mut flow, -90.0, 120)?;
    describe(&flow);

    // Step the focus along; the strip follows.
    for photo in [121, 125, 160, 12] {
        let moved = flow.focus(photo)?;
        if strip.window().contains(photo) {
            strip.ensure_visible(photo)?;
        } else {
            strip.rebuild_around(photo);
        }
        let tile = strip.window().get(photo).copied();
        info!(
            photo,
            moved,
            row = ?flow.focused_row(),
            sheet = ?tile.map(|tile| tile.sheet),
            offset = ?tile.map(|tile| tile.sheet_offset.x),
            "focused"
        );
    }

    // The window narrows: rows are re-planned and rebuilt around the focus.
    let narrow = Size::new(800.0, 700.0);
    flow.scroller_mut().host_mut().set_viewport_size(narrow);
    if flow.resized(narrow)? {
        describe(&flow);
    }

    flow.destroy();
    strip.destroy();
    info!(state = ?flow.scroller().state(), "done");
    Ok(())
}
