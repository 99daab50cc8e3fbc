// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_infinite_scroll::source::{self, FromFn};
use understory_infinite_scroll::testing::SimulatedHost;
use understory_infinite_scroll::{Axis, ScrollerState, WindowedScroller};
use understory_justified_rows::JustifiedRowPlanner;
use understory_photo_flow::{FlowRow, FlowView};

type Numbers = WindowedScroller<SimulatedHost<usize>, FromFn<fn(usize) -> Option<usize>>>;

const LEN: usize = 10_000;

fn ten_thousand(index: usize) -> Option<usize> {
    (index < LEN).then_some(index)
}

fn numbers(per_page: usize) -> Numbers {
    let host = SimulatedHost::new(Axis::Vertical, Size::new(320.0, 600.0), |_: &usize| 24.0);
    let items = source::from_fn(per_page, ten_thousand as fn(usize) -> Option<usize>);
    WindowedScroller::new(host, items, Axis::Vertical)
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("infinite_scroll/rebuild_around");
    for per_page in [10usize, 50, 250] {
        group.bench_with_input(BenchmarkId::from_parameter(per_page), &per_page, |b, &per_page| {
            let mut scroller = numbers(per_page);
            let mut index = 0;
            b.iter(|| {
                index = (index + 3_331) % LEN;
                scroller.rebuild_around(black_box(index));
            });
        });
    }
    group.finish();
}

fn bench_grow_to_exhaustion(c: &mut Criterion) {
    let mut group = c.benchmark_group("infinite_scroll/grow_to_exhaustion");
    group.sample_size(20);
    for per_page in [25usize, 100] {
        group.bench_with_input(BenchmarkId::new("forward", per_page), &per_page, |b, &per_page| {
            b.iter_batched(
                || {
                    let mut scroller = numbers(per_page);
                    scroller.rebuild_around(LEN / 2);
                    scroller
                },
                |mut scroller| {
                    while scroller.state() != ScrollerState::ExhaustedForward {
                        let _ = black_box(scroller.grow_forward());
                    }
                    scroller
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("backward", per_page), &per_page, |b, &per_page| {
            b.iter_batched(
                || {
                    let mut scroller = numbers(per_page);
                    scroller.rebuild_around(LEN / 2);
                    scroller
                },
                |mut scroller| {
                    while scroller.state() != ScrollerState::ExhaustedBackward {
                        let _ = black_box(scroller.grow_backward());
                    }
                    scroller
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_flow_scroll(c: &mut Criterion) {
    let photos: Vec<Size> = (0..5_000_u32)
        .map(|i| Size::new(300.0 + f64::from((i * 53) % 700), 400.0 + f64::from((i * 29) % 300)))
        .collect();

    c.bench_function("photo_flow/scroll_through", |b| {
        b.iter_batched(
            || {
                let host = SimulatedHost::new(
                    Axis::Vertical,
                    Size::new(1280.0, 800.0),
                    |row: &FlowRow| row.height,
                );
                let mut view = FlowView::new(host, JustifiedRowPlanner::default());
                view.show(photos.clone(), 0);
                view
            },
            |mut view| {
                for _ in 0..200 {
                    let crossings = view.scroller_mut().host_mut().scroll_by(120.0);
                    for crossing in crossings {
                        let _ = view.sentinel_crossed(crossing.sentinel, crossing.direction);
                    }
                }
                view
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_rebuild, bench_grow_to_exhaustion, bench_flow_scroll);
criterion_main!(benches);
