// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_justified_rows::JustifiedRowPlanner;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// A photo size with an aspect ratio between 1:2 and 2:1.
    fn next_size(&mut self) -> Size {
        let width = 400.0 + f64::from(self.next_u32() % 1200);
        let height = 400.0 + f64::from(self.next_u32() % 1200);
        Size::new(width, height)
    }
}

fn sizes(len: usize, seed: u64) -> Vec<Size> {
    let mut rng = Lcg(seed);
    (0..len).map(|_| rng.next_size()).collect()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("justified_rows/plan");
    let planner = JustifiedRowPlanner::default();

    for len in [100usize, 1_000, 10_000, 100_000] {
        let photos = sizes(len, 0x5eed);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &photos, |b, photos| {
            b.iter(|| black_box(planner.plan(photos.iter().copied(), black_box(1280.0))));
        });
    }

    group.finish();
}

fn bench_replan_on_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("justified_rows/resize");
    let planner = JustifiedRowPlanner::default();
    let photos = sizes(10_000, 7);
    let widths = [640.0, 800.0, 1024.0, 1280.0, 1920.0, 2560.0];

    group.bench_function("sweep_widths", |b| {
        b.iter(|| {
            for width in widths {
                black_box(planner.plan(photos.iter().copied(), width));
            }
        });
    });

    group.finish();
}

fn bench_row_lookup(c: &mut Criterion) {
    let planner = JustifiedRowPlanner::default();
    let photos = sizes(100_000, 11);
    let plan = planner.plan(photos.iter().copied(), 1280.0);

    c.bench_function("justified_rows/row_of_image", |b| {
        let mut image = 0;
        b.iter(|| {
            image = (image + 7_919) % photos.len();
            black_box(plan.row_of_image(black_box(image)))
        });
    });
}

criterion_group!(benches, bench_plan, bench_replan_on_resize, bench_row_lookup);
criterion_main!(benches);
