// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use draftboard_index::{GridConfig, SpatialHashGrid};
use kurbo::Rect;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Diagram-like layout: mostly small boxes scattered over `world`, plus a few
/// wide connectors and some zero-height wires that end up in the fallback.
fn gen_diagram(count: usize, world: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0x3C6E_F35F_4750_2932);
    (0..count)
        .map(|i| {
            let x = rng.next_f64() * world;
            let y = rng.next_f64() * world;
            match i % 20 {
                0 => Rect::new(x, y, x + rng.next_f64() * world * 0.25, y),
                1 => Rect::new(x, y, x + 600.0, y + 40.0),
                _ => {
                    let w = 20.0 + rng.next_f64() * 120.0;
                    let h = 20.0 + rng.next_f64() * 80.0;
                    Rect::new(x, y, x + w, y + h)
                }
            }
        })
        .collect()
}

fn build(rects: &[Rect], cell_size: f64) -> SpatialHashGrid<usize> {
    let config = GridConfig::default().with_cell_size(cell_size);
    let mut grid = SpatialHashGrid::with_capacity(config, rects.len());
    for (i, r) in rects.iter().enumerate() {
        grid.insert(i, *r);
    }
    grid
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");
    for &count in &[1_000_usize, 10_000] {
        let rects = gen_diagram(count, 10_000.0);
        group.throughput(Throughput::Elements(count as u64));
        for &cell in &[64.0_f64, 256.0, 1024.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("cell={cell}"), count),
                &rects,
                |b, rects| b.iter(|| black_box(build(rects, cell))),
            );
        }
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_query");
    let rects = gen_diagram(10_000, 10_000.0);
    for &cell in &[64.0_f64, 256.0, 1024.0] {
        let grid = build(&rects, cell);
        group.bench_function(format!("point(cell={cell})"), |b| {
            let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
            b.iter(|| {
                let x = rng.next_f64() * 10_000.0;
                let y = rng.next_f64() * 10_000.0;
                let region = Rect::new(x - 4.0, y - 4.0, x + 4.0, y + 4.0);
                black_box(grid.query(region).count())
            });
        });
        group.bench_function(format!("marquee(cell={cell})"), |b| {
            let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
            b.iter(|| {
                let x = rng.next_f64() * 9_000.0;
                let y = rng.next_f64() * 9_000.0;
                let region = Rect::new(x, y, x + 1_000.0, y + 1_000.0);
                black_box(grid.query(region).count())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
