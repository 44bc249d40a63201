// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use draftboard_hit::{HitTest, PointsUnsupported, Shape, ShapeKind};
use kurbo::{Point, Rect};

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
    fn point(&mut self, world: f64) -> Point {
        Point::new(self.next_f64() * world, self.next_f64() * world)
    }
}

struct Element {
    kind: ShapeKind,
    points: Vec<Point>,
}

impl Shape for Element {
    fn kind(&self) -> ShapeKind {
        self.kind
    }

    fn get_points(&self, out: &mut Vec<Point>) -> Result<(), PointsUnsupported> {
        out.extend_from_slice(&self.points);
        Ok(())
    }
}

fn gen_elements(count: usize, world: f64) -> Vec<Element> {
    let mut rng = Rng::new(0xD1A7_0000_0000_0001);
    (0..count)
        .map(|i| {
            let a = rng.point(world);
            let offset = |rng: &mut Rng, max: f64| {
                Point::new(a.x + rng.next_f64() * max, a.y + rng.next_f64() * max)
            };
            let (kind, points) = match i % 5 {
                0 => (ShapeKind::Line, vec![a, offset(&mut rng, 300.0)]),
                1 => (ShapeKind::Ellipse, vec![a, offset(&mut rng, 80.0)]),
                2 => (
                    ShapeKind::CubicBezier,
                    vec![
                        a,
                        offset(&mut rng, 200.0),
                        offset(&mut rng, 200.0),
                        offset(&mut rng, 200.0),
                    ],
                ),
                3 => (
                    ShapeKind::Path,
                    (0..6).map(|_| offset(&mut rng, 150.0)).collect(),
                ),
                _ => (ShapeKind::Rectangle, vec![a, offset(&mut rng, 120.0)]),
            };
            Element { kind, points }
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    group.sample_size(50);
    let hit_test = HitTest::with_defaults();

    for &count in &[500_usize, 5_000] {
        let shapes = gen_elements(count, 8_000.0);
        group.bench_function(format!("try_to_get_shape(n={count})"), |b| {
            let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
            b.iter(|| {
                let target = rng.point(8_000.0);
                black_box(hit_test.try_to_get_shape(&shapes, target, 4.0, 1.0).is_some())
            });
        });
        group.bench_function(format!("try_to_get_point(n={count})"), |b| {
            let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
            b.iter(|| {
                let target = rng.point(8_000.0);
                black_box(hit_test.try_to_get_point(&shapes, target, 6.0, 1.0).is_some())
            });
        });
        group.bench_function(format!("try_to_get_shapes(n={count})"), |b| {
            let mut rng = Rng::new(0x3C6E_F35F_4750_2932);
            b.iter(|| {
                let p = rng.point(7_500.0);
                let marquee = Rect::new(p.x, p.y, p.x + 500.0, p.y + 500.0);
                black_box(
                    hit_test
                        .try_to_get_shapes(&shapes, marquee, 0.0, 1.0)
                        .map_or(0, |set| set.len()),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
