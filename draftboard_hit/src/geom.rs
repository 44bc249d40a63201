// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers shared by the bounds providers.
//!
//! All rectangle tests here are **inclusive**: a point on the edge of a
//! rectangle is inside it, and rectangles sharing an edge overlap. Kurbo's own
//! `Rect::contains` is half-open, which is the wrong choice for picking.

use alloc::vec::Vec;

use kurbo::{ParamCurve, Point, Rect};

/// Whether both coordinates of `p` are finite.
#[inline]
pub fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Min/max reduction over `points`.
///
/// Returns `None` for an empty slice or when any coordinate is non-finite.
pub fn bounds_of(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    if !points.iter().all(|p| is_finite_point(*p)) {
        return None;
    }
    let mut r = Rect::from_points(*first, *first);
    for p in rest {
        r = r.union_pt(*p);
    }
    Some(r)
}

/// The square of half-side `radius` centred on `p`.
#[inline]
pub fn expand_to_rect(p: Point, radius: f64) -> Rect {
    Rect::new(p.x - radius, p.y - radius, p.x + radius, p.y + radius)
}

/// Inclusive point-in-rectangle test. `rect` is normalized first.
#[inline]
pub fn rect_contains(rect: Rect, p: Point) -> bool {
    let r = rect.abs();
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

/// Inclusive rectangle overlap test. Both rectangles are normalized first.
#[inline]
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

/// Euclidean distance from `p` to the segment `a`–`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let v = b - a;
    let w = p - a;
    let len2 = v.hypot2();
    let t = if len2 > 0.0 { w.dot(v) / len2 } else { 0.0 };
    let proj = a + v * t.clamp(0.0, 1.0);
    (p - proj).hypot()
}

/// Whether the segment `a`–`b` touches `rect` (Liang–Barsky clip).
pub fn segment_intersects_rect(a: Point, b: Point, rect: Rect) -> bool {
    let r = rect.abs();
    let d = b - a;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, a.x - r.x0),
        (d.x, r.x1 - a.x),
        (-d.y, a.y - r.y0),
        (d.y, r.y1 - a.y),
    ] {
        if p == 0.0 {
            // Parallel to this edge: reject when outside it.
            if q < 0.0 {
                return false;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return false;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return false;
                }
                t1 = t1.min(t);
            }
        }
    }
    t0 <= t1
}

/// Whether `p` lies in the ellipse inscribed in `bounds`, with both
/// semi-axes grown by `radius`.
pub fn ellipse_contains(bounds: Rect, p: Point, radius: f64) -> bool {
    let b = bounds.abs();
    let rx = b.width() / 2.0 + radius;
    let ry = b.height() / 2.0 + radius;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let c = b.center();
    let dx = (p.x - c.x) / rx;
    let dy = (p.y - c.y) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Whether the ellipse inscribed in `bounds` touches `rect`.
///
/// The point of `rect` nearest to the ellipse centre is also nearest in the
/// ellipse's scaled metric, so one containment test decides it.
pub fn ellipse_overlaps_rect(bounds: Rect, rect: Rect) -> bool {
    let b = bounds.abs();
    let r = rect.abs();
    if !rects_overlap(b, r) {
        return false;
    }
    let c = b.center();
    let nearest = Point::new(c.x.clamp(r.x0, r.x1), c.y.clamp(r.y0, r.y1));
    ellipse_contains(b, nearest, 0.0)
}

/// Convex hull of `points` in counter-clockwise order (Andrew's monotone chain).
///
/// Collinear points are dropped. Fewer than three distinct points yield the
/// distinct points themselves.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut hull: Vec<Point> = Vec::with_capacity(pts.len() * 2);
    push_chain(&mut hull, pts.iter().copied());
    push_chain(&mut hull, pts.iter().rev().copied());
    hull
}

/// Append one monotone chain to `hull`, dropping its final point since it
/// starts the next chain.
fn push_chain(hull: &mut Vec<Point>, points: impl Iterator<Item = Point>) {
    let start = hull.len();
    for p in points {
        while hull.len() >= start + 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
}

/// Whether `p` is inside the convex polygon `hull` or within `radius` of it.
///
/// `hull` is a counter-clockwise polygon as produced by [`convex_hull`];
/// one- and two-point hulls act as a point and a segment.
pub fn hull_contains(hull: &[Point], p: Point, radius: f64) -> bool {
    match hull {
        [] => false,
        [a] => (p - *a).hypot() <= radius,
        [a, b] => distance_to_segment(p, *a, *b) <= radius,
        _ => {
            let inside = edges(hull).all(|(a, b)| cross(a, b, p) >= 0.0);
            inside || edges(hull).any(|(a, b)| distance_to_segment(p, a, b) <= radius)
        }
    }
}

/// Whether the convex polygon `hull` touches `rect`.
pub fn hull_overlaps_rect(hull: &[Point], rect: Rect) -> bool {
    let r = rect.abs();
    match hull {
        [] => false,
        [a] => rect_contains(r, *a),
        [a, b] => segment_intersects_rect(*a, *b, r),
        _ => {
            hull.iter().any(|p| rect_contains(r, *p))
                || [
                    Point::new(r.x0, r.y0),
                    Point::new(r.x1, r.y0),
                    Point::new(r.x1, r.y1),
                    Point::new(r.x0, r.y1),
                ]
                .into_iter()
                .any(|c| hull_contains(hull, c, 0.0))
                || edges(hull).any(|(a, b)| segment_intersects_rect(a, b, r))
        }
    }
}

/// Number of chords used when a curve is approximated by a polyline.
pub const CURVE_SAMPLES: usize = 64;

/// Whether the polyline approximation of `curve` touches `rect`.
pub fn curve_overlaps_rect<C: ParamCurve>(curve: &C, rect: Rect) -> bool {
    let r = rect.abs();
    let mut prev = curve.start();
    if rect_contains(r, prev) {
        return true;
    }
    for i in 1..=CURVE_SAMPLES {
        let next = curve.eval(sample_t(i));
        if segment_intersects_rect(prev, next, r) {
            return true;
        }
        prev = next;
    }
    false
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Sample counts are tiny; the conversion is exact."
)]
#[inline]
pub(crate) fn sample_t(i: usize) -> f64 {
    i as f64 / CURVE_SAMPLES as f64
}

/// Z component of `(b - a) × (c - a)`; positive when `a, b, c` turn left.
#[inline]
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

fn edges(poly: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    poly.iter()
        .zip(poly.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}
