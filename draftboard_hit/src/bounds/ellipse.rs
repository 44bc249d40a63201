// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::geom::{
    CURVE_SAMPLES, bounds_of, distance_to_segment, ellipse_contains, ellipse_overlaps_rect,
    sample_t, segment_intersects_rect,
};
use crate::provider::{BoundsProvider, collect_points, effective_radius, try_get_defining_point};
use crate::registry::BoundsRegistry;
use crate::shape::{PointHit, Shape, ShapeKind};

/// Provider for [`ShapeKind::Ellipse`]: the filled ellipse inscribed in the
/// rectangle spanned by the first two points.
#[derive(Clone, Copy, Debug, Default)]
pub struct EllipseBounds;

fn ellipse_rect(points: &[Point]) -> Option<Rect> {
    bounds_of(points.get(..2)?)
}

impl<S: Shape> BoundsProvider<S> for EllipseBounds {
    fn target_kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn contains(
        &self,
        shape: &S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        let r = effective_radius(shape, radius, scale);
        collect_points(shape)
            .and_then(|pts| ellipse_rect(&pts))
            .is_some_and(|b| ellipse_contains(b, target, r))
    }

    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        collect_points(shape)
            .and_then(|pts| ellipse_rect(&pts))
            .is_some_and(|b| ellipse_overlaps_rect(b, target))
    }

    fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> Option<PointHit<'a, S>> {
        try_get_defining_point(shape, target, radius, scale, &[0, 1])
    }
}

/// Provider for [`ShapeKind::Arc`]: the outline of the ellipse spanned by the
/// first two points, from the angle of the third point to the angle of the
/// fourth, in the direction of increasing angle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArcBounds;

/// Polyline through the arc, or `None` when the arc is malformed.
fn arc_polyline(points: &[Point]) -> Option<Vec<Point>> {
    let [a, b, start, end, ..] = points else {
        return None;
    };
    let bounds = bounds_of(&[*a, *b])?;
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return None;
    }
    let c = bounds.center();
    let angle = |p: &Point| ((p.y - c.y) / ry).atan2((p.x - c.x) / rx);
    let theta0 = angle(start);
    let mut sweep = angle(end) - theta0;
    if sweep <= 0.0 {
        sweep += TAU;
    }

    Some(
        (0..=CURVE_SAMPLES)
            .map(|i| {
                let theta = theta0 + sweep * sample_t(i);
                Point::new(c.x + rx * theta.cos(), c.y + ry * theta.sin())
            })
            .collect(),
    )
}

impl<S: Shape> BoundsProvider<S> for ArcBounds {
    fn target_kind(&self) -> ShapeKind {
        ShapeKind::Arc
    }

    fn contains(
        &self,
        shape: &S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        let r = effective_radius(shape, radius, scale);
        collect_points(shape)
            .and_then(|pts| arc_polyline(&pts))
            .is_some_and(|line| {
                line.windows(2)
                    .any(|w| distance_to_segment(target, w[0], w[1]) <= r)
            })
    }

    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        collect_points(shape)
            .and_then(|pts| arc_polyline(&pts))
            .is_some_and(|line| {
                line.windows(2)
                    .any(|w| segment_intersects_rect(w[0], w[1], target))
            })
    }

    fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> Option<PointHit<'a, S>> {
        try_get_defining_point(shape, target, radius, scale, &[2, 3])
    }
}
