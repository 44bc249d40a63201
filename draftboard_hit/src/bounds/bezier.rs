// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{CubicBez, ParamCurveNearest, Point, QuadBez, Rect};

use crate::geom::curve_overlaps_rect;
use crate::provider::{BoundsProvider, collect_points, effective_radius, try_get_defining_point};
use crate::registry::BoundsRegistry;
use crate::shape::{PointHit, Shape, ShapeKind};

/// Accuracy passed to kurbo's nearest-point solver.
const NEAREST_ACCURACY: f64 = 1e-6;

fn within<C: ParamCurveNearest>(curve: &C, target: Point, radius: f64) -> bool {
    curve.nearest(target, NEAREST_ACCURACY).distance_sq <= radius * radius
}

fn cubic<S: Shape>(shape: &S) -> Option<CubicBez> {
    match collect_points(shape)?.as_slice() {
        [p0, p1, p2, p3, ..] => Some(CubicBez::new(*p0, *p1, *p2, *p3)),
        _ => None,
    }
}

fn quad<S: Shape>(shape: &S) -> Option<QuadBez> {
    match collect_points(shape)?.as_slice() {
        [p0, p1, p2, ..] => Some(QuadBez::new(*p0, *p1, *p2)),
        _ => None,
    }
}

/// Provider for [`ShapeKind::CubicBezier`]. The curve itself is hit, not its
/// control polygon.
#[derive(Clone, Copy, Debug, Default)]
pub struct CubicBezierBounds;

impl<S: Shape> BoundsProvider<S> for CubicBezierBounds {
    fn target_kind(&self) -> ShapeKind {
        ShapeKind::CubicBezier
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
        cubic(shape).is_some_and(|c| within(&c, target, r))
    }

    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        cubic(shape).is_some_and(|c| curve_overlaps_rect(&c, target))
    }

    fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> Option<PointHit<'a, S>> {
        try_get_defining_point(shape, target, radius, scale, &[0, 3])
    }
}

/// Provider for [`ShapeKind::QuadraticBezier`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QuadraticBezierBounds;

impl<S: Shape> BoundsProvider<S> for QuadraticBezierBounds {
    fn target_kind(&self) -> ShapeKind {
        ShapeKind::QuadraticBezier
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
        quad(shape).is_some_and(|q| within(&q, target, r))
    }

    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        quad(shape).is_some_and(|q| curve_overlaps_rect(&q, target))
    }

    fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> Option<PointHit<'a, S>> {
        try_get_defining_point(shape, target, radius, scale, &[0, 2])
    }
}
