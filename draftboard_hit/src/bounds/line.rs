// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::geom::{distance_to_segment, segment_intersects_rect};
use crate::provider::{BoundsProvider, collect_points, effective_radius, try_get_defining_point};
use crate::registry::BoundsRegistry;
use crate::shape::{PointHit, Shape, ShapeKind};

/// Provider for [`ShapeKind::Line`]: a segment with a round tolerance.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineBounds;

fn endpoints<S: Shape>(shape: &S) -> Option<(Point, Point)> {
    match collect_points(shape)?.as_slice() {
        [a, b, ..] => Some((*a, *b)),
        [a] => Some((*a, *a)),
        [] => None,
    }
}

impl<S: Shape> BoundsProvider<S> for LineBounds {
    fn target_kind(&self) -> ShapeKind {
        ShapeKind::Line
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
        endpoints(shape).is_some_and(|(a, b)| distance_to_segment(target, a, b) <= r)
    }

    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        endpoints(shape).is_some_and(|(a, b)| segment_intersects_rect(a, b, target))
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
