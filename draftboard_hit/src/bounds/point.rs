// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::geom::{expand_to_rect, rect_contains, rects_overlap};
use crate::provider::{BoundsProvider, collect_points, effective_radius, try_get_defining_point};
use crate::registry::BoundsRegistry;
use crate::shape::{PointHit, Shape, ShapeKind};

/// Provider for [`ShapeKind::Point`]: the square of half-side `radius` around
/// the point.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointBounds;

impl PointBounds {
    fn square<S: Shape>(shape: &S, radius: f64, scale: f64) -> Option<Rect> {
        let p = *collect_points(shape)?.first()?;
        Some(expand_to_rect(p, effective_radius(shape, radius, scale)))
    }
}

impl<S: Shape> BoundsProvider<S> for PointBounds {
    fn target_kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn contains(
        &self,
        shape: &S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        Self::square(shape, radius, scale).is_some_and(|sq| rect_contains(sq, target))
    }

    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        Self::square(shape, radius, scale).is_some_and(|sq| rects_overlap(sq, target))
    }

    fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> Option<PointHit<'a, S>> {
        try_get_defining_point(shape, target, radius, scale, &[0])
    }
}
