// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::geom::{convex_hull, hull_contains, hull_overlaps_rect};
use crate::provider::{
    BoundsProvider, collect_points, connection_points, effective_radius, nearest_point,
};
use crate::registry::BoundsRegistry;
use crate::shape::{PointHit, Shape, ShapeKind};

/// Provider for [`ShapeKind::Path`].
///
/// A path is hit-tested through the convex hull of its points, which covers
/// the path for every segment type whose control points bound it. Every
/// point of the path is a connection point.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathBounds;

fn hull<S: Shape>(shape: &S) -> Option<Vec<Point>> {
    collect_points(shape).map(|pts| convex_hull(&pts))
}

impl<S: Shape> BoundsProvider<S> for PathBounds {
    fn target_kind(&self) -> ShapeKind {
        ShapeKind::Path
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
        hull(shape).is_some_and(|h| hull_contains(&h, target, r))
    }

    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> bool {
        hull(shape).is_some_and(|h| hull_overlaps_rect(&h, target))
    }

    fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry<S>,
    ) -> Option<PointHit<'a, S>> {
        let r = effective_radius(shape, radius, scale);
        let points = collect_points(shape).unwrap_or_default();
        let indices: Vec<usize> = (0..points.len()).collect();
        nearest_point(shape, target, r, connection_points(shape, &points, &indices))
    }
}
