// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-kind hit-testing contract and helpers shared by its implementations.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::geom::{expand_to_rect, is_finite_point, rect_contains};
use crate::registry::BoundsRegistry;
use crate::shape::{PointHit, PointSlot, Shape, ShapeKind, ShapeState};

/// Hit-testing logic for one [`ShapeKind`].
///
/// Providers are looked up by kind in a [`BoundsRegistry`] rather than being
/// methods on the shape, so geometry code can vary independently of how shapes
/// are stored. Every method receives the registry so composite kinds can
/// dispatch to their children's providers.
///
/// `radius` is the pick tolerance in model units and `scale` the current zoom.
/// Implementations should go through [`effective_radius`] so shapes flagged
/// with [`ShapeState::SIZE`] are treated consistently.
pub trait BoundsProvider<S: Shape> {
    /// The kind this provider handles.
    fn target_kind(&self) -> ShapeKind;

    /// Whether `target` lies within `radius` of the shape's visible extent.
    fn contains(
        &self,
        shape: &S,
        target: Point,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry<S>,
    ) -> bool;

    /// Whether the shape's extent intersects `target`.
    ///
    /// `target` is tested as given, not grown by `radius`: the radius only
    /// widens shapes with no area of their own, such as a lone point.
    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry<S>,
    ) -> bool;

    /// The shape's connection point nearest to `target`, if one is within
    /// `radius`.
    fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry<S>,
    ) -> Option<PointHit<'a, S>>;
}

/// The pick radius to use for `shape` at zoom `scale`.
///
/// Shapes flagged [`ShapeState::SIZE`] keep a constant on-screen size, so their
/// radius is divided by `scale`. Non-finite, non-positive and unit scales
/// leave the radius untouched.
pub fn effective_radius<S: Shape>(shape: &S, radius: f64, scale: f64) -> f64 {
    if shape.state().contains(ShapeState::SIZE) && scale.is_finite() && scale > 0.0 && scale != 1.0
    {
        radius / scale
    } else {
        radius
    }
}

/// The shape's defining points, or `None` if it has none, cannot enumerate
/// them, or any of them is non-finite.
pub fn collect_points<S: Shape>(shape: &S) -> Option<Vec<Point>> {
    let mut points = Vec::new();
    shape.get_points(&mut points).ok()?;
    if points.is_empty() || !points.iter().all(|p| is_finite_point(*p)) {
        return None;
    }
    Some(points)
}

/// Picks the point nearest to `target` among `candidates` whose radius square
/// contains `target`. Ties keep the earlier candidate.
pub fn nearest_point<'a, S>(
    shape: &'a S,
    target: Point,
    radius: f64,
    candidates: impl IntoIterator<Item = (PointSlot, Point)>,
) -> Option<PointHit<'a, S>> {
    let mut best: Option<(f64, PointSlot, Point)> = None;
    for (slot, position) in candidates {
        if !rect_contains(expand_to_rect(position, radius), target) {
            continue;
        }
        let d = (position - target).hypot2();
        if best.is_none_or(|(best_d, ..)| d < best_d) {
            best = Some((d, slot, position));
        }
    }
    best.map(|(_, slot, position)| PointHit {
        shape,
        slot,
        position,
    })
}

/// Selected defining points followed by every connector, in slot order.
///
/// `indices` picks which defining points count as connection points; indices
/// past the end of `points` are ignored.
pub fn connection_points<'p, S: Shape>(
    shape: &'p S,
    points: &'p [Point],
    indices: &'p [usize],
) -> impl Iterator<Item = (PointSlot, Point)> + 'p {
    indices
        .iter()
        .filter_map(|&i| points.get(i).map(|p| (PointSlot::Defining(i), *p)))
        .chain(
            shape
                .connectors()
                .iter()
                .enumerate()
                .map(|(i, p)| (PointSlot::Connector(i), *p)),
        )
}

/// Point lookup shared by providers whose connection points are a fixed set
/// of defining points.
pub(crate) fn try_get_defining_point<'a, S: Shape>(
    shape: &'a S,
    target: Point,
    radius: f64,
    scale: f64,
    indices: &[usize],
) -> Option<PointHit<'a, S>> {
    let r = effective_radius(shape, radius, scale);
    let points = collect_points(shape).unwrap_or_default();
    nearest_point(
        shape,
        target,
        r,
        connection_points(shape, &points, indices),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    struct Dot {
        at: Point,
        state: ShapeState,
        connectors: Vec<Point>,
    }

    impl Shape for Dot {
        fn kind(&self) -> ShapeKind {
            ShapeKind::Point
        }
        fn state(&self) -> ShapeState {
            self.state
        }
        fn get_points(
            &self,
            out: &mut Vec<Point>,
        ) -> Result<(), crate::shape::PointsUnsupported> {
            out.push(self.at);
            Ok(())
        }
        fn connectors(&self) -> &[Point] {
            &self.connectors
        }
    }

    fn dot(state: ShapeState) -> Dot {
        Dot {
            at: Point::new(1.0, 1.0),
            state,
            connectors: vec![],
        }
    }

    #[test]
    fn radius_scales_only_for_size_shapes() {
        let plain = dot(ShapeState::VISIBLE);
        let sized = dot(ShapeState::VISIBLE | ShapeState::SIZE);
        assert_eq!(effective_radius(&plain, 4.0, 2.0), 4.0);
        assert_eq!(effective_radius(&sized, 4.0, 2.0), 2.0);
        assert_eq!(effective_radius(&sized, 4.0, 1.0), 4.0);
        assert_eq!(effective_radius(&sized, 4.0, 0.0), 4.0);
        assert_eq!(effective_radius(&sized, 4.0, f64::NAN), 4.0);
    }

    #[test]
    fn nearest_prefers_closest_then_earliest() {
        let shape = dot(ShapeState::VISIBLE);
        let candidates = [
            (PointSlot::Defining(0), Point::new(2.0, 0.0)),
            (PointSlot::Defining(1), Point::new(-2.0, 0.0)),
            (PointSlot::Connector(0), Point::new(0.5, 0.0)),
        ];
        let hit = nearest_point(&shape, Point::ZERO, 3.0, candidates).unwrap();
        assert_eq!(hit.slot, PointSlot::Connector(0));

        // Equal distances: the first wins.
        let hit = nearest_point(&shape, Point::ZERO, 3.0, candidates[..2].iter().copied()).unwrap();
        assert_eq!(hit.slot, PointSlot::Defining(0));

        assert!(nearest_point(&shape, Point::ZERO, 0.1, candidates).is_none());
    }

    #[test]
    fn connection_points_skip_missing_indices() {
        let mut shape = dot(ShapeState::VISIBLE);
        shape.connectors.push(Point::new(9.0, 9.0));
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let got: Vec<_> = connection_points(&shape, &points, &[1, 5]).collect();
        assert_eq!(
            got,
            vec![
                (PointSlot::Defining(1), Point::new(1.0, 0.0)),
                (PointSlot::Connector(0), Point::new(9.0, 9.0)),
            ]
        );
    }
}
