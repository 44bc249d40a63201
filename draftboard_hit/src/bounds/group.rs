// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::provider::{BoundsProvider, effective_radius, nearest_point};
use crate::registry::BoundsRegistry;
use crate::shape::{PointHit, PointSlot, Shape, ShapeKind};

/// Provider for [`ShapeKind::Group`].
///
/// A group is hit wherever one of its children is hit. Each child is
/// dispatched to its own provider through the registry, so nested groups
/// work and a child keeps its own [`SIZE`](crate::ShapeState::SIZE) flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupBounds;

impl<S: Shape> BoundsProvider<S> for GroupBounds {
    fn target_kind(&self) -> ShapeKind {
        ShapeKind::Group
    }

    fn contains(
        &self,
        shape: &S,
        target: Point,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry<S>,
    ) -> bool {
        shape
            .children()
            .iter()
            .any(|child| registry.contains(child, target, radius, scale))
    }

    fn overlaps(
        &self,
        shape: &S,
        target: Rect,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry<S>,
    ) -> bool {
        shape
            .children()
            .iter()
            .any(|child| registry.overlaps(child, target, radius, scale))
    }

    /// The group's own connectors are tried first, then each child in order.
    fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry<S>,
    ) -> Option<PointHit<'a, S>> {
        let r = effective_radius(shape, radius, scale);
        let own = shape
            .connectors()
            .iter()
            .enumerate()
            .map(|(i, p)| (PointSlot::Connector(i), *p));
        nearest_point(shape, target, r, own).or_else(|| {
            shape
                .children()
                .iter()
                .find_map(|child| registry.try_get_point(child, target, radius, scale))
        })
    }
}
