// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A plain data shape for provider unit tests.

use alloc::vec::Vec;

use kurbo::Point;

use crate::registry::BoundsRegistry;
use crate::shape::{PointsUnsupported, Shape, ShapeKind, ShapeState};

#[derive(Clone, Debug)]
pub(crate) struct TestShape {
    pub(crate) kind: ShapeKind,
    pub(crate) points: Vec<Point>,
    pub(crate) state: ShapeState,
    pub(crate) connectors: Vec<Point>,
    pub(crate) children: Vec<TestShape>,
}

impl TestShape {
    pub(crate) fn new(kind: ShapeKind, points: &[(f64, f64)]) -> Self {
        Self {
            kind,
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            state: ShapeState::default(),
            connectors: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn group(children: Vec<Self>) -> Self {
        Self {
            children,
            ..Self::new(ShapeKind::Group, &[])
        }
    }

    pub(crate) fn sized(mut self) -> Self {
        self.state |= ShapeState::SIZE;
        self
    }

    pub(crate) fn with_connector(mut self, x: f64, y: f64) -> Self {
        self.connectors.push(Point::new(x, y));
        self
    }
}

impl Shape for TestShape {
    fn kind(&self) -> ShapeKind {
        self.kind
    }

    fn state(&self) -> ShapeState {
        self.state
    }

    fn get_points(&self, out: &mut Vec<Point>) -> Result<(), PointsUnsupported> {
        if self.kind == ShapeKind::Group {
            for child in &self.children {
                child.get_points(out)?;
            }
        } else {
            out.extend_from_slice(&self.points);
        }
        Ok(())
    }

    fn connectors(&self) -> &[Point] {
        &self.connectors
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

pub(crate) fn registry() -> BoundsRegistry<TestShape> {
    BoundsRegistry::with_defaults()
}
