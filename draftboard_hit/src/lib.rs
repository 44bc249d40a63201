// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draftboard Hit: geometric hit-testing for diagram shapes.
//!
//! Shapes are plain data behind the [`Shape`] trait. How a shape is hit is
//! decided by a [`BoundsProvider`] looked up by the shape's [`ShapeKind`] in a
//! [`BoundsRegistry`], so new kinds or new picking strategies can be added
//! without touching the shape types.
//!
//! [`HitTest`] answers three questions about a slice of shapes:
//!
//! - [`try_to_get_point`](HitTest::try_to_get_point): which connection point
//!   is under the cursor?
//! - [`try_to_get_shape`](HitTest::try_to_get_shape): which shape is under the
//!   cursor?
//! - [`try_to_get_shapes`](HitTest::try_to_get_shapes): which shapes does a
//!   selection rectangle touch?
//!
//! Each query builds a [`draftboard_index::SpatialHashGrid`] over the shapes,
//! pre-filters with it and asks providers in slice order. The first match
//! wins. Shapes that cannot report usable bounds are still tested on every
//! query.
//!
//! # Example
//!
//! ```rust
//! use draftboard_hit::{HitTest, PointsUnsupported, Shape, ShapeKind};
//! use kurbo::Point;
//!
//! struct Segment(Point, Point);
//!
//! impl Shape for Segment {
//!     fn kind(&self) -> ShapeKind {
//!         ShapeKind::Line
//!     }
//!     fn get_points(&self, out: &mut Vec<Point>) -> Result<(), PointsUnsupported> {
//!         out.extend([self.0, self.1]);
//!         Ok(())
//!     }
//! }
//!
//! let shapes = [
//!     Segment(Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
//!     Segment(Point::new(0.0, 50.0), Point::new(100.0, 50.0)),
//! ];
//! let hit_test = HitTest::with_defaults();
//!
//! let hit = hit_test.try_to_get_shape(&shapes, Point::new(40.0, 48.0), 3.0, 1.0);
//! assert!(hit.is_some_and(|s| core::ptr::eq(s, &shapes[1])));
//!
//! let end = hit_test
//!     .try_to_get_point(&shapes, Point::new(99.0, 1.0), 3.0, 1.0)
//!     .expect("end point is within radius");
//! assert_eq!(end.position, Point::new(100.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod geom;
mod provider;
mod registry;
mod shape;

pub use bounds::default_providers;
pub use hit_test::{HitTest, HitTestConfig, ShapeSet};
pub use provider::{
    BoundsProvider, collect_points, connection_points, effective_radius, nearest_point,
};
pub use registry::{BoundsRegistry, RegistryError};
pub use shape::{PointHit, PointSlot, PointsUnsupported, Shape, ShapeKind, ShapeState};

pub use draftboard_index::GridConfig;
