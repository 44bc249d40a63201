// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in [`BoundsProvider`] implementations, one per [`ShapeKind`].
//!
//! Each provider reads the defining points of a shape according to the
//! conventions documented on [`Shape`], so these work with any shape type that
//! follows them.
//!
//! [`ShapeKind`]: crate::ShapeKind
//! [`Shape`]: crate::Shape

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::provider::BoundsProvider;
use crate::shape::Shape;

mod bezier;
mod ellipse;
mod group;
mod line;
mod path;
mod point;
mod rect_like;

pub use bezier::{CubicBezierBounds, QuadraticBezierBounds};
pub use ellipse::{ArcBounds, EllipseBounds};
pub use group::GroupBounds;
pub use line::LineBounds;
pub use path::PathBounds;
pub use point::PointBounds;
pub use rect_like::{ImageBounds, RectangleBounds, TextBounds};

/// One instance of every built-in provider.
pub fn default_providers<S: Shape>() -> Vec<Box<dyn BoundsProvider<S>>> {
    vec![
        Box::new(PointBounds),
        Box::new(LineBounds),
        Box::new(RectangleBounds),
        Box::new(EllipseBounds),
        Box::new(ArcBounds),
        Box::new(CubicBezierBounds),
        Box::new(QuadraticBezierBounds),
        Box::new(PathBounds),
        Box::new(TextBounds),
        Box::new(ImageBounds),
        Box::new(GroupBounds),
    ]
}

#[cfg(test)]
pub(crate) mod testing;
