// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shape abstraction consumed by hit-testing.
//!
//! The engine never owns shapes and never draws them. A shape only has to name
//! its [`ShapeKind`] (the key used to find a [`BoundsProvider`]), report its
//! [`ShapeState`], and enumerate its defining points.
//!
//! [`BoundsProvider`]: crate::BoundsProvider

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

/// Dispatch key identifying the geometric form of a shape.
///
/// Each kind maps to exactly one [`BoundsProvider`](crate::BoundsProvider) in a
/// [`BoundsRegistry`](crate::BoundsRegistry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// A single point, usually a connector.
    Point,
    /// A straight segment `[start, end]`.
    Line,
    /// An axis-aligned rectangle given by two opposite corners.
    Rectangle,
    /// An ellipse inscribed in the rectangle given by two opposite corners.
    Ellipse,
    /// An elliptical arc: two bounding corners followed by start and end points.
    Arc,
    /// A cubic Bézier `[p1, c1, c2, p2]`.
    CubicBezier,
    /// A quadratic Bézier `[p1, c, p2]`.
    QuadraticBezier,
    /// A path hit-tested through the convex hull of its points.
    Path,
    /// A text box given by two opposite corners.
    Text,
    /// An image given by two opposite corners.
    Image,
    /// A group whose extent is that of its children.
    Group,
    /// An application-defined kind.
    Custom(u32),
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(id) => write!(f, "Custom({id})"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

bitflags::bitflags! {
    /// Per-shape state relevant to hit-testing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ShapeState: u8 {
        /// The shape is drawn.
        const VISIBLE = 1 << 0;
        /// The shape cannot be edited.
        const LOCKED  = 1 << 1;
        /// The shape keeps a constant on-screen size, so hit radii are divided
        /// by the current zoom.
        const SIZE    = 1 << 2;
    }
}

impl Default for ShapeState {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Returned by [`Shape::get_points`] for shapes that have no point enumeration.
///
/// This is an expected outcome for abstract shapes. Such shapes are still
/// hit-tested, through the fallback bucket of the spatial index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointsUnsupported;

impl fmt::Display for PointsUnsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("shape does not enumerate its points")
    }
}

impl core::error::Error for PointsUnsupported {}

/// A shape that can be hit-tested.
///
/// Defining points follow these conventions for the built-in kinds:
///
/// | Kind | Points |
/// |---|---|
/// | `Point` | `[p]` |
/// | `Line` | `[start, end]` |
/// | `Rectangle`, `Ellipse`, `Text`, `Image` | `[corner_a, corner_b]` |
/// | `Arc` | `[corner_a, corner_b, start, end]` |
/// | `CubicBezier` | `[p1, c1, c2, p2]` |
/// | `QuadraticBezier` | `[p1, c, p2]` |
/// | `Path` | every point |
/// | `Group` | the children's points, concatenated |
pub trait Shape: Sized {
    /// The kind used to look up this shape's provider.
    fn kind(&self) -> ShapeKind;

    /// Current state flags.
    fn state(&self) -> ShapeState {
        ShapeState::default()
    }

    /// Appends this shape's defining points to `out`.
    fn get_points(&self, out: &mut Vec<Point>) -> Result<(), PointsUnsupported>;

    /// Extra connection points beyond the defining points.
    fn connectors(&self) -> &[Point] {
        &[]
    }

    /// Members of a group shape.
    fn children(&self) -> &[Self] {
        &[]
    }
}

/// Which point of a shape a [`PointHit`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointSlot {
    /// Index into the shape's defining points.
    Defining(usize),
    /// Index into [`Shape::connectors`].
    Connector(usize),
}

/// A connection point found by a point query.
pub struct PointHit<'a, S> {
    /// The shape owning the point. For groups this is the child that owns it.
    pub shape: &'a S,
    /// Which of the shape's points was hit.
    pub slot: PointSlot,
    /// Position of the point in model space.
    pub position: Point,
}

impl<S> Clone for PointHit<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for PointHit<'_, S> {}

impl<S: fmt::Debug> fmt::Debug for PointHit<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointHit")
            .field("shape", self.shape)
            .field("slot", &self.slot)
            .field("position", &self.position)
            .finish()
    }
}
