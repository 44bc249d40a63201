// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinds whose extent is the rectangle spanned by two corners.

use kurbo::{Point, Rect};

use crate::geom::{bounds_of, rect_contains, rects_overlap};
use crate::provider::{BoundsProvider, collect_points, effective_radius, try_get_defining_point};
use crate::registry::BoundsRegistry;
use crate::shape::{PointHit, Shape, ShapeKind};

fn corners_rect<S: Shape>(shape: &S) -> Option<Rect> {
    let points = collect_points(shape)?;
    bounds_of(&points[..points.len().min(2)])
}

fn contains<S: Shape>(shape: &S, target: Point, radius: f64, scale: f64) -> bool {
    let r = effective_radius(shape, radius, scale);
    corners_rect(shape).is_some_and(|b| rect_contains(b.inflate(r, r), target))
}

fn overlaps<S: Shape>(shape: &S, target: Rect) -> bool {
    corners_rect(shape).is_some_and(|b| rects_overlap(b, target))
}

macro_rules! rect_like_provider {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl<S: Shape> BoundsProvider<S> for $name {
            fn target_kind(&self) -> ShapeKind {
                ShapeKind::$kind
            }

            fn contains(
                &self,
                shape: &S,
                target: Point,
                radius: f64,
                scale: f64,
                _registry: &BoundsRegistry<S>,
            ) -> bool {
                contains(shape, target, radius, scale)
            }

            fn overlaps(
                &self,
                shape: &S,
                target: Rect,
                _radius: f64,
                _scale: f64,
                _registry: &BoundsRegistry<S>,
            ) -> bool {
                overlaps(shape, target)
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
    };
}

rect_like_provider!(
    /// Provider for [`ShapeKind::Rectangle`].
    RectangleBounds => Rectangle
);
rect_like_provider!(
    /// Provider for [`ShapeKind::Text`]: hit anywhere in the text box.
    TextBounds => Text
);
rect_like_provider!(
    /// Provider for [`ShapeKind::Image`]: hit anywhere in the image frame.
    ImageBounds => Image
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::testing::{TestShape, registry};
    use crate::shape::PointSlot;

    #[test]
    fn flipped_corners_are_normalized() {
        let reg = registry();
        let rect = TestShape::new(ShapeKind::Rectangle, &[(50.0, 40.0), (10.0, 0.0)]);
        assert!(RectangleBounds.contains(&rect, Point::new(30.0, 20.0), 0.0, 1.0, &reg));
        assert!(RectangleBounds.contains(&rect, Point::new(52.0, 20.0), 2.0, 1.0, &reg));
        assert!(!RectangleBounds.contains(&rect, Point::new(52.0, 20.0), 1.0, 1.0, &reg));
    }

    #[test]
    fn text_and_image_share_rect_semantics() {
        let reg = registry();
        let text = TestShape::new(ShapeKind::Text, &[(0.0, 0.0), (10.0, 10.0)]);
        let image = TestShape::new(ShapeKind::Image, &[(0.0, 0.0), (10.0, 10.0)]);
        let touching = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(TextBounds.overlaps(&text, touching, 0.0, 1.0, &reg));
        assert!(ImageBounds.overlaps(&image, touching, 0.0, 1.0, &reg));
        assert!(!ImageBounds.overlaps(&image, Rect::new(11.0, 0.0, 20.0, 5.0), 0.0, 1.0, &reg));
    }

    #[test]
    fn corners_are_connection_points() {
        let reg = registry();
        let rect = TestShape::new(ShapeKind::Rectangle, &[(0.0, 0.0), (10.0, 10.0)]);
        let hit = RectangleBounds
            .try_get_point(&rect, Point::new(9.0, 9.5), 2.0, 1.0, &reg)
            .unwrap();
        assert_eq!(hit.slot, PointSlot::Defining(1));
        assert!(
            RectangleBounds
                .try_get_point(&rect, Point::new(5.0, 5.0), 2.0, 1.0, &reg)
                .is_none()
        );
    }
}
