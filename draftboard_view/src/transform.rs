// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// A uniform zoom followed by a pan, mapping model space to device space.
///
/// `device = model * zoom + pan`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor.
    pub zoom: f64,
    /// Device-space offset applied after scaling.
    pub pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// Zoom 1, no pan.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        pan: Vec2::ZERO,
    };

    /// Converts a device point to model space: `(p - pan) / zoom`.
    #[must_use]
    pub fn to_model(&self, device: Point) -> Point {
        Point::new(
            (device.x - self.pan.x) / self.zoom,
            (device.y - self.pan.y) / self.zoom,
        )
    }

    /// Converts a model point to device space: `p * zoom + pan`.
    #[must_use]
    pub fn to_device(&self, model: Point) -> Point {
        Point::new(
            model.x * self.zoom + self.pan.x,
            model.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a device rectangle to model space.
    #[must_use]
    pub fn rect_to_model(&self, device: Rect) -> Rect {
        Rect::from_points(
            self.to_model(device.origin()),
            self.to_model(Point::new(device.x1, device.y1)),
        )
    }

    /// The model-to-device mapping as an affine transform, for renderers.
    #[must_use]
    pub fn model_to_device(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// The device-to-model mapping as an affine transform.
    #[must_use]
    pub fn device_to_model(&self) -> Affine {
        self.model_to_device().inverse()
    }
}
