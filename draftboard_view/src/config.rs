// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Limits and tuning for a [`ViewportState`](crate::ViewportState).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Smallest allowed zoom factor.
    pub min_zoom: f64,
    /// Largest allowed zoom factor.
    pub max_zoom: f64,
    /// Divisor of the multiplicative wheel step: one notch changes the zoom
    /// by `zoom / zoom_speed`.
    pub zoom_speed: f64,
    /// Subtracted from the fitted zoom in
    /// [`auto_fit`](crate::ViewportState::auto_fit) so content edges stay
    /// clear of the view border.
    pub fit_epsilon: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.01,
            max_zoom: 1000.0,
            zoom_speed: 3.0,
            fit_epsilon: 0.001,
        }
    }
}

impl ViewportConfig {
    /// Whether `zoom` is a finite value inside `[min_zoom, max_zoom]`.
    pub fn accepts_zoom(&self, zoom: f64) -> bool {
        zoom.is_finite() && zoom > 0.0 && self.min_zoom <= zoom && zoom <= self.max_zoom
    }
}
