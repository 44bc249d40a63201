// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::input::{EditingHooks, Modifiers, PointerButton, ViewObserver};
use crate::{ViewTransform, ViewportConfig};

/// What the viewport is doing with pointer input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ViewportMode {
    /// Pointer moves go to the editing hooks.
    #[default]
    Idle,
    /// Pointer moves drag the view.
    Panning {
        /// Device point where the pan started.
        drag_start: Point,
        /// Pan offset when the pan started.
        origin_pan: Vec2,
    },
}

/// Pan and zoom state of a diagram view, driven by pointer and wheel events.
///
/// The zoom always stays within `[min_zoom, max_zoom]`: a change that would
/// leave that range is rejected and leaves the state untouched. Every change
/// that is applied is pushed to the attached [`ViewObserver`], if any.
pub struct ViewportState {
    config: ViewportConfig,
    transform: ViewTransform,
    mode: ViewportMode,
    observer: Option<Box<dyn ViewObserver>>,
}

impl fmt::Debug for ViewportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportState")
            .field("config", &self.config)
            .field("transform", &self.transform)
            .field("mode", &self.mode)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl ViewportState {
    /// Creates an idle viewport at zoom 1 with no pan.
    ///
    /// Fields of `config` that the setters would reject keep their
    /// [default](ViewportConfig::default) values.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        let mut state = Self {
            config: ViewportConfig::default(),
            transform: ViewTransform::IDENTITY,
            mode: ViewportMode::Idle,
            observer: None,
        };
        state.set_zoom_limits(config.min_zoom, config.max_zoom);
        state.set_zoom_speed(config.zoom_speed);
        state.set_fit_epsilon(config.fit_epsilon);
        state
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// The current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    /// The current pan offset in device units.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.transform.pan
    }

    /// The current input mode.
    #[must_use]
    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Whether a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.mode, ViewportMode::Panning { .. })
    }

    /// Converts a device point to model space.
    #[must_use]
    pub fn to_model(&self, device: Point) -> Point {
        self.transform.to_model(device)
    }

    /// Converts a model point to device space.
    #[must_use]
    pub fn to_device(&self, model: Point) -> Point {
        self.transform.to_device(model)
    }

    /// Attaches the renderer, returning the previous one.
    pub fn attach_observer(
        &mut self,
        observer: Box<dyn ViewObserver>,
    ) -> Option<Box<dyn ViewObserver>> {
        self.observer.replace(observer)
    }

    /// Detaches and returns the renderer. Later changes notify nobody.
    pub fn detach_observer(&mut self) -> Option<Box<dyn ViewObserver>> {
        self.observer.take()
    }

    /// Sets the zoom range, normalizing it so `min <= max`.
    ///
    /// Non-finite or non-positive bounds are ignored. The current zoom is
    /// clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let valid = |z: f64| z.is_finite() && z > 0.0;
        if !valid(min_zoom) || !valid(max_zoom) {
            tracing::debug!(min_zoom, max_zoom, "ignoring invalid zoom limits");
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.config.min_zoom = min_zoom;
        self.config.max_zoom = max_zoom;
        let clamped = self.transform.zoom.clamp(min_zoom, max_zoom);
        if clamped != self.transform.zoom {
            self.transform.zoom = clamped;
            self.notify();
        }
    }

    /// Sets the wheel step divisor. Non-finite or non-positive values are
    /// ignored.
    pub fn set_zoom_speed(&mut self, zoom_speed: f64) {
        if zoom_speed.is_finite() && zoom_speed > 0.0 {
            self.config.zoom_speed = zoom_speed;
        } else {
            tracing::debug!(zoom_speed, "ignoring invalid zoom speed");
        }
    }

    /// Sets the margin subtracted by [`auto_fit`](Self::auto_fit). Non-finite
    /// or negative values are ignored.
    pub fn set_fit_epsilon(&mut self, fit_epsilon: f64) {
        if fit_epsilon.is_finite() && fit_epsilon >= 0.0 {
            self.config.fit_epsilon = fit_epsilon;
        } else {
            tracing::debug!(fit_epsilon, "ignoring invalid fit epsilon");
        }
    }

    /// Handles a pointer press at `device`.
    ///
    /// Primary presses go to [`EditingHooks::begin`] in model space when the
    /// hooks allow it; secondary presses start a pan. Returns whether the
    /// event was consumed.
    pub fn pointer_pressed<H: EditingHooks + ?Sized>(
        &mut self,
        hooks: &mut H,
        button: PointerButton,
        device: Point,
        modifiers: Modifiers,
    ) -> bool {
        match button {
            PointerButton::Primary => {
                let model = self.to_model(device);
                if hooks.is_begin_available(model, modifiers) {
                    hooks.begin(model, modifiers);
                    true
                } else {
                    false
                }
            }
            PointerButton::Secondary => {
                self.start_pan(device);
                true
            }
            PointerButton::Auxiliary => false,
        }
    }

    /// Handles a pointer release at `device`.
    ///
    /// Primary releases go to [`EditingHooks::end`] when the hooks allow it;
    /// secondary releases end a pan. Returns whether the event was consumed.
    pub fn pointer_released<H: EditingHooks + ?Sized>(
        &mut self,
        hooks: &mut H,
        button: PointerButton,
        device: Point,
        modifiers: Modifiers,
    ) -> bool {
        match button {
            PointerButton::Primary => {
                let model = self.to_model(device);
                if hooks.is_end_available(model, modifiers) {
                    hooks.end(model, modifiers);
                    true
                } else {
                    false
                }
            }
            PointerButton::Secondary => self.end_pan(),
            PointerButton::Auxiliary => false,
        }
    }

    /// Handles a pointer move to `device`.
    ///
    /// While panning this drags the view; otherwise the model point goes to
    /// [`EditingHooks::moved`] when the hooks allow it.
    pub fn pointer_moved<H: EditingHooks + ?Sized>(
        &mut self,
        hooks: &mut H,
        device: Point,
        modifiers: Modifiers,
    ) -> bool {
        if self.pan_to(device) {
            return true;
        }
        let model = self.to_model(device);
        if hooks.is_move_available(model, modifiers) {
            hooks.moved(model, modifiers);
            true
        } else {
            false
        }
    }

    /// Handles a wheel notch at `device`.
    ///
    /// A positive `delta` zooms in by `zoom / zoom_speed`, a negative one
    /// zooms out by the same amount. The model point under the cursor stays
    /// put. A step that would leave the zoom range is dropped without any
    /// notification.
    pub fn wheel(&mut self, delta: f64, device: Point) -> bool {
        if delta == 0.0 || !delta.is_finite() {
            return false;
        }
        let zoom = self.transform.zoom;
        let step = zoom / self.config.zoom_speed;
        let proposed = if delta > 0.0 { zoom + step } else { zoom - step };
        self.zoom_about_device_point(proposed, device)
    }

    /// Sets the zoom to `new_zoom` while keeping `model_anchor` at the same
    /// device position.
    ///
    /// Returns `false` and changes nothing if `new_zoom` is outside the zoom
    /// range.
    pub fn zoom_to(&mut self, new_zoom: f64, model_anchor: Point) -> bool {
        if !self.config.accepts_zoom(new_zoom) {
            tracing::trace!(
                new_zoom,
                min_zoom = self.config.min_zoom,
                max_zoom = self.config.max_zoom,
                "rejected zoom outside limits"
            );
            return false;
        }
        let device = self.to_device(model_anchor).to_vec2();
        self.transform.zoom = new_zoom;
        self.transform.pan = device - model_anchor.to_vec2() * new_zoom;
        self.notify();
        true
    }

    /// Like [`zoom_to`](Self::zoom_to) with the anchor given in device space.
    pub fn zoom_about_device_point(&mut self, new_zoom: f64, device_anchor: Point) -> bool {
        let model_anchor = self.to_model(device_anchor);
        self.zoom_to(new_zoom, model_anchor)
    }

    /// Starts panning from `device`.
    pub fn start_pan(&mut self, device: Point) {
        tracing::debug!(x = device.x, y = device.y, "pan started");
        self.mode = ViewportMode::Panning {
            drag_start: device,
            origin_pan: self.transform.pan,
        };
    }

    /// Drags the view so the point grabbed by [`start_pan`](Self::start_pan)
    /// follows `device`. Returns `false` when not panning.
    pub fn pan_to(&mut self, device: Point) -> bool {
        let ViewportMode::Panning {
            drag_start,
            origin_pan,
        } = self.mode
        else {
            return false;
        };
        self.transform.pan = origin_pan - (drag_start - device);
        self.notify();
        true
    }

    /// Stops panning. Returns `false` if no pan was in progress.
    pub fn end_pan(&mut self) -> bool {
        if !self.is_panning() {
            return false;
        }
        tracing::debug!("pan ended");
        self.mode = ViewportMode::Idle;
        true
    }

    /// Returns to zoom 1 with no pan.
    ///
    /// A zoom of 1 outside the configured range is clamped into it.
    pub fn reset(&mut self) {
        self.transform = ViewTransform {
            zoom: 1.0_f64.clamp(self.config.min_zoom, self.config.max_zoom),
            pan: Vec2::ZERO,
        };
        self.notify();
    }

    /// Fits content of the given size inside the view, centred, leaving a
    /// margin of [`fit_epsilon`](ViewportConfig::fit_epsilon) in zoom.
    ///
    /// Returns `false` for empty or non-finite sizes.
    pub fn auto_fit(
        &mut self,
        view_width: f64,
        view_height: f64,
        content_width: f64,
        content_height: f64,
    ) -> bool {
        let Some((sx, sy)) = ratios(view_width, view_height, content_width, content_height) else {
            return false;
        };
        let zoom = sx.min(sy) - self.config.fit_epsilon;
        self.place(zoom, view_width, view_height, content_width, content_height);
        true
    }

    /// Shows the content at zoom 1, centred.
    ///
    /// Returns `false` for empty or non-finite sizes.
    pub fn center(
        &mut self,
        view_width: f64,
        view_height: f64,
        content_width: f64,
        content_height: f64,
    ) -> bool {
        if ratios(view_width, view_height, content_width, content_height).is_none() {
            return false;
        }
        self.place(1.0, view_width, view_height, content_width, content_height);
        true
    }

    /// Scales the content uniformly until it covers the view, centred.
    ///
    /// Returns `false` for empty or non-finite sizes.
    pub fn fill(
        &mut self,
        view_width: f64,
        view_height: f64,
        content_width: f64,
        content_height: f64,
    ) -> bool {
        let Some((sx, sy)) = ratios(view_width, view_height, content_width, content_height) else {
            return false;
        };
        self.place(sx.max(sy), view_width, view_height, content_width, content_height);
        true
    }

    fn place(&mut self, zoom: f64, vw: f64, vh: f64, cw: f64, ch: f64) {
        let zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        self.transform = ViewTransform {
            zoom,
            pan: Vec2::new((vw - cw * zoom) / 2.0, (vh - ch * zoom) / 2.0),
        };
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.transform_changed(self.transform);
            observer.invalidate();
        }
    }
}

/// View-to-content size ratios, or `None` if any size is unusable.
fn ratios(vw: f64, vh: f64, cw: f64, ch: f64) -> Option<(f64, f64)> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    (usable(vw) && usable(vh) && usable(cw) && usable(ch)).then(|| (vw / cw, vh / ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoHooks;

    #[test]
    fn new_clamps_config() {
        let vp = ViewportState::new(ViewportConfig {
            min_zoom: 4.0,
            max_zoom: 2.0,
            ..ViewportConfig::default()
        });
        assert_eq!(vp.config().min_zoom, 2.0);
        assert_eq!(vp.config().max_zoom, 4.0);
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn new_keeps_defaults_for_rejected_fields() {
        let defaults = ViewportConfig::default();
        let vp = ViewportState::new(ViewportConfig {
            min_zoom: -1.0,
            max_zoom: f64::NAN,
            zoom_speed: -4.0,
            fit_epsilon: f64::NAN,
        });
        assert_eq!(*vp.config(), defaults);

        let vp = ViewportState::new(ViewportConfig {
            max_zoom: f64::INFINITY,
            zoom_speed: 0.0,
            fit_epsilon: -0.5,
            ..defaults
        });
        assert_eq!(*vp.config(), defaults);
    }

    #[test]
    fn nan_max_zoom_does_not_break_reset_or_fit() {
        let mut vp = ViewportState::new(ViewportConfig {
            max_zoom: f64::NAN,
            ..ViewportConfig::default()
        });
        vp.reset();
        assert_eq!(vp.zoom(), 1.0);
        assert!(vp.auto_fit(800.0, 600.0, 400.0, 300.0));
        assert!((vp.zoom() - 1.999).abs() < 1e-12);
    }

    #[test]
    fn negative_zoom_speed_still_zooms_in_on_positive_delta() {
        let mut vp = ViewportState::new(ViewportConfig {
            zoom_speed: -4.0,
            ..ViewportConfig::default()
        });
        assert!(vp.wheel(1.0, Point::ZERO));
        assert!(vp.zoom() > 1.0);
    }

    #[test]
    fn nan_fit_epsilon_keeps_auto_fit_finite() {
        let mut vp = ViewportState::new(ViewportConfig {
            fit_epsilon: f64::NAN,
            ..ViewportConfig::default()
        });
        vp.set_fit_epsilon(f64::INFINITY);
        assert_eq!(vp.config().fit_epsilon, ViewportConfig::default().fit_epsilon);
        assert!(vp.auto_fit(800.0, 600.0, 400.0, 300.0));
        assert!(vp.zoom().is_finite());
        assert!(vp.config().accepts_zoom(vp.zoom()));
        vp.set_fit_epsilon(0.0);
        assert!(vp.auto_fit(800.0, 600.0, 400.0, 300.0));
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn secondary_button_toggles_panning() {
        let mut vp = ViewportState::default();
        let mut hooks = NoHooks;
        assert!(!vp.is_panning());
        assert!(vp.pointer_pressed(
            &mut hooks,
            PointerButton::Secondary,
            Point::new(5.0, 5.0),
            Modifiers::empty()
        ));
        assert!(vp.is_panning());
        assert!(vp.pointer_released(
            &mut hooks,
            PointerButton::Secondary,
            Point::new(5.0, 5.0),
            Modifiers::empty()
        ));
        assert_eq!(vp.mode(), ViewportMode::Idle);
        assert!(!vp.end_pan());
    }

    #[test]
    fn wheel_steps_are_multiplicative() {
        let mut vp = ViewportState::default();
        assert!(vp.wheel(1.0, Point::ZERO));
        assert!((vp.zoom() - 4.0 / 3.0).abs() < 1e-12);
        assert!(vp.wheel(-1.0, Point::ZERO));
        assert!((vp.zoom() - 8.0 / 9.0).abs() < 1e-12);
        assert!(!vp.wheel(0.0, Point::ZERO));
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        let mut vp = ViewportState::default();
        assert!(!vp.auto_fit(800.0, 600.0, 0.0, 300.0));
        assert!(!vp.fill(f64::NAN, 600.0, 400.0, 300.0));
        assert!(!vp.center(800.0, -1.0, 400.0, 300.0));
        assert_eq!(vp.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn fill_and_center() {
        let mut vp = ViewportState::default();
        assert!(vp.fill(800.0, 600.0, 400.0, 100.0));
        assert_eq!(vp.zoom(), 6.0);
        assert_eq!(vp.pan(), Vec2::new(-800.0, 0.0));

        assert!(vp.center(800.0, 600.0, 400.0, 100.0));
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.pan(), Vec2::new(200.0, 250.0));
    }

    #[test]
    fn shrinking_limits_clamps_zoom() {
        let mut vp = ViewportState::default();
        vp.set_zoom_limits(2.0, 8.0);
        assert_eq!(vp.zoom(), 2.0);
        vp.set_zoom_limits(f64::NAN, 8.0);
        assert_eq!(vp.config().min_zoom, 2.0);
    }
}
