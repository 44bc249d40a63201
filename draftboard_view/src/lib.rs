// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draftboard View: pan and zoom state for a diagram canvas.
//!
//! [`ViewportState`] is a small event-driven state machine with two modes:
//!
//! - **Idle**: primary presses and releases, and pointer moves, are converted
//!   to model space and forwarded to the tool layer's [`EditingHooks`].
//! - **Panning**: entered on a secondary press and left on its release. Pointer
//!   moves drag the view.
//!
//! Wheel events zoom multiplicatively about the cursor, so the model point
//! under the cursor stays fixed. Zoom changes that would leave the configured
//! range are rejected outright rather than clamped.
//!
//! The viewport owns the authoritative [`ViewTransform`] and pushes every
//! change to an optional [`ViewObserver`] (the renderer).
//!
//! # Example
//!
//! ```rust
//! use draftboard_view::{ViewportState, ViewportConfig};
//! use kurbo::Point;
//!
//! let mut view = ViewportState::new(ViewportConfig::default());
//! view.auto_fit(800.0, 600.0, 400.0, 300.0);
//!
//! let cursor = Point::new(300.0, 200.0);
//! let under_cursor = view.to_model(cursor);
//! assert!(view.wheel(1.0, cursor));
//! let after = view.to_device(under_cursor);
//! assert!((after - cursor).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod input;
mod transform;
mod viewport;

pub use config::ViewportConfig;
pub use input::{EditingHooks, Modifiers, NoHooks, PointerButton, ViewObserver};
pub use transform::ViewTransform;
pub use viewport::{ViewportMode, ViewportState};
