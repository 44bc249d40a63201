// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two collaborators a [`ViewportState`](crate::ViewportState) talks to:
//! the editing tool layer ([`EditingHooks`]) and the renderer
//! ([`ViewObserver`]).

use kurbo::Point;

use crate::ViewTransform;

/// Pointer buttons the viewport distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button. Forwarded to the editing hooks.
    Primary,
    /// Usually the right button. Drives panning.
    Secondary,
    /// Usually the middle button. Ignored.
    Auxiliary,
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 1 << 0;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt or Option.
        const ALT     = 1 << 2;
        /// Meta, Command or the Windows key.
        const META    = 1 << 3;
    }
}

/// The editing tool layer.
///
/// All points are in model space. Each action is gated by a predicate so the
/// tool layer can decide what a click currently means; the predicates accept
/// everything by default.
pub trait EditingHooks {
    /// Whether a primary press at `point` should start an interaction.
    fn is_begin_available(&mut self, point: Point, modifiers: Modifiers) -> bool {
        let _ = (point, modifiers);
        true
    }

    /// A primary press started an interaction.
    fn begin(&mut self, point: Point, modifiers: Modifiers);

    /// Whether a primary release at `point` should end an interaction.
    fn is_end_available(&mut self, point: Point, modifiers: Modifiers) -> bool {
        let _ = (point, modifiers);
        true
    }

    /// A primary release ended an interaction.
    fn end(&mut self, point: Point, modifiers: Modifiers);

    /// Whether a pointer move at `point` should be forwarded.
    fn is_move_available(&mut self, point: Point, modifiers: Modifiers) -> bool {
        let _ = (point, modifiers);
        true
    }

    /// The pointer moved while not panning.
    fn moved(&mut self, point: Point, modifiers: Modifiers);
}

/// The renderer side of a viewport.
///
/// The viewport owns the authoritative transform and pushes every change
/// here, followed by a repaint request.
pub trait ViewObserver {
    /// The transform changed.
    fn transform_changed(&mut self, transform: ViewTransform);

    /// The view should be repainted.
    fn invalidate(&mut self);
}

/// Hooks that accept and ignore everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl EditingHooks for NoHooks {
    fn begin(&mut self, _point: Point, _modifiers: Modifiers) {}

    fn end(&mut self, _point: Point, _modifiers: Modifiers) {}

    fn moved(&mut self, _point: Point, _modifiers: Modifiers) {}
}
