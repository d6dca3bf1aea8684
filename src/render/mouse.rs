//! Pointer hit-testing and input routing.
//!
//! Mouse input arrives between frames, so it is resolved against the
//! windows and interactions recorded by the most recently rendered
//! [`DisplayContext`].
//!
//! # Routing rules
//! 1. The topmost window under the pointer, by `(z desc, order desc)`,
//!    scopes the lookup. With no windows at all the root layer is in scope.
//!    With windows present but none under the pointer, nothing is in scope.
//! 2. Only interactions tagged with the scoped window are eligible.
//! 3. Among eligible regions under the pointer, the highest `z` wins; at
//!    equal `z` the earliest declared region wins.

use super::context::DisplayContext;
use super::message::Message;
use super::ops::{rect_contains, InteractionKind, InteractionOp, WindowId, WindowOp};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::cmp::Reverse;
use tracing::trace;

/// Lines scrolled per wheel notch.
pub const WHEEL_DELTA: i32 = 3;

/// Outcome of routing one pointer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseResolution<M> {
    /// An interaction fired and produced this message.
    Message(M),
    /// No message, but the pointer is over a window. Callers use this to
    /// keep an in-progress drag alive.
    Captured,
    /// Nothing under the pointer reacted.
    Ignored,
}

impl<M> MouseResolution<M> {
    /// Whether the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, MouseResolution::Ignored)
    }

    /// Borrow the message, if one fired.
    pub fn message(&self) -> Option<&M> {
        match self {
            MouseResolution::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Take the message, if one fired.
    pub fn into_message(self) -> Option<M> {
        match self {
            MouseResolution::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Split into `(message, handled)`.
    pub fn into_parts(self) -> (Option<M>, bool) {
        let handled = self.is_handled();
        (self.into_message(), handled)
    }
}

impl<M> DisplayContext<M> {
    /// Topmost window containing `(x, y)`.
    ///
    /// Ties at equal `z` go to the window opened last.
    pub fn window_at(&self, x: u16, y: u16) -> Option<WindowId> {
        self.topmost_window(x, y).map(|w| w.id)
    }

    fn topmost_window(&self, x: u16, y: u16) -> Option<&WindowOp> {
        self.windows
            .iter()
            .filter(|w| rect_contains(w.rect, x, y))
            .max_by_key(|w| (w.z, w.order))
    }

    /// Window whose interactions may fire at `(x, y)`, if any.
    fn routing_scope(&self, x: u16, y: u16) -> Option<WindowId> {
        match self.topmost_window(x, y) {
            Some(window) => Some(window.id),
            None if self.windows.is_empty() => Some(WindowId::ROOT),
            None => None,
        }
    }

    fn best_match(
        &self,
        scope: WindowId,
        kind: InteractionKind,
        x: u16,
        y: u16,
    ) -> Option<&InteractionOp<M>> {
        self.interactions
            .iter()
            .filter(|op| op.window == scope && op.kinds.contains(kind))
            .filter(|op| rect_contains(op.rect, x, y))
            .min_by_key(|op| (Reverse(op.z), op.order))
    }

    /// Message of the topmost eligible Hover region under `(x, y)`.
    pub fn hover_at(&self, x: u16, y: u16) -> Option<&M> {
        let scope = self.routing_scope(x, y)?;
        self.best_match(scope, InteractionKind::HOVER, x, y)
            .map(|op| &op.message)
    }
}

impl<M: Message> DisplayContext<M> {
    /// Resolve a pointer event against this frame's recorded state.
    ///
    /// - Left press: the best Drag region gets the press position stamped
    ///   in; failing that, the best Click region's message is returned as-is.
    /// - Wheel: the best Scroll region gets `±WHEEL_DELTA` stamped in.
    /// - Anything else (release, motion, other buttons) only reports
    ///   whether the pointer is over a window.
    pub fn process_mouse_event(&self, event: MouseEvent) -> MouseResolution<M> {
        let (x, y) = (event.column, event.row);
        let resolution = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.resolve_press(x, y),
            MouseEventKind::ScrollUp => self.resolve_wheel(x, y, -WHEEL_DELTA, false),
            MouseEventKind::ScrollDown => self.resolve_wheel(x, y, WHEEL_DELTA, false),
            MouseEventKind::ScrollLeft => self.resolve_wheel(x, y, -WHEEL_DELTA, true),
            MouseEventKind::ScrollRight => self.resolve_wheel(x, y, WHEEL_DELTA, true),
            _ => {
                if self.topmost_window(x, y).is_some() {
                    MouseResolution::Captured
                } else {
                    MouseResolution::Ignored
                }
            }
        };
        trace!(
            x,
            y,
            kind = ?event.kind,
            handled = resolution.is_handled(),
            "mouse event resolved"
        );
        resolution
    }

    fn resolve_press(&self, x: u16, y: u16) -> MouseResolution<M> {
        let Some(scope) = self.routing_scope(x, y) else {
            return MouseResolution::Ignored;
        };
        if let Some(op) = self.best_match(scope, InteractionKind::DRAG, x, y) {
            return op
                .message
                .with_drag_start(x, y)
                .map_or(MouseResolution::Ignored, MouseResolution::Message);
        }
        self.best_match(scope, InteractionKind::CLICK, x, y)
            .map_or(MouseResolution::Ignored, |op| {
                MouseResolution::Message(op.message.clone())
            })
    }

    fn resolve_wheel(&self, x: u16, y: u16, delta: i32, horizontal: bool) -> MouseResolution<M> {
        let Some(scope) = self.routing_scope(x, y) else {
            return MouseResolution::Ignored;
        };
        self.best_match(scope, InteractionKind::SCROLL, x, y)
            .and_then(|op| op.message.with_scroll_delta(delta, horizontal))
            .map_or(MouseResolution::Ignored, MouseResolution::Message)
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod tests;
