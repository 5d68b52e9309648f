//! Per-dispatch event context.

/// Context handed to [`Widget::event`](crate::Widget::event).
///
/// Widgets use it to report that they consumed an event (so ancestors do not
/// see it) and to ask the host for a repaint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventContext {
    handled: bool,
    paint_requested: bool,
}

impl EventContext {
    /// Create a fresh context for one event dispatch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handled: false,
            paint_requested: false,
        }
    }

    /// Mark the event as consumed.
    pub fn set_handled(&mut self) {
        self.handled = true;
    }

    /// Whether a widget consumed the event.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        self.handled
    }

    /// Ask the host to repaint after this dispatch.
    pub fn request_paint(&mut self) {
        self.paint_requested = true;
    }

    /// Whether a repaint was requested during this dispatch.
    #[must_use]
    pub const fn paint_requested(&self) -> bool {
        self.paint_requested
    }
}
