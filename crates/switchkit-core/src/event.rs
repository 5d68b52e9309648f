//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse wheel scrolled
    Scroll {
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta
        delta_y: f32,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
    /// Window resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
    // Touch events
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
        /// Touch pressure (0.0 to 1.0)
        pressure: f32,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
        /// Touch pressure
        pressure: f32,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., palm rejection, parent took over the gesture)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
}

impl Event {
    /// Touch start for the primary touch at `position`.
    #[must_use]
    pub const fn touch_start(position: Point) -> Self {
        Self::TouchStart {
            id: TouchId(0),
            position,
            pressure: 1.0,
        }
    }

    /// Touch move for the primary touch at `position`.
    #[must_use]
    pub const fn touch_move(position: Point) -> Self {
        Self::TouchMove {
            id: TouchId(0),
            position,
            pressure: 1.0,
        }
    }

    /// Touch end for the primary touch at `position`.
    #[must_use]
    pub const fn touch_end(position: Point) -> Self {
        Self::TouchEnd {
            id: TouchId(0),
            position,
        }
    }

    /// Touch cancel for the primary touch.
    #[must_use]
    pub const fn touch_cancel() -> Self {
        Self::TouchCancel { id: TouchId(0) }
    }

    /// Position carried by the event, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchMove { position, .. }
            | Self::TouchEnd { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_constructors_use_primary_touch() {
        let p = Point::new(60.0, 10.0);
        assert_eq!(
            Event::touch_start(p),
            Event::TouchStart {
                id: TouchId(0),
                position: p,
                pressure: 1.0
            }
        );
        assert_eq!(Event::touch_cancel(), Event::TouchCancel { id: TouchId(0) });
    }

    #[test]
    fn test_event_position() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(Event::touch_move(p).position(), Some(p));
        assert_eq!(Event::touch_end(p).position(), Some(p));
        assert_eq!(
            Event::MouseDown {
                position: p,
                button: MouseButton::Left
            }
            .position(),
            Some(p)
        );
        assert_eq!(Event::touch_cancel().position(), None);
        assert_eq!(Event::FocusIn.position(), None);
    }

    #[test]
    fn test_event_serde_json() {
        let event = Event::touch_end(Point::new(90.0, 20.0));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("TouchEnd"));
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_touch_id_default() {
        assert_eq!(TouchId::default(), TouchId(0));
    }
}
