//! Transient on-screen notifications.
//!
//! Toasts are shown one at a time in the order they were posted. Each stays
//! visible for its [`ToastDuration`] of host time, advanced by
//! [`ToastQueue::tick`], and is then dropped.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use switchkit_core::{Canvas, Color, Point, Rect, Size, TextStyle};

/// How long a toast stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    /// 2 seconds
    #[default]
    Short,
    /// 3.5 seconds
    Long,
}

impl ToastDuration {
    /// Display time.
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        match self {
            Self::Short => Duration::from_millis(2000),
            Self::Long => Duration::from_millis(3500),
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    text: String,
    duration: ToastDuration,
    shown_for: Duration,
}

impl Toast {
    /// Create a toast.
    #[must_use]
    pub fn new(text: impl Into<String>, duration: ToastDuration) -> Self {
        Self {
            text: text.into(),
            duration,
            shown_for: Duration::ZERO,
        }
    }

    /// Create a short toast.
    #[must_use]
    pub fn short(text: impl Into<String>) -> Self {
        Self::new(text, ToastDuration::Short)
    }

    /// Create a long toast.
    #[must_use]
    pub fn long(text: impl Into<String>) -> Self {
        Self::new(text, ToastDuration::Long)
    }

    /// Message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display duration.
    #[must_use]
    pub const fn duration(&self) -> ToastDuration {
        self.duration
    }

    /// Time left before the toast disappears.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.as_duration().saturating_sub(self.shown_for)
    }

    /// Whether the toast has been shown for its full duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }
}

/// Shared FIFO of pending toasts.
///
/// Cloning yields another handle to the same queue, so a widget listener can
/// post while the host ages and paints.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    const PADDING: f32 = 12.0;
    const TEXT_SIZE: f32 = 14.0;
    const MARGIN_BOTTOM: f32 = 64.0;

    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a toast behind any already showing.
    pub fn post(&self, toast: Toast) {
        log::debug!("toast posted: {:?}", toast.text());
        self.lock().push_back(toast);
    }

    /// Age the visible toast by `elapsed`, carrying leftover time into the
    /// ones behind it.
    pub fn tick(&self, elapsed: Duration) {
        let mut queue = self.lock();
        let mut left = elapsed;
        while let Some(front) = queue.front_mut() {
            let remaining = front.remaining();
            if left < remaining {
                front.shown_for += left;
                break;
            }
            left -= remaining;
            if let Some(done) = queue.pop_front() {
                log::trace!("toast expired: {:?}", done.text());
            }
        }
    }

    /// Toast currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        self.lock().front().cloned()
    }

    /// Text of every pending toast, front first.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.lock().iter().map(|t| t.text.clone()).collect()
    }

    /// Number of pending toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no toast is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every pending toast.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Draw the visible toast centered near the bottom of `viewport`.
    pub fn paint(&self, canvas: &mut dyn Canvas, viewport: Rect) {
        let Some(toast) = self.current() else {
            return;
        };

        // Approximate glyph advance; the recording canvas has no text metrics.
        let text_width = toast.text.chars().count() as f32 * Self::TEXT_SIZE * 0.6;
        let size = Size::new(
            text_width + Self::PADDING * 2.0,
            Self::TEXT_SIZE + Self::PADDING * 2.0,
        );
        let origin = Point::new(
            viewport.x + (viewport.width - size.width) / 2.0,
            viewport.y + viewport.height - Self::MARGIN_BOTTOM - size.height,
        );
        let backdrop = Rect::from_origin_size(origin, size);

        canvas.fill_rounded_rect(backdrop, size.height / 2.0, Color::new(0.2, 0.2, 0.2, 0.9));
        canvas.draw_text(
            &toast.text,
            Point::new(origin.x + Self::PADDING, origin.y + Self::PADDING),
            &TextStyle {
                size: Self::TEXT_SIZE,
                color: Color::WHITE,
            },
        );
    }
}
