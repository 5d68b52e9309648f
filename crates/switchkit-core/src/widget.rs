//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Accept the bounds the parent allocated
//! 3. **Paint**: Issue draw calls against a [`Canvas`]
//!
//! Input arrives through [`Widget::event`] together with an
//! [`EventContext`] used to consume the event and request repaints.
//!
//! # Examples
//!
//! ```
//! use switchkit_core::{TypeId, TextStyle};
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//!
//! assert_eq!(TextStyle::default().size, 16.0);
//! ```

use crate::asset::Bitmap;
use crate::constraints::Constraints;
use crate::context::EventContext;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event.
    ///
    /// Returns a widget-specific message when the event produced one.
    fn event(&mut self, event: &Event, ctx: &mut EventContext) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Upcast for downcasting to a concrete widget.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to a concrete widget.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Identifier declared for this widget in a layout, if any.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Drain a repaint request raised outside event dispatch (e.g. by a setter).
    fn take_paint_request(&mut self) -> bool {
        false
    }
}

impl dyn Widget {
    /// Downcast to a concrete widget type.
    pub fn downcast_ref<T: Widget + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably downcast to a concrete widget type.
    pub fn downcast_mut<T: Widget + 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a filled rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw a bitmap at its natural size with its top-left corner at `position`.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, position: Point);
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
        }
    }
}
