//! Test harness for driving gestures against switchkit widgets.

use std::any::Any;
use std::collections::VecDeque;
use switchkit_core::{
    Constraints, DrawCommand, Event, EventContext, MouseButton, Point, Rect, RecordingCanvas,
    Widget,
};

/// Test harness for interacting with a widget tree.
pub struct Harness {
    /// Root widget being tested
    root: Box<dyn Widget>,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Current viewport
    viewport: Rect,
    /// Messages emitted by the tree, oldest first
    messages: Vec<Box<dyn Any + Send>>,
    /// Whether the last event was consumed
    last_handled: bool,
    /// Whether any event since the last paint asked for a repaint
    paint_requested: bool,
}

impl Harness {
    /// Create a new harness with a root widget, laid out in a 1280x720
    /// viewport.
    pub fn new(root: impl Widget + 'static) -> Self {
        Self::from_boxed(Box::new(root))
    }

    /// Create a new harness around an already boxed widget.
    pub fn from_boxed(root: Box<dyn Widget>) -> Self {
        let mut harness = Self {
            root,
            event_queue: VecDeque::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
            messages: Vec::new(),
            last_handled: false,
            paint_requested: false,
        };
        harness.relayout();
        harness
    }

    /// Set the viewport, relaying out the root at its origin.
    #[must_use]
    pub fn viewport(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(x, y, width, height);
        self.relayout();
        self
    }

    // === Event Simulation ===

    /// Press the primary touch at `(x, y)`.
    pub fn touch_down(&mut self, x: f32, y: f32) -> &mut Self {
        self.send(Event::touch_start(Point::new(x, y)))
    }

    /// Move the primary touch to `(x, y)`.
    pub fn touch_move(&mut self, x: f32, y: f32) -> &mut Self {
        self.send(Event::touch_move(Point::new(x, y)))
    }

    /// Lift the primary touch at `(x, y)`.
    pub fn touch_up(&mut self, x: f32, y: f32) -> &mut Self {
        self.send(Event::touch_end(Point::new(x, y)))
    }

    /// Cancel the primary touch.
    pub fn touch_cancel(&mut self) -> &mut Self {
        self.send(Event::touch_cancel())
    }

    /// Drag horizontally from `from_x` to `to_x` at height `y` and release.
    pub fn drag(&mut self, from_x: f32, to_x: f32, y: f32) -> &mut Self {
        self.event_queue
            .push_back(Event::touch_start(Point::new(from_x, y)));
        self.event_queue
            .push_back(Event::touch_move(Point::new(to_x, y)));
        self.event_queue
            .push_back(Event::touch_end(Point::new(to_x, y)));
        self.process_events();
        self
    }

    /// Click with the left mouse button at `(x, y)`.
    pub fn click(&mut self, x: f32, y: f32) -> &mut Self {
        let position = Point::new(x, y);
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Deliver an arbitrary event.
    pub fn send(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Queries ===

    /// Root widget.
    #[must_use]
    pub fn root(&self) -> &dyn Widget {
        &*self.root
    }

    /// Root widget downcast to its concrete type.
    #[must_use]
    pub fn widget<T: Widget + 'static>(&self) -> Option<&T> {
        self.root.as_any().downcast_ref::<T>()
    }

    /// Mutable root widget downcast to its concrete type.
    pub fn widget_mut<T: Widget + 'static>(&mut self) -> Option<&mut T> {
        self.root.as_any_mut().downcast_mut::<T>()
    }

    /// Find a widget by declared id.
    #[must_use]
    pub fn query(&self, id: &str) -> Option<&dyn Widget> {
        find_widget(&*self.root, id)
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        self.query(id).is_some()
    }

    /// Whether the last delivered event was consumed.
    #[must_use]
    pub const fn last_handled(&self) -> bool {
        self.last_handled
    }

    /// Whether a repaint was requested since the last [`Harness::paint`].
    #[must_use]
    pub const fn paint_requested(&self) -> bool {
        self.paint_requested
    }

    /// Drain emitted messages of type `T`, keeping the others.
    pub fn take_messages<T: Any + Send>(&mut self) -> Vec<T> {
        let (matching, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.messages)
            .into_iter()
            .partition(|m| m.is::<T>());
        self.messages = rest;
        matching
            .into_iter()
            .filter_map(|m| m.downcast::<T>().ok())
            .map(|m| *m)
            .collect()
    }

    /// Number of undrained messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Paint the tree into a fresh recording canvas.
    pub fn paint(&mut self) -> RecordingCanvas {
        self.paint_requested = false;
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, id: &str) -> &Self {
        assert!(self.exists(id), "Expected widget with id '{id}' to exist");
        self
    }

    /// Assert that the last event was consumed.
    ///
    /// # Panics
    ///
    /// Panics if the last event was ignored.
    pub fn assert_handled(&self) -> &Self {
        assert!(self.last_handled, "Expected the last event to be handled");
        self
    }

    /// Assert that the last event was ignored.
    ///
    /// # Panics
    ///
    /// Panics if the last event was consumed.
    pub fn assert_not_handled(&self) -> &Self {
        assert!(!self.last_handled, "Expected the last event to be ignored");
        self
    }

    /// Assert that painting draws `resource` with its left edge at `x`.
    ///
    /// # Panics
    ///
    /// Panics if the bitmap is not drawn or is drawn elsewhere.
    pub fn assert_bitmap_x(&mut self, resource: &str, x: f32) -> &mut Self {
        let canvas = self.paint();
        let found = canvas.bitmaps().find_map(|cmd| match cmd {
            DrawCommand::Bitmap {
                resource: r,
                bounds,
                ..
            } if r.as_str() == resource => Some(bounds.x),
            _ => None,
        });
        match found {
            Some(actual) => assert!(
                (actual - x).abs() < f32::EPSILON,
                "Expected bitmap '{resource}' at x={x} but it was drawn at x={actual}"
            ),
            None => panic!("Expected bitmap '{resource}' to be drawn"),
        }
        self
    }

    // === Internal ===

    fn relayout(&mut self) {
        let size = self
            .root
            .measure(Constraints::loose(self.viewport.size()));
        self.root
            .layout(Rect::from_origin_size(self.viewport.origin(), size));
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            let mut ctx = EventContext::new();
            if let Some(message) = self.root.event(&event, &mut ctx) {
                self.messages.push(message);
            }
            self.last_handled = ctx.is_handled();
            let setter_paint = self.root.take_paint_request();
            self.paint_requested |= ctx.paint_requested() || setter_paint;
        }
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, id: &str) -> Option<&'a dyn Widget> {
    if widget.id() == Some(id) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchkit_core::{Bitmap, Canvas, Color, LayoutResult, Size, TypeId};

    // Mock widget that records touches and draws one bitmap at its origin
    struct MockWidget {
        id: Option<String>,
        bounds: Rect,
        touches: usize,
        children: Vec<Box<dyn Widget>>,
    }

    impl MockWidget {
        fn new() -> Self {
            Self {
                id: None,
                bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
                touches: 0,
                children: Vec::new(),
            }
        }

        fn with_id(mut self, id: &str) -> Self {
            self.id = Some(id.to_string());
            self
        }

        fn with_child(mut self, child: MockWidget) -> Self {
            self.children.push(Box::new(child));
            self
        }
    }

    impl Widget for MockWidget {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::new(100.0, 50.0))
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            self.bounds = b;
            LayoutResult { size: b.size() }
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            let bitmap = Bitmap::solid("mock", 10, 10, Color::BLACK);
            canvas.draw_bitmap(&bitmap, self.bounds.origin());
        }
        fn event(&mut self, event: &Event, ctx: &mut EventContext) -> Option<Box<dyn Any + Send>> {
            match event {
                Event::TouchStart { position, .. } if self.bounds.contains_point(position) => {
                    self.touches += 1;
                    ctx.set_handled();
                    ctx.request_paint();
                    Some(Box::new(self.touches))
                }
                _ => None,
            }
        }
        fn children(&self) -> &[Box<dyn Widget>] {
            &self.children
        }
        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut self.children
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    #[test]
    fn test_harness_lays_out_root() {
        let harness = Harness::new(MockWidget::new()).viewport(10.0, 20.0, 300.0, 300.0);
        let mock = harness.widget::<MockWidget>().unwrap();
        assert_eq!(mock.bounds, Rect::new(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn test_harness_query_nested() {
        let harness = Harness::new(
            MockWidget::new()
                .with_id("root")
                .with_child(MockWidget::new().with_id("child")),
        );
        harness.assert_exists("root").assert_exists("child");
        assert!(!harness.exists("missing"));
    }

    #[test]
    #[should_panic(expected = "Expected widget with id")]
    fn test_harness_assert_exists_fails() {
        let harness = Harness::new(MockWidget::new());
        harness.assert_exists("missing");
    }

    #[test]
    fn test_harness_touch_collects_messages() {
        let mut harness = Harness::new(MockWidget::new());
        harness.touch_down(5.0, 5.0).assert_handled();
        assert!(harness.paint_requested());
        harness.touch_down(500.0, 5.0).assert_not_handled();

        assert_eq!(harness.message_count(), 1);
        assert_eq!(harness.take_messages::<usize>(), vec![1]);
        assert_eq!(harness.message_count(), 0);
    }

    #[test]
    fn test_harness_take_messages_keeps_other_types() {
        let mut harness = Harness::new(MockWidget::new());
        harness.touch_down(5.0, 5.0);
        assert!(harness.take_messages::<String>().is_empty());
        assert_eq!(harness.message_count(), 1);
    }

    #[test]
    fn test_harness_paint_clears_request() {
        let mut harness = Harness::new(MockWidget::new());
        harness.touch_down(5.0, 5.0);
        let canvas = harness.paint();
        assert_eq!(canvas.command_count(), 1);
        assert!(!harness.paint_requested());
    }

    #[test]
    fn test_harness_assert_bitmap_x() {
        let mut harness = Harness::new(MockWidget::new()).viewport(7.0, 0.0, 100.0, 100.0);
        harness.assert_bitmap_x("mock", 7.0);
    }

    #[test]
    #[should_panic(expected = "to be drawn")]
    fn test_harness_assert_bitmap_missing() {
        let mut harness = Harness::new(MockWidget::new());
        harness.assert_bitmap_x("other", 0.0);
    }
}
