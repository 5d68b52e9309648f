//! Demo host screen.
//!
//! [`ToggleDemo`] builds the widgets declared in a layout, hooks the toggle
//! with id [`TOGGLE_ID`] so every state change posts a short toast, and then
//! forwards input, paint and time to them.

use crate::error::DemoError;
use crate::toast::{Toast, ToastQueue};
use log::{debug, info, warn};
use std::time::Duration;
use switchkit_core::{
    AssetLoader, Canvas, Constraints, Event, EventContext, MouseButton, Rect, Widget,
};
use switchkit_widgets::{build_widget, ToggleChanged, ToggleSwitch};
use switchkit_yaml::Layout;

/// Id of the toggle the demo listens to.
pub const TOGGLE_ID: &str = "tgv_toggle";

/// Built-in layout with a single toggle.
pub const DEFAULT_LAYOUT: &str = r"
screen: toggle_demo
widgets:
  - type: toggle
    id: tgv_toggle
    app:switch_background: switch_background
    app:slide_button: slide_button
    app:state: false
";

/// Toast text announcing a new toggle state.
#[must_use]
pub fn state_message(on: bool) -> String {
    format!("State >>> {on}")
}

/// Where a pointer event sits in a press-drag-release sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Press,
    Drag,
    Release,
}

impl Pointer {
    const fn of(event: &Event) -> Option<Self> {
        match event {
            Event::TouchStart { .. }
            | Event::MouseDown {
                button: MouseButton::Left,
                ..
            } => Some(Self::Press),
            Event::TouchMove { .. } | Event::MouseMove { .. } => Some(Self::Drag),
            Event::TouchEnd { .. }
            | Event::TouchCancel { .. }
            | Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => Some(Self::Release),
            _ => None,
        }
    }
}

/// Host screen for the toggle demo.
pub struct ToggleDemo {
    screen: String,
    widgets: Vec<Box<dyn Widget>>,
    toasts: ToastQueue,
    viewport: Rect,
    needs_paint: bool,
    /// Widget that consumed the current press; it sees the rest of the gesture first
    captured: Option<usize>,
}

impl ToggleDemo {
    /// Default viewport width.
    pub const WIDTH: f32 = 360.0;
    /// Default viewport height.
    pub const HEIGHT: f32 = 640.0;
    /// Gap above and between widgets.
    const SPACING: f32 = 16.0;

    /// Build the screen from `layout`, resolving images through `assets`.
    ///
    /// A layout without a toggle named [`TOGGLE_ID`] still builds; the screen
    /// then never shows a toast.
    ///
    /// # Errors
    ///
    /// Returns an error if any declared widget cannot be built.
    pub fn on_create(layout: &Layout, assets: &dyn AssetLoader) -> Result<Self, DemoError> {
        let widgets = layout
            .widgets
            .iter()
            .map(|config| build_widget(config, assets))
            .collect::<Result<Vec<_>, _>>()?;

        let mut demo = Self {
            screen: layout.screen.clone(),
            widgets,
            toasts: ToastQueue::new(),
            viewport: Rect::new(0.0, 0.0, Self::WIDTH, Self::HEIGHT),
            needs_paint: true,
            captured: None,
        };

        let toasts = demo.toasts.clone();
        if let Some(toggle) = demo.toggle_mut() {
            toggle.set_on_state_change(move |on: bool| toasts.post(Toast::short(state_message(on))));
        } else {
            warn!("screen '{}' has no toggle with id '{TOGGLE_ID}'", layout.screen);
        }

        demo.relayout();
        info!(
            "created screen '{}' with {} widget(s)",
            demo.screen,
            demo.widgets.len()
        );
        Ok(demo)
    }

    /// Parse `yaml` and build the screen from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or a widget cannot be built.
    pub fn from_yaml(yaml: &str, assets: &dyn AssetLoader) -> Result<Self, DemoError> {
        let layout = Layout::from_yaml(yaml)?;
        Self::on_create(&layout, assets)
    }

    /// Resize the viewport and lay the widgets out again.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Rect::new(self.viewport.x, self.viewport.y, width, height);
        self.relayout();
    }

    /// Deliver an input event.
    ///
    /// The widget that consumes a press captures the pointer: moves and the
    /// release are offered to it first, wherever they land. Other events go to
    /// widgets in declaration order until one consumes them. Returns whether
    /// the event was consumed.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        if let Event::Resize { width, height } = *event {
            self.resize(width, height);
            return true;
        }

        let pointer = Pointer::of(event);
        let captured = self
            .captured
            .filter(|_| matches!(pointer, Some(Pointer::Drag | Pointer::Release)));

        let mut handled = captured.is_some_and(|index| self.deliver(index, event));
        if !handled {
            for index in 0..self.widgets.len() {
                if Some(index) != captured && self.deliver(index, event) {
                    handled = true;
                    if pointer == Some(Pointer::Press) {
                        self.captured = Some(index);
                    }
                    break;
                }
            }
        }

        match pointer {
            Some(Pointer::Press) if !handled => self.captured = None,
            Some(Pointer::Release) => self.captured = None,
            _ => {}
        }
        self.collect_paint_requests();
        handled
    }

    /// Offer `event` to one widget, returning whether it consumed it.
    fn deliver(&mut self, index: usize, event: &Event) -> bool {
        let Some(widget) = self.widgets.get_mut(index) else {
            return false;
        };
        let mut ctx = EventContext::new();
        if let Some(message) = widget.event(event, &mut ctx) {
            if let Some(changed) = message.downcast_ref::<ToggleChanged>() {
                debug!("widget {:?} changed to {}", widget.id(), changed.on);
            }
        }
        self.needs_paint |= ctx.paint_requested();
        ctx.is_handled()
    }

    /// Advance host time, expiring toasts.
    pub fn tick(&mut self, elapsed: Duration) {
        let before = self.toasts.len();
        self.toasts.tick(elapsed);
        if self.toasts.len() != before {
            self.needs_paint = true;
        }
    }

    /// Paint the widgets, then any visible toast on top.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        for widget in &self.widgets {
            widget.paint(canvas);
        }
        self.toasts.paint(canvas, self.viewport);
    }

    /// Drain the pending repaint request.
    pub fn take_paint_request(&mut self) -> bool {
        self.collect_paint_requests();
        std::mem::take(&mut self.needs_paint)
    }

    /// Screen name from the layout.
    #[must_use]
    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Current viewport.
    #[must_use]
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Widgets in declaration order.
    #[must_use]
    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    /// Pending toasts.
    #[must_use]
    pub const fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// The demo toggle, if the layout declared one.
    #[must_use]
    pub fn toggle(&self) -> Option<&ToggleSwitch> {
        self.widgets
            .iter()
            .find(|w| w.id() == Some(TOGGLE_ID))
            .and_then(|w| w.downcast_ref::<ToggleSwitch>())
    }

    /// Mutable access to the demo toggle.
    pub fn toggle_mut(&mut self) -> Option<&mut ToggleSwitch> {
        self.widgets
            .iter_mut()
            .find(|w| w.id() == Some(TOGGLE_ID))
            .and_then(|w| w.downcast_mut::<ToggleSwitch>())
    }

    fn collect_paint_requests(&mut self) {
        for widget in &mut self.widgets {
            self.needs_paint |= widget.take_paint_request();
        }
    }

    /// Stack widgets top to bottom, each centered horizontally.
    fn relayout(&mut self) {
        let available = self.viewport.size();
        let mut y = self.viewport.y + Self::SPACING;
        for widget in &mut self.widgets {
            let size = widget.measure(Constraints::loose(available));
            let x = self.viewport.x + (self.viewport.width - size.width).max(0.0) / 2.0;
            widget.layout(Rect::new(x, y, size.width, size.height));
            y += size.height + Self::SPACING;
        }
        self.needs_paint = true;
    }
}

impl std::fmt::Debug for ToggleDemo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleDemo")
            .field("screen", &self.screen)
            .field("widgets", &self.widgets.len())
            .field("toasts", &self.toasts)
            .field("viewport", &self.viewport)
            .field("captured", &self.captured)
            .finish_non_exhaustive()
    }
}
