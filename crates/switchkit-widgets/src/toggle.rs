//! Image-skinned toggle switch.
//!
//! The switch is drawn from two bitmaps: a track that fills the control and a
//! smaller thumb that slides between its ends. The user drags the thumb; on
//! release the switch turns on when the finger lifts past the middle of the
//! track and off otherwise.

use crate::config::ToggleConfig;
use crate::error::WidgetError;
use log::{debug, trace};
use std::any::Any;
use std::fmt;
use switchkit_core::{
    AssetError, AssetLoader, Bitmap, Canvas, Constraints, Event, EventContext, LayoutResult, MouseButton,
    Point, Rect, ResourceId, Size, TypeId, Widget,
};

/// Message emitted when a gesture changes the committed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    /// The new toggle state
    pub on: bool,
}

/// Callback invoked when a completed drag changes the committed state.
///
/// Implemented for any `FnMut(bool)` closure.
pub trait OnStateChange: Send + Sync {
    /// Called with the new state, before it is committed.
    fn on_state_change(&mut self, on: bool);
}

impl<F> OnStateChange for F
where
    F: FnMut(bool) + Send + Sync,
{
    fn on_state_change(&mut self, on: bool) {
        self(on);
    }
}

/// Gesture state of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No touch in progress; the thumb sits at the committed end.
    #[default]
    Idle,
    /// A touch is in progress.
    Dragging {
        /// Unclamped left edge of the thumb, local to the control
        drag_x: f32,
    },
}

/// Pointer phase extracted from a raw event.
#[derive(Debug, Clone, Copy)]
enum Phase {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}

impl Phase {
    fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::TouchStart { position, .. }
            | Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => Some(Self::Down(*position)),
            Event::TouchMove { position, .. } | Event::MouseMove { position } => {
                Some(Self::Move(*position))
            }
            Event::TouchEnd { position, .. }
            | Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => Some(Self::Up(*position)),
            Event::TouchCancel { .. } => Some(Self::Cancel),
            _ => None,
        }
    }

    const fn position(self) -> Option<Point> {
        match self {
            Self::Down(p) | Self::Move(p) | Self::Up(p) => Some(p),
            Self::Cancel => None,
        }
    }
}

/// Toggle switch skinned with a track and a thumb bitmap.
pub struct ToggleSwitch {
    /// Background image; defines the control's size
    track: Bitmap,
    /// Sliding button image
    thumb: Bitmap,
    /// Committed state
    on: bool,
    /// Current gesture
    gesture: Gesture,
    /// Single-slot state change listener
    listener: Option<Box<dyn OnStateChange>>,
    /// Repaint requested by a setter
    paint_pending: bool,
    /// Declared widget id
    id_value: Option<String>,
    /// Bounds assigned by layout, sized to the track
    bounds: Rect,
}

impl ToggleSwitch {
    /// Create a switch from its two images, initially off.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ThumbWiderThanTrack`] if the thumb cannot fit,
    /// or an [`AssetError::Empty`] if either image has no pixels.
    pub fn new(track: Bitmap, thumb: Bitmap) -> Result<Self, WidgetError> {
        check_fit(&track, &thumb)?;
        Ok(Self {
            bounds: Rect::from_size(track.size()),
            track,
            thumb,
            on: false,
            gesture: Gesture::Idle,
            listener: None,
            paint_pending: false,
            id_value: None,
        })
    }

    /// Create a switch from declarative configuration, resolving both images
    /// through `assets`.
    ///
    /// # Errors
    ///
    /// Returns an error if either image is missing or undecodable, or if the
    /// thumb is wider than the track.
    pub fn from_config(config: &ToggleConfig, assets: &dyn AssetLoader) -> Result<Self, WidgetError> {
        let track = assets.load_bitmap(&config.switch_background)?;
        let thumb = assets.load_bitmap(&config.slide_button)?;
        Ok(Self::new(track, thumb)?.on(config.state))
    }

    /// Set the initial state.
    #[must_use]
    pub const fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Set the declared widget id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id_value = Some(id.into());
        self
    }

    /// Set the listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl OnStateChange + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    // ===== Setters =====

    /// Replace the track image with the resource `id`.
    ///
    /// On error the current image is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be loaded or the current thumb
    /// would not fit the new track.
    pub fn set_switch_background_resource(
        &mut self,
        id: &ResourceId,
        assets: &dyn AssetLoader,
    ) -> Result<(), WidgetError> {
        let track = assets.load_bitmap(id)?;
        self.set_switch_background(track)
    }

    /// Replace the track image.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ThumbWiderThanTrack`] if the current thumb would
    /// not fit; the current image is kept.
    pub fn set_switch_background(&mut self, track: Bitmap) -> Result<(), WidgetError> {
        check_fit(&track, &self.thumb)?;
        self.bounds = Rect::from_origin_size(self.bounds.origin(), track.size());
        self.track = track;
        self.paint_pending = true;
        Ok(())
    }

    /// Replace the thumb image with the resource `id`.
    ///
    /// On error the current image is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be loaded or the new thumb is
    /// wider than the track.
    pub fn set_slide_button_resource(
        &mut self,
        id: &ResourceId,
        assets: &dyn AssetLoader,
    ) -> Result<(), WidgetError> {
        let thumb = assets.load_bitmap(id)?;
        self.set_slide_button(thumb)
    }

    /// Replace the thumb image.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ThumbWiderThanTrack`] if the new thumb would not
    /// fit; the current image is kept.
    pub fn set_slide_button(&mut self, thumb: Bitmap) -> Result<(), WidgetError> {
        check_fit(&self.track, &thumb)?;
        self.thumb = thumb;
        self.paint_pending = true;
        Ok(())
    }

    /// Set the committed state directly.
    ///
    /// Bypasses the gesture state machine: the listener is never notified.
    pub fn set_switch_state(&mut self, on: bool) {
        self.on = on;
        self.paint_pending = true;
    }

    /// Register the state change listener, replacing any previous one.
    pub fn set_on_state_change(&mut self, listener: impl OnStateChange + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the state change listener.
    pub fn clear_on_state_change(&mut self) {
        self.listener = None;
    }

    // ===== Getters =====

    /// Get the committed state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Get the current gesture.
    #[must_use]
    pub const fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Unclamped thumb offset while dragging.
    #[must_use]
    pub const fn drag_x(&self) -> Option<f32> {
        match self.gesture {
            Gesture::Dragging { drag_x } => Some(drag_x),
            Gesture::Idle => None,
        }
    }

    /// Whether a listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Get the track image.
    #[must_use]
    pub const fn track(&self) -> &Bitmap {
        &self.track
    }

    /// Get the thumb image.
    #[must_use]
    pub const fn thumb(&self) -> &Bitmap {
        &self.thumb
    }

    /// Rightmost left edge of the thumb.
    #[must_use]
    pub fn max_left(&self) -> f32 {
        (self.track.width() - self.thumb.width()) as f32
    }

    /// Left edge of the thumb as it is drawn, local to the control.
    #[must_use]
    pub fn thumb_left(&self) -> f32 {
        let max_left = self.max_left();
        match self.gesture {
            Gesture::Dragging { drag_x } => drag_x.clamp(0.0, max_left),
            Gesture::Idle if self.on => max_left,
            Gesture::Idle => 0.0,
        }
    }

    // ===== Gesture handling =====

    /// Thumb offset that centers the thumb under `x`.
    fn offset_for(&self, x: f32) -> f32 {
        x - (self.thumb.width() / 2) as f32
    }

    /// Horizontal midpoint of the track, in whole pixels.
    fn midpoint(&self) -> f32 {
        (self.track.width() / 2) as f32
    }

    fn begin_drag(&mut self, x: f32, ctx: &mut EventContext) {
        let drag_x = self.offset_for(x);
        debug!("toggle drag start at x={x} (thumb at {drag_x})");
        self.gesture = Gesture::Dragging { drag_x };
        ctx.request_paint();
    }

    fn update_drag(&mut self, x: f32, ctx: &mut EventContext) {
        let drag_x = self.offset_for(x);
        trace!("toggle drag move to x={x} (thumb at {drag_x})");
        self.gesture = Gesture::Dragging { drag_x };
        ctx.request_paint();
    }

    fn end_drag(&mut self, x: f32, ctx: &mut EventContext) -> Option<ToggleChanged> {
        let drag_x = self.offset_for(x);
        self.gesture = Gesture::Idle;

        let on = x > self.midpoint();
        let changed = on != self.on;
        debug!("toggle released at x={x} (thumb at {drag_x}), state {} -> {on}", self.on);
        if changed {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_state_change(on);
            }
        }
        self.on = on;
        ctx.request_paint();

        changed.then_some(ToggleChanged { on })
    }

    fn cancel_drag(&mut self, ctx: &mut EventContext) {
        debug!("toggle drag cancelled, keeping state {}", self.on);
        self.gesture = Gesture::Idle;
        ctx.request_paint();
    }
}

fn check_fit(track: &Bitmap, thumb: &Bitmap) -> Result<(), WidgetError> {
    for image in [track, thumb] {
        if image.width() == 0 || image.height() == 0 {
            return Err(AssetError::Empty(image.resource().clone()).into());
        }
    }
    if thumb.width() > track.width() {
        return Err(WidgetError::ThumbWiderThanTrack {
            track: track.width(),
            thumb: thumb.width(),
        });
    }
    Ok(())
}

impl fmt::Debug for ToggleSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleSwitch")
            .field("track", &self.track)
            .field("thumb", &self.thumb)
            .field("on", &self.on)
            .field("gesture", &self.gesture)
            .field("has_listener", &self.listener.is_some())
            .field("id", &self.id_value)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Widget for ToggleSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// The switch always reports the track's natural size.
    fn measure(&self, _constraints: Constraints) -> Size {
        self.track.size()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = Rect::from_origin_size(bounds.origin(), self.track.size());
        LayoutResult {
            size: self.bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let origin = self.bounds.origin();
        canvas.draw_bitmap(&self.track, origin);
        canvas.draw_bitmap(&self.thumb, Point::new(origin.x + self.thumb_left(), origin.y));
    }

    fn event(&mut self, event: &Event, ctx: &mut EventContext) -> Option<Box<dyn Any + Send>> {
        let phase = Phase::from_event(event)?;

        // An idle switch only claims gestures that start on it; once dragging
        // it captures everything until release or cancel.
        if !self.is_dragging() {
            let position = phase.position()?;
            if !self.bounds.contains_point(&position) {
                return None;
            }
        }
        ctx.set_handled();

        let bounds = self.bounds;
        let local_x = |p: Point| bounds.to_local(p).x;
        match phase {
            Phase::Down(p) => {
                let x = local_x(p);
                self.begin_drag(x, ctx);
            }
            Phase::Move(p) if self.is_dragging() => {
                let x = local_x(p);
                self.update_drag(x, ctx);
            }
            Phase::Up(p) if self.is_dragging() => {
                let x = local_x(p);
                return self
                    .end_drag(x, ctx)
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>);
            }
            Phase::Cancel => self.cancel_drag(ctx),
            Phase::Move(_) | Phase::Up(_) => {}
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn id(&self) -> Option<&str> {
        self.id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn take_paint_request(&mut self) -> bool {
        std::mem::take(&mut self.paint_pending)
    }
}
