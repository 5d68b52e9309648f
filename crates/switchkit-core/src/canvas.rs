//! Canvas implementations for rendering.

use crate::asset::Bitmap;
use crate::draw::{DrawCommand, Sampling};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to a platform renderer)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Bitmap commands only, in paint order.
    pub fn bitmaps(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Bitmap { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, position: Point) {
        self.commands.push(DrawCommand::Bitmap {
            resource: bitmap.resource().clone(),
            bounds: Rect::from_origin_size(position, bitmap.size()),
            sampling: Sampling::default(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(10.0, 20.0, 100.0, 50.0), Color::WHITE);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, fill, .. } => {
                assert_eq!(*bounds, Rect::new(10.0, 20.0, 100.0, 50.0));
                assert_eq!(*fill, Color::WHITE);
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_draw_text() {
        let mut canvas = RecordingCanvas::new();
        let style = TextStyle {
            size: 14.0,
            ..Default::default()
        };
        canvas.draw_text("State >>> true", Point::new(10.0, 20.0), &style);

        match &canvas.commands()[0] {
            DrawCommand::Text {
                content,
                position,
                style: text_style,
            } => {
                assert_eq!(content, "State >>> true");
                assert_eq!(*position, Point::new(10.0, 20.0));
                assert_eq!(text_style.size, 14.0);
            }
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_draw_bitmap_uses_natural_size() {
        let mut canvas = RecordingCanvas::new();
        let thumb = Bitmap::solid("slide_button", 40, 40, Color::WHITE);
        canvas.draw_bitmap(&thumb, Point::new(60.0, 0.0));

        match &canvas.commands()[0] {
            DrawCommand::Bitmap {
                resource, bounds, ..
            } => {
                assert_eq!(resource.as_str(), "slide_button");
                assert_eq!(*bounds, Rect::new(60.0, 0.0, 40.0, 40.0));
            }
            _ => panic!("Expected Bitmap command"),
        }
    }

    #[test]
    fn test_bitmaps_filters_other_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::default(), Color::BLACK);
        canvas.draw_bitmap(&Bitmap::solid("a", 1, 1, Color::BLACK), Point::ORIGIN);
        assert_eq!(canvas.bitmaps().count(), 1);
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(Rect::default(), 3.0, Color::BLACK);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());

        canvas.fill_rect(Rect::default(), Color::BLACK);
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
