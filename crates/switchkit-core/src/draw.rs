//! Draw commands.
//!
//! All rendering reduces to these primitives.

use crate::asset::ResourceId;
use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Image sampling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sampling {
    /// Nearest neighbor (pixelated)
    Nearest,
    /// Bilinear interpolation (smooth)
    #[default]
    Bilinear,
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Uniform corner radius
        radius: f32,
        /// Fill color
        fill: Color,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Blit a bitmap
    Bitmap {
        /// Resource the bitmap was loaded from
        resource: ResourceId,
        /// Destination bounds
        bounds: Rect,
        /// Sampling mode
        sampling: Sampling,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: 0.0,
            fill: color,
        }
    }

    /// Create a rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius,
            fill: color,
        }
    }

    /// Bounds of a bitmap or rectangle command.
    #[must_use]
    pub const fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect { bounds, .. } | Self::Bitmap { bounds, .. } => Some(*bounds),
            Self::Text { .. } => None,
        }
    }
}
