//! Error types for widget construction.

use switchkit_core::AssetError;
use switchkit_yaml::ParseError;
use thiserror::Error;

/// Errors raised while building or reskinning a widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// An image resource could not be resolved.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// The declared attributes are missing or malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The thumb image would not fit inside the track.
    #[error("thumb is {thumb}px wide but the track is only {track}px")]
    ThumbWiderThanTrack {
        /// Track width in pixels
        track: u32,
        /// Thumb width in pixels
        thumb: u32,
    },

    /// The layout declares a widget type this crate cannot build.
    #[error("unknown widget type: {0}")]
    UnknownWidgetType(String),
}
