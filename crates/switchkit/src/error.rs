//! Error types for the demo screen.

use std::path::PathBuf;
use switchkit_widgets::WidgetError;
use switchkit_yaml::ParseError;
use thiserror::Error;

/// Errors raised while creating or running the demo screen.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The layout manifest could not be parsed.
    #[error("invalid layout: {0}")]
    Layout(#[from] ParseError),

    /// A declared widget could not be built.
    #[error("failed to build widget: {0}")]
    Widget(#[from] WidgetError),

    /// A layout file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Paint output could not be serialized.
    #[error("failed to serialize paint output: {0}")]
    Json(#[from] serde_json::Error),
}
