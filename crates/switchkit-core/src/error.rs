//! Error types for asset loading.

use crate::asset::ResourceId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving an image resource.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No asset is registered under the identifier.
    #[error("resource not found: {0}")]
    NotFound(ResourceId),

    /// The asset file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The asset bytes are not a decodable image.
    #[error("failed to decode resource {resource}: {source}")]
    Decode {
        /// Resource being decoded
        resource: ResourceId,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },

    /// The image decoded to zero width or height.
    #[error("resource {0} has an empty image")]
    Empty(ResourceId),

    /// Raw pixel data does not match the declared dimensions.
    #[error("resource {resource}: expected {expected} bytes of RGBA data, got {actual}")]
    PixelLength {
        /// Resource being built
        resource: ResourceId,
        /// Byte count implied by width and height
        expected: usize,
        /// Byte count supplied
        actual: usize,
    },
}
