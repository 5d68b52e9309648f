//! Image assets resolved by identifier.
//!
//! Widgets never decode files themselves. They ask an [`AssetLoader`] for a
//! [`Bitmap`] by [`ResourceId`], so the host decides where pixels come from:
//! an in-memory table ([`MemoryAssets`]) or PNG files on disk
//! ([`DirectoryAssets`]).

use crate::color::Color;
use crate::error::AssetError;
use crate::geometry::Size;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifier of an image resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a resource identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A decoded RGBA8 raster image.
///
/// Pixels are shared, so cloning a bitmap is cheap and never copies image data.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    resource: ResourceId,
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Bitmap {
    /// Build a bitmap from raw RGBA8 data.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Empty`] for zero dimensions and
    /// [`AssetError::PixelLength`] when `pixels` does not hold exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba(
        resource: impl Into<ResourceId>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, AssetError> {
        let resource = resource.into();
        if width == 0 || height == 0 {
            return Err(AssetError::Empty(resource));
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(AssetError::PixelLength {
                resource,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            resource,
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Build a bitmap filled with a single color.
    ///
    /// Zero dimensions yield an empty bitmap, which widgets reject with
    /// [`AssetError::Empty`].
    #[must_use]
    pub fn solid(resource: impl Into<ResourceId>, width: u32, height: u32, color: Color) -> Self {
        let rgba = color.to_rgba8();
        let pixels: Vec<u8> = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            resource: resource.into(),
            width,
            height,
            pixels: pixels.into(),
        }
    }

    /// Decode an encoded image (PNG) into a bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Decode`] if the bytes are not a supported image
    /// and [`AssetError::Empty`] if the image has no pixels.
    pub fn decode(resource: impl Into<ResourceId>, bytes: &[u8]) -> Result<Self, AssetError> {
        let resource = resource.into();
        let decoded = match image::load_from_memory(bytes) {
            Ok(img) => img.to_rgba8(),
            Err(source) => return Err(AssetError::Decode { resource, source }),
        };
        let (width, height) = decoded.dimensions();
        Self::from_rgba(resource, width, height, decoded.into_raw())
    }

    /// Resource this bitmap was loaded from.
    #[must_use]
    pub const fn resource(&self) -> &ResourceId {
        &self.resource
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Natural size in layout units (one unit per pixel).
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Raw RGBA8 pixel data, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` when out of range.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("resource", &self.resource)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Capability for resolving image resources by identifier.
pub trait AssetLoader {
    /// Load the bitmap registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetError`] when the resource is missing or cannot be decoded.
    fn load_bitmap(&self, id: &ResourceId) -> Result<Bitmap, AssetError>;
}

/// In-memory asset table.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    bitmaps: HashMap<ResourceId, Bitmap>,
}

impl MemoryAssets {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bitmap under its own resource id.
    #[must_use]
    pub fn with_bitmap(mut self, bitmap: Bitmap) -> Self {
        self.insert(bitmap);
        self
    }

    /// Register a bitmap under its own resource id, replacing any previous one.
    pub fn insert(&mut self, bitmap: Bitmap) {
        self.bitmaps.insert(bitmap.resource().clone(), bitmap);
    }

    /// Decode PNG bytes and register them under `id`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetError`] if the bytes cannot be decoded.
    pub fn insert_encoded(
        &mut self,
        id: impl Into<ResourceId>,
        bytes: &[u8],
    ) -> Result<(), AssetError> {
        let bitmap = Bitmap::decode(id, bytes)?;
        self.insert(bitmap);
        Ok(())
    }

    /// Number of registered bitmaps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }
}

impl AssetLoader for MemoryAssets {
    fn load_bitmap(&self, id: &ResourceId) -> Result<Bitmap, AssetError> {
        self.bitmaps
            .get(id)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(id.clone()))
    }
}

/// Loads `<root>/<id>.png` from disk.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Resolve resources relative to `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory resources are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path backing a resource.
    #[must_use]
    pub fn path_for(&self, id: &ResourceId) -> PathBuf {
        self.root.join(format!("{id}.png"))
    }
}

impl AssetLoader for DirectoryAssets {
    fn load_bitmap(&self, id: &ResourceId) -> Result<Bitmap, AssetError> {
        let path = self.path_for(id);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssetError::NotFound(id.clone()));
            }
            Err(source) => return Err(AssetError::Io { path, source }),
        };
        let bitmap = Bitmap::decode(id.clone(), &bytes)?;
        debug!(
            "decoded {} ({}x{}) from {}",
            id,
            bitmap.width(),
            bitmap.height(),
            path.display()
        );
        Ok(bitmap)
    }
}
