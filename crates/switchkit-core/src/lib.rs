//! Core types and traits for switchkit.
//!
//! This crate provides the foundation the toggle widget is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`EventContext`]
//! - Rendering: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Image resources: [`Bitmap`], [`ResourceId`], [`AssetLoader`]

mod asset;
mod canvas;
mod color;
mod constraints;
mod context;
pub mod draw;
mod error;
mod event;
mod geometry;
pub mod widget;

pub use asset::{AssetLoader, Bitmap, DirectoryAssets, MemoryAssets, ResourceId};
pub use canvas::RecordingCanvas;
pub use color::Color;
pub use constraints::Constraints;
pub use context::EventContext;
pub use draw::{DrawCommand, Sampling};
pub use error::AssetError;
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{Point, Rect, Size};
pub use widget::{Canvas, LayoutResult, TextStyle, TypeId, Widget};
