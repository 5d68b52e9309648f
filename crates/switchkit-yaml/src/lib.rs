//! YAML layout manifests for switchkit screens.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{Layout, WidgetConfig, ATTR_NAMESPACE};
