//! Widget implementations for switchkit.

pub mod config;
pub mod error;
pub mod toggle;

pub use config::{build_widget, ToggleConfig, TOGGLE_TYPE};
pub use error::WidgetError;
pub use toggle::{Gesture, OnStateChange, ToggleChanged, ToggleSwitch};
