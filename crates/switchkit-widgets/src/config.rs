//! Declarative configuration for widgets built from a layout manifest.

use crate::error::WidgetError;
use crate::toggle::ToggleSwitch;
use serde::{Deserialize, Serialize};
use switchkit_core::{AssetLoader, ResourceId, Widget};
use switchkit_yaml::WidgetConfig;

/// Widget type name for [`ToggleSwitch`] in layout manifests.
pub const TOGGLE_TYPE: &str = "toggle";

/// Attributes understood by [`ToggleSwitch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Track image
    pub switch_background: ResourceId,
    /// Thumb image
    pub slide_button: ResourceId,
    /// Initial state
    #[serde(default)]
    pub state: bool,
}

impl ToggleConfig {
    /// Create a configuration from the two image references, initially off.
    #[must_use]
    pub fn new(switch_background: impl Into<ResourceId>, slide_button: impl Into<ResourceId>) -> Self {
        Self {
            switch_background: switch_background.into(),
            slide_button: slide_button.into(),
            state: false,
        }
    }

    /// Set the initial state.
    #[must_use]
    pub const fn state(mut self, on: bool) -> Self {
        self.state = on;
        self
    }

    /// Bind a manifest declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if either image reference is missing or an attribute
    /// has the wrong type.
    pub fn from_widget_config(config: &WidgetConfig) -> Result<Self, WidgetError> {
        Ok(Self {
            switch_background: config.require_str("switch_background")?.into(),
            slide_button: config.require_str("slide_button")?.into(),
            state: config.attr_bool("state")?.unwrap_or(false),
        })
    }
}

/// Instantiate a declared widget.
///
/// # Errors
///
/// Returns [`WidgetError::UnknownWidgetType`] for types this crate does not
/// provide, or the widget's own construction error.
pub fn build_widget(
    config: &WidgetConfig,
    assets: &dyn AssetLoader,
) -> Result<Box<dyn Widget>, WidgetError> {
    match config.widget_type.as_str() {
        TOGGLE_TYPE => {
            let toggle_config = ToggleConfig::from_widget_config(config)?;
            let mut toggle = ToggleSwitch::from_config(&toggle_config, assets)?;
            if let Some(id) = &config.id {
                toggle = toggle.with_id(id.clone());
            }
            Ok(Box::new(toggle))
        }
        other => Err(WidgetError::UnknownWidgetType(other.to_string())),
    }
}
