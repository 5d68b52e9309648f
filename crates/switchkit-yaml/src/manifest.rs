//! Layout manifest types.
//!
//! A layout names a screen and lists the widgets on it. Widget attributes are
//! kept as raw YAML values so each widget type binds the keys it understands.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Namespace prefix for custom widget attributes (`app:<name>`).
pub const ATTR_NAMESPACE: &str = "app";

/// Screen layout loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Screen name
    pub screen: String,
    /// Widgets on the screen, in declaration order
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

/// Widget declaration from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Widget type (`toggle`, ...)
    #[serde(rename = "type")]
    pub widget_type: String,
    /// Widget ID
    #[serde(default)]
    pub id: Option<String>,
    /// Remaining attributes, keyed as written
    #[serde(flatten)]
    pub attrs: BTreeMap<String, serde_yaml_ng::Value>,
}

impl Layout {
    /// Parse a layout from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or two widgets share an id.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let layout: Self = serde_yaml_ng::from_str(yaml)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Serialize the layout to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that declared widget ids are unique.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DuplicateId`] for the first repeated id.
    pub fn validate(&self) -> Result<(), ParseError> {
        let mut seen = HashSet::new();
        for id in self.widgets.iter().filter_map(|w| w.id.as_deref()) {
            if !seen.insert(id) {
                return Err(ParseError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }

    /// Find a widget declaration by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&WidgetConfig> {
        self.widgets.iter().find(|w| w.id.as_deref() == Some(id))
    }
}

impl WidgetConfig {
    /// Look up an attribute, preferring the namespaced `app:<name>` key over
    /// the bare `<name>` key.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&serde_yaml_ng::Value> {
        self.attrs
            .get(&format!("{ATTR_NAMESPACE}:{name}"))
            .or_else(|| self.attrs.get(name))
    }

    /// String attribute, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if the attribute is not a string.
    pub fn attr_str(&self, name: &str) -> Result<Option<&str>, ParseError> {
        self.attr(name)
            .map(|value| {
                value.as_str().ok_or_else(|| ParseError::InvalidValue {
                    field: name.to_string(),
                    message: "expected a string".to_string(),
                })
            })
            .transpose()
    }

    /// Required string attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingField`] when absent and
    /// [`ParseError::InvalidValue`] when not a string.
    pub fn require_str(&self, name: &str) -> Result<&str, ParseError> {
        self.attr_str(name)?
            .ok_or_else(|| ParseError::MissingField(name.to_string()))
    }

    /// Boolean attribute, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if the attribute is not a boolean.
    pub fn attr_bool(&self, name: &str) -> Result<Option<bool>, ParseError> {
        self.attr(name)
            .map(|value| {
                value.as_bool().ok_or_else(|| ParseError::InvalidValue {
                    field: name.to_string(),
                    message: "expected a boolean".to_string(),
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOGGLE_DEMO_YAML: &str = r"
screen: toggle_demo
widgets:
  - type: toggle
    id: tgv_toggle
    app:switch_background: switch_background
    app:slide_button: slide_button
    app:state: true
";

    #[test]
    fn test_parse_layout() {
        let layout = Layout::from_yaml(TOGGLE_DEMO_YAML).unwrap();
        assert_eq!(layout.screen, "toggle_demo");
        assert_eq!(layout.widgets.len(), 1);
        assert_eq!(layout.widgets[0].widget_type, "toggle");
        assert_eq!(layout.widgets[0].id.as_deref(), Some("tgv_toggle"));
    }

    #[test]
    fn test_namespaced_attributes() {
        let layout = Layout::from_yaml(TOGGLE_DEMO_YAML).unwrap();
        let widget = layout.find("tgv_toggle").unwrap();
        assert_eq!(
            widget.attr_str("switch_background").unwrap(),
            Some("switch_background")
        );
        assert_eq!(widget.require_str("slide_button").unwrap(), "slide_button");
        assert_eq!(widget.attr_bool("state").unwrap(), Some(true));
    }

    #[test]
    fn test_bare_attributes() {
        let layout = Layout::from_yaml(
            r"
screen: s
widgets:
  - type: toggle
    switch_background: bg
    state: false
",
        )
        .unwrap();
        let widget = &layout.widgets[0];
        assert_eq!(widget.attr_str("switch_background").unwrap(), Some("bg"));
        assert_eq!(widget.attr_bool("state").unwrap(), Some(false));
        assert_eq!(widget.id, None);
    }

    #[test]
    fn test_namespaced_key_wins() {
        let layout = Layout::from_yaml(
            r"
screen: s
widgets:
  - type: toggle
    state: false
    app:state: true
",
        )
        .unwrap();
        assert_eq!(layout.widgets[0].attr_bool("state").unwrap(), Some(true));
    }

    #[test]
    fn test_missing_attribute() {
        let layout = Layout::from_yaml("screen: s\nwidgets:\n  - type: toggle\n").unwrap();
        let widget = &layout.widgets[0];
        assert_eq!(widget.attr_bool("state").unwrap(), None);
        let err = widget.require_str("slide_button").unwrap_err();
        assert!(matches!(err, ParseError::MissingField(f) if f == "slide_button"));
    }

    #[test]
    fn test_wrong_attribute_type() {
        let layout = Layout::from_yaml(
            "screen: s\nwidgets:\n  - type: toggle\n    app:state: maybe\n    app:slide_button: 7\n",
        )
        .unwrap();
        let widget = &layout.widgets[0];
        assert!(matches!(
            widget.attr_bool("state"),
            Err(ParseError::InvalidValue { .. })
        ));
        assert!(matches!(
            widget.attr_str("slide_button"),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Layout::from_yaml(
            "screen: s\nwidgets:\n  - type: toggle\n    id: a\n  - type: toggle\n    id: a\n",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            Layout::from_yaml("widgets: ["),
            Err(ParseError::Yaml(_))
        ));
    }

    #[test]
    fn test_empty_widgets_default() {
        let layout = Layout::from_yaml("screen: blank\n").unwrap();
        assert!(layout.widgets.is_empty());
        assert!(layout.find("anything").is_none());
    }

    #[test]
    fn test_to_yaml_keeps_attributes() {
        let layout = Layout::from_yaml(TOGGLE_DEMO_YAML).unwrap();
        let yaml = layout.to_yaml().unwrap();
        assert!(yaml.contains("app:slide_button"));
        assert!(yaml.contains("tgv_toggle"));
    }
}
