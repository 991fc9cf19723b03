//! Menu configuration
//!
//! Names of the DOM elements and classes the menu binds to. Every field has a
//! default, so partial JSON such as `{"marker_class": "open"}` is accepted.

use serde::{Deserialize, Serialize};

use crate::domain::Selector;
use crate::shared::constants::{
    DEFAULT_CONTROL_ID, DEFAULT_MARKER_CLASS, DEFAULT_PANEL_CLASS, DEFAULT_TRIGGER_SELECTOR,
};
use crate::shared::errors::{MenuError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Id of the menu control
    pub control_id: String,
    /// Class of the sidebar panel (first match is used)
    pub panel_class: String,
    /// Selector for the interactive child of the control
    pub trigger_selector: String,
    /// Class flagging the control as open
    pub marker_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_string(),
            panel_class: DEFAULT_PANEL_CLASS.to_string(),
            trigger_selector: DEFAULT_TRIGGER_SELECTOR.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
        }
    }
}

impl MenuConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject names that can't be used as an id or a class token
    pub fn validate(&self) -> Result<()> {
        check_token("control_id", &self.control_id)?;
        check_token("panel_class", &self.panel_class)?;
        check_token("marker_class", &self.marker_class)?;

        Selector::parse(&self.trigger_selector)?;
        Ok(())
    }

    /// Human readable selector for the control, used in error messages
    pub fn control_selector(&self) -> String {
        format!("#{}", self.control_id)
    }

    pub fn panel_selector(&self) -> String {
        format!(".{}", self.panel_class)
    }

    pub fn trigger_path(&self) -> String {
        format!("{} {}", self.control_selector(), self.trigger_selector)
    }
}

fn check_token(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(MenuError::InvalidConfig(format!("{} must not be empty", field)));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(MenuError::InvalidConfig(format!(
            "{} must not contain whitespace: {:?}",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_dom_contract() {
        let config = MenuConfig::default();
        assert_eq!(config.control_id, "menu");
        assert_eq!(config.panel_class, "sidebar");
        assert_eq!(config.trigger_selector, "a");
        assert_eq!(config.marker_class, "clicked");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = MenuConfig::from_json(r#"{"marker_class": "is-open"}"#).unwrap();
        assert_eq!(config.marker_class, "is-open");
        assert_eq!(config.control_id, "menu");
        assert_eq!(config.panel_class, "sidebar");
    }

    #[test]
    fn test_empty_json_object_is_default() {
        assert_eq!(MenuConfig::from_json("{}").unwrap(), MenuConfig::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = MenuConfig::from_json("{\"control_id\":").unwrap_err();
        assert!(matches!(err, MenuError::ConfigParse(_)));
    }

    #[test]
    fn test_whitespace_class_is_rejected() {
        let err = MenuConfig::from_json(r#"{"marker_class": "is open"}"#).unwrap_err();
        assert!(matches!(err, MenuError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_values_are_rejected() {
        let config = MenuConfig {
            control_id: String::new(),
            ..MenuConfig::default()
        };
        assert!(matches!(config.validate(), Err(MenuError::InvalidConfig(_))));

        let config = MenuConfig {
            trigger_selector: "  ".to_string(),
            ..MenuConfig::default()
        };
        assert!(matches!(config.validate(), Err(MenuError::InvalidConfig(_))));
    }

    #[test]
    fn test_trigger_selector_grammar_is_checked() {
        for json in [r#"{"trigger_selector": "a["}"#, r#"{"trigger_selector": "li > a"}"#] {
            let err = MenuConfig::from_json(json).unwrap_err();
            assert!(matches!(err, MenuError::InvalidConfig(_)), "{}", json);
        }
        let config = MenuConfig::from_json(r#"{"trigger_selector": "li a.toggle"}"#).unwrap();
        assert_eq!(config.trigger_selector, "li a.toggle");
    }

    #[test]
    fn test_selectors_for_messages() {
        let config = MenuConfig::default();
        assert_eq!(config.control_selector(), "#menu");
        assert_eq!(config.panel_selector(), ".sidebar");
        assert_eq!(config.trigger_path(), "#menu a");
    }
}
