use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Names and strings the script uses to find and label things on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// localStorage key holding `"true"` / `"false"`
    pub storage_key: String,
    /// Class put on `<body>` while dark mode is on
    pub dark_class: String,
    pub toggle_button_id: String,
    pub title_id: String,
    /// Attribute on the title element that records the rendered version
    pub version_attribute: String,
    /// Title text is this prefix followed by the version
    pub title_prefix: String,
    /// Button text while dark mode is on
    pub light_label: String,
    /// Button text while dark mode is off
    pub dark_label: String,
    /// Attach a click listener to the toggle button on load. Leave off when
    /// the markup already calls `toggleDarkMode()` itself.
    pub bind_toggle_click: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: "darkMode".to_string(),
            dark_class: "dark-mode".to_string(),
            toggle_button_id: "darkModeToggle".to_string(),
            title_id: "title".to_string(),
            version_attribute: "data-version".to_string(),
            title_prefix: "🚀 HPA Demo v".to_string(),
            light_label: "☀️ Light Mode".to_string(),
            dark_label: "🌙 Dark Mode".to_string(),
            bind_toggle_click: false,
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))
    }

    /// The button offers the mode you are not in.
    pub fn toggle_label(&self, is_dark: bool) -> &str {
        if is_dark {
            &self.light_label
        } else {
            &self.dark_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = UiConfig::default();
        assert_eq!(config.storage_key, "darkMode");
        assert_eq!(config.toggle_button_id, "darkModeToggle");
        assert_eq!(config.toggle_label(true), "☀️ Light Mode");
        assert_eq!(config.toggle_label(false), "🌙 Dark Mode");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = UiConfig::from_json(r#"{"title_id":"heading"}"#).expect("should parse");
        assert_eq!(config.title_id, "heading");
        assert_eq!(config.dark_class, "dark-mode");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = UiConfig::from_json(r#"{"colour":"red"}"#).expect_err("must fail");
        assert!(matches!(err, UiError::Config(_)));
    }
}
