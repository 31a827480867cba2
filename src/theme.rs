//! Theming for the link button.
//!
//! The control carries no styling of its own; it only plumbs class names
//! onto the elements it describes. Themes are plain YAML, with a built-in
//! default compiled into the binary so a host can mount the button without
//! shipping a theme file.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Built-in default theme, embedded at compile time.
pub const DEFAULT_THEME_YAML: &str = include_str!("../themes/default.yaml");

/// Styling class names for the button's three visual slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonTheme {
    /// Base class applied to the button element in both modes.
    pub button: String,
    /// Appended after `button` while a link spans the selection.
    pub active: String,
    /// Class for the wrapper element that owns pointer-down suppression.
    pub button_wrapper: String,
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            button: "linkbar-button".to_string(),
            active: "linkbar-button-active".to_string(),
            button_wrapper: "linkbar-button-wrapper".to_string(),
        }
    }
}

impl ButtonTheme {
    /// Parse a theme from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Failed to parse theme YAML: {}", e))
    }

    /// Load a theme from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
        let theme = Self::from_yaml(&content)?;
        tracing::info!("Loaded button theme from {}", path.display());
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_matches_default_impl() {
        let embedded = ButtonTheme::from_yaml(DEFAULT_THEME_YAML).unwrap();
        assert_eq!(embedded, ButtonTheme::default());
    }

    #[test]
    fn test_from_yaml_reads_all_three_slots() {
        let theme = ButtonTheme::from_yaml(
            "button: btn\nactive: btn--on\nbutton_wrapper: btn-wrap\n",
        )
        .unwrap();
        assert_eq!(theme.button, "btn");
        assert_eq!(theme.active, "btn--on");
        assert_eq!(theme.button_wrapper, "btn-wrap");
    }

    #[test]
    fn test_invalid_yaml_reports_parse_error() {
        let err = ButtonTheme::from_yaml("button: [unclosed").unwrap_err();
        assert!(err.contains("Failed to parse theme YAML"), "got: {}", err);
    }

    #[test]
    fn test_missing_slot_is_an_error() {
        // All three slots are required; there is no partial theme.
        let err = ButtonTheme::from_yaml("button: btn\nactive: btn--on\n").unwrap_err();
        assert!(err.contains("Failed to parse theme YAML"), "got: {}", err);
    }
}
