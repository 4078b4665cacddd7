use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ui::style::Color;

/// A decorative glyph shown at the start of a row, one per origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub glyph: String,
    #[serde(default)]
    pub color: Option<Color>,
}

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Construction-time options for a [`SearchBox`](crate::widgets::SearchBox).
///
/// Every field is optional in serialized form; absent or null sources are
/// treated as empty rather than as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBoxConfig {
    #[serde(deserialize_with = "null_as_empty")]
    pub history: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub suggestions: Vec<String>,
    pub history_icon: Option<Icon>,
    pub suggestion_icon: Option<Icon>,
    pub ellipsize: bool,
    pub max_visible: Option<usize>,
    pub placeholder: Option<String>,
}

impl SearchBoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, history: Vec<String>) -> Self {
        self.history = history;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_history_icon(mut self, icon: Icon) -> Self {
        self.history_icon = Some(icon);
        self
    }

    pub fn with_suggestion_icon(mut self, icon: Icon) -> Self {
        self.suggestion_icon = Some(icon);
        self
    }

    pub fn with_ellipsize(mut self, ellipsize: bool) -> Self {
        self.ellipsize = ellipsize;
        self
    }

    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = Some(max_visible);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text)
            .map_err(|err| ConfigError::new(format!("invalid search box config: {err}")))
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text)
            .map_err(|err| ConfigError::new(format!("invalid search box config: {err}")))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{Icon, SearchBoxConfig};
    use crate::ui::style::Color;

    #[test]
    fn yaml_config_parses() {
        let config = SearchBoxConfig::from_yaml(
            r#"
history:
  - apple pie
suggestions:
  - apple
  - application
history_icon:
  glyph: "⌚"
  color: yellow
suggestion_icon:
  glyph: "◌"
ellipsize: true
max_visible: 6
placeholder: Search…
"#,
        )
        .expect("config should parse");

        assert_eq!(config.history, vec!["apple pie".to_string()]);
        assert_eq!(config.suggestions.len(), 2);
        assert_eq!(
            config.history_icon,
            Some(Icon::new("⌚").with_color(Color::Yellow))
        );
        assert_eq!(config.suggestion_icon, Some(Icon::new("◌")));
        assert!(config.ellipsize);
        assert_eq!(config.max_visible, Some(6));
        assert_eq!(config.placeholder.as_deref(), Some("Search…"));
    }

    #[test]
    fn json_config_parses() {
        let config = SearchBoxConfig::from_json(
            r#"{"history": ["milk"], "suggestions": ["milkshake"], "ellipsize": false}"#,
        )
        .expect("config should parse");
        assert_eq!(config.history, vec!["milk".to_string()]);
        assert_eq!(config.suggestions, vec!["milkshake".to_string()]);
        assert!(!config.ellipsize);
    }

    #[test]
    fn missing_fields_default() {
        let config = SearchBoxConfig::from_yaml("{}").expect("empty mapping is valid");
        assert!(config.history.is_empty());
        assert!(config.suggestions.is_empty());
        assert!(config.history_icon.is_none());
        assert!(config.suggestion_icon.is_none());
        assert!(!config.ellipsize);
        assert!(config.max_visible.is_none());
        assert!(config.placeholder.is_none());
    }

    #[test]
    fn null_sources_become_empty() {
        let config = SearchBoxConfig::from_yaml("history: null\nsuggestions: ~\n")
            .expect("null sources are valid");
        assert!(config.history.is_empty());
        assert!(config.suggestions.is_empty());
    }

    #[test]
    fn malformed_text_is_an_error() {
        let err = SearchBoxConfig::from_yaml("history: {broken").expect_err("should fail");
        assert!(err.to_string().contains("invalid search box config"));
    }

    #[test]
    fn builder_mirrors_serialized_form() {
        let config = SearchBoxConfig::new()
            .with_history(vec!["milk".to_string()])
            .with_suggestions(vec!["milkshake".to_string()])
            .with_history_icon(Icon::new("⌚"))
            .with_ellipsize(true)
            .with_max_visible(4)
            .with_placeholder("Search…");
        assert_eq!(config.history, vec!["milk".to_string()]);
        assert_eq!(config.max_visible, Some(4));
        assert!(config.ellipsize);
    }
}
