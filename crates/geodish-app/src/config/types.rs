//! Configuration types for the GeoDish client
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - Related sub-types

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ServerSettings {
    /// Base URL of the GeoDish backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User whose recipe collection is shown
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: default_user_id(),
        }
    }
}

fn default_base_url() -> String {
    geodish_api::DEFAULT_BASE_URL.to_string()
}

fn default_user_id() -> String {
    "user123".to_string()
}

/// UI preferences
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: Theme,

    /// Skip emoji flag glyphs on country tiles (for terminals that
    /// render them poorly)
    #[serde(default)]
    pub ascii_icons: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://localhost:5000");
        assert_eq!(settings.server.user_id, "user123");
        assert_eq!(settings.ui.theme, Theme::Light);
    }

    #[test]
    fn test_settings_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            theme = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(settings.ui.theme, Theme::Dark);
        assert!(!settings.ui.ascii_icons);
        // Missing sections fall back to defaults
        assert_eq!(settings.server.user_id, "user123");
    }

    #[test]
    fn test_settings_full_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            base_url = "http://example.com:8080/"
            user_id = "alice"

            [ui]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.base_url, "http://example.com:8080/");
        assert_eq!(settings.server.user_id, "alice");
    }
}
