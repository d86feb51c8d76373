//! Settings loader/writer for config.toml

use std::path::{Path, PathBuf};

use geodish_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "geodish";

/// Path of the settings file (`~/.config/geodish/config.toml`).
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the default location.
///
/// Never fails: a missing file yields defaults, and an unreadable or
/// invalid file is logged and also yields defaults.
pub fn load_settings() -> Settings {
    let path = config_path();
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load settings, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::config(format!("invalid settings file: {e}")))
}

/// Persist settings to the default location.
pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&config_path(), settings)
}

/// Persist settings to an explicit path, creating parent directories.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("failed to serialize settings: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, content)?;
    info!(path = %path.display(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geodish").join("config.toml");

        let mut settings = Settings::default();
        settings.ui.theme = Theme::Dark;
        settings.server.user_id = "bob".to_string();

        save_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [ valid = toml").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
