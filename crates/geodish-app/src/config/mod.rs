//! Configuration loading and persistence
//!
//! Settings live in a single TOML file under the user config directory.
//! The theme preference is written back whenever the user toggles it.

mod settings;
mod types;

pub use settings::{config_path, load_settings, load_settings_from, save_settings, save_settings_to};
pub use types::{ServerSettings, Settings, UiSettings};
