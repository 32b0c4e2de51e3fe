//! Optional settings file.
//!
//! `~/.config/opl-rom-tools/settings.toml` can hold the artwork directories
//! and a lookup site override so they need not be typed on every run:
//!
//! ```toml
//! [artwork]
//! source = "/mnt/art/PS2"
//! destination = "/mnt/opl/ART"
//!
//! [lookup]
//! base_url = "http://redump.org"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Canonical path to the settings file: `~/.config/opl-rom-tools/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("opl-rom-tools").join("settings.toml")
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub artwork: ArtworkSettings,
    pub lookup: LookupSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtworkSettings {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    pub base_url: Option<String>,
}

/// Load the settings file. A missing file yields the defaults.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(&settings_path())
}

/// Load settings from an explicit path. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::SettingsRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&contents).map_err(|source| ConfigError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve a path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Value saved in `settings.toml`
pub fn resolve_path(cli_override: Option<PathBuf>, saved: Option<&Path>) -> Option<PathBuf> {
    cli_override.or_else(|| saved.map(Path::to_path_buf))
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
