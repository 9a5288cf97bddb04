//! User settings
//!
//! Settings live in `<config dir>/evolution-connect/settings.json`. The file
//! is optional; every field has a default, so a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ConfigError;

/// What a rejected (non-image) selection does to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidFilePolicy {
    /// Alert only; the previous preview and file stay selected
    #[default]
    KeepSelection,
    /// Alert and drop the previous preview and file
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulated gateway latency in milliseconds
    pub submit_delay_ms: u64,
    /// How long a toast stays on screen in milliseconds
    pub toast_duration_ms: u64,
    pub on_invalid_file: InvalidFilePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            toast_duration_ms: 4000,
            on_invalid_file: InvalidFilePolicy::KeepSelection,
        }
    }
}

impl Settings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Default location of the settings file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("evolution-connect");
        path.push("settings.json");
        Some(path)
    }

    /// Load settings from `path`
    ///
    /// A missing file yields the defaults; anything else that goes wrong is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                info!(path = %path.display(), ?settings, "settings loaded");
                settings
            }
            Err(e) => {
                warn!("⚠️  {}; using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.submit_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "toast_duration_ms": 1500, "on_invalid_file": "clear_selection" }}"#).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.submit_delay_ms, 2000);
        assert_eq!(settings.toast_duration(), Duration::from_millis(1500));
        assert_eq!(settings.on_invalid_file, InvalidFilePolicy::ClearSelection);
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
