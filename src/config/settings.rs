//! Settings for update-sealer
//!
//! Everything has a default matching the game's expectations, so the
//! settings file is optional. It exists for pointing the reachability
//! check at a different host and for bumping the version marker.

use std::time::Duration;

use serde::Deserialize;

use super::paths::SealerPaths;
use crate::error::SealerError;

/// User settings for update-sealer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Cloud storage API host, without a trailing path
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Remote application folder the game updates from
    #[serde(default = "default_remote_folder")]
    pub remote_folder: String,

    /// Version marker written to the version file
    #[serde(default = "default_version_marker")]
    pub version_marker: String,

    /// Request timeout for the reachability check; the HTTP client's
    /// default applies when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    "https://cloud-api.yandex.net".to_string()
}

fn default_remote_folder() -> String {
    "/game".to_string()
}

fn default_version_marker() -> String {
    "1.0".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            remote_folder: default_remote_folder(),
            version_marker: default_version_marker(),
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &SealerPaths) -> Result<Self, SealerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SealerError::Config(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SealerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Override the API host (from `--api-url`)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Request timeout, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), SealerError> {
        if self.api_base_url.trim().is_empty() {
            return Err(SealerError::Config("api_base_url must not be empty".into()));
        }
        if !self.remote_folder.starts_with('/') {
            return Err(SealerError::Config(format!(
                "remote_folder must start with '/': {}",
                self.remote_folder
            )));
        }
        if self.version_marker.trim().is_empty() {
            return Err(SealerError::Config("version_marker must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "https://cloud-api.yandex.net");
        assert_eq!(settings.remote_folder, "/game");
        assert_eq!(settings.version_marker, "1.0");
        assert_eq!(settings.request_timeout(), None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"version_marker": "2.1", "request_timeout_secs": 5}"#,
        )
        .unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.version_marker, "2.1");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(settings.remote_folder, "/game");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json at all").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, SealerError::Config(_)));
    }

    #[test]
    fn test_relative_remote_folder_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"remote_folder": "game"}"#).unwrap();

        assert!(Settings::load_or_default(&paths).is_err());
    }

    #[test]
    fn test_api_url_override() {
        let settings = Settings::default().with_api_base_url("http://127.0.0.1:9000");
        assert_eq!(settings.api_base_url, "http://127.0.0.1:9000");
    }
}
