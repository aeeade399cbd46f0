//! Path management for update-sealer
//!
//! All artifacts are written below the base directory:
//!
//! ```text
//! <base>/
//!   update-sealer.json      optional settings
//!   game/update_data/
//!     scrto.enc             sealed token
//!     key.enc               key index
//!     version.enc           version marker
//! ```
//!
//! ## Base Directory Resolution Order
//!
//! 1. `--data-dir` flag (via [`SealerPaths::with_base_dir`])
//! 2. `UPDATE_SEALER_DIR` environment variable
//! 3. The directory containing the running executable

use std::path::PathBuf;

use crate::error::SealerError;
use crate::storage::{KEY_FILE, TOKEN_FILE, VERSION_FILE};

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "UPDATE_SEALER_DIR";

/// Output directory, relative to the base directory
const UPDATE_DATA_DIR: [&str; 2] = ["game", "update_data"];

/// Manages all paths used by update-sealer
#[derive(Debug, Clone)]
pub struct SealerPaths {
    /// Base directory the game package lives in
    base_dir: PathBuf,
}

impl SealerPaths {
    /// Create a new SealerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the executable's location cannot be determined.
    pub fn new() -> Result<Self, SealerError> {
        let base_dir = match std::env::var_os(BASE_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => executable_dir()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SealerPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the output directory (<base>/game/update_data)
    pub fn update_data_dir(&self) -> PathBuf {
        UPDATE_DATA_DIR
            .iter()
            .fold(self.base_dir.clone(), |dir, part| dir.join(part))
    }

    /// Get the path to the sealed token file
    pub fn token_file(&self) -> PathBuf {
        self.update_data_dir().join(TOKEN_FILE)
    }

    /// Get the path to the key index file
    pub fn key_file(&self) -> PathBuf {
        self.update_data_dir().join(KEY_FILE)
    }

    /// Get the path to the version marker file
    pub fn version_file(&self) -> PathBuf {
        self.update_data_dir().join(VERSION_FILE)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("update-sealer.json")
    }
}

/// Resolve the directory holding the running executable
fn executable_dir() -> Result<PathBuf, SealerError> {
    let exe = std::env::current_exe()
        .map_err(|e| SealerError::Config(format!("Could not locate the executable: {}", e)))?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| SealerError::Config("Executable has no parent directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.update_data_dir(),
            temp_dir.path().join("game").join("update_data")
        );
    }

    #[test]
    fn test_artifact_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let data = temp_dir.path().join("game").join("update_data");

        assert_eq!(paths.token_file(), data.join("scrto.enc"));
        assert_eq!(paths.key_file(), data.join("key.enc"));
        assert_eq!(paths.version_file(), data.join("version.enc"));
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("update-sealer.json")
        );
    }

    #[test]
    fn test_executable_dir_exists() {
        let dir = executable_dir().unwrap();
        assert!(dir.is_dir());
    }
}
