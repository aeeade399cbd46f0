//! Credential sealing service
//!
//! Derives the key index and key from the passphrase, seals the API token
//! and writes the three artifacts in order: token, key index, version.
//! Runs entirely offline.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::crypto::{derive_index, derive_key, seal_token};
use crate::error::{SealerError, SealerResult, StorageStep};
use crate::storage::{write_artifact, KEY_FILE, TOKEN_FILE, VERSION_FILE};

/// Paths of the artifacts written by a successful seal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedArtifacts {
    pub token_file: PathBuf,
    pub key_file: PathBuf,
    pub version_file: PathBuf,
}

impl SealedArtifacts {
    fn in_dir(dir: &Path) -> Self {
        Self {
            token_file: dir.join(TOKEN_FILE),
            key_file: dir.join(KEY_FILE),
            version_file: dir.join(VERSION_FILE),
        }
    }

    /// All artifact paths, in write order
    pub fn paths(&self) -> [&Path; 3] {
        [&self.token_file, &self.key_file, &self.version_file]
    }
}

/// Service for sealing credentials into the output directory
pub struct SealingService<'a> {
    output_dir: &'a Path,
    version_marker: &'a str,
}

impl<'a> SealingService<'a> {
    /// Create a new sealing service writing into `output_dir`
    pub fn new(output_dir: &'a Path, version_marker: &'a str) -> Self {
        Self {
            output_dir,
            version_marker,
        }
    }

    /// Seal the token under a key derived from the passphrase
    ///
    /// Both inputs are trimmed and must be non-empty; nothing is hashed or
    /// written otherwise. A write failure leaves the artifacts from earlier
    /// steps in place.
    pub fn seal(&self, token: &str, passphrase: &str) -> SealerResult<SealedArtifacts> {
        let token = token.trim();
        let passphrase = passphrase.trim();
        if token.is_empty() || passphrase.is_empty() {
            return Err(SealerError::Validation(
                "Token and passphrase are both required".into(),
            ));
        }

        let index = derive_index(passphrase);
        let key = derive_key(&index);
        let sealed = seal_token(token, &key)?;

        let artifacts = SealedArtifacts::in_dir(self.output_dir);
        write_artifact(&artifacts.token_file, sealed.as_bytes(), StorageStep::WriteToken)?;
        write_artifact(&artifacts.key_file, index.as_str().as_bytes(), StorageStep::WriteKey)?;
        write_artifact(
            &artifacts.version_file,
            self.version_marker.as_bytes(),
            StorageStep::WriteVersion,
        )?;

        info!(dir = %self.output_dir.display(), version = self.version_marker, "credentials sealed");
        Ok(artifacts)
    }
}
