//! Session state machine
//!
//! A session starts `Unverified`. A successful reachability check on the
//! current token moves it to `Verified`, and only a verified session may
//! create data. Replacing the token with a different one drops the session
//! back to `Unverified`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::crypto::SecureString;
use crate::error::{SealerError, SealerResult};
use crate::remote::Reachability;
use crate::services::{SealedArtifacts, SealingService};

/// Whether the current token has passed the reachability check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unverified,
    Verified,
}

/// One operator session: a token, its verification state and the output directory
pub struct Session<R: Reachability> {
    probe: R,
    output_dir: PathBuf,
    version_marker: String,
    token: Option<SecureString>,
    state: SessionState,
}

impl<R: Reachability> Session<R> {
    /// Create a new, unverified session
    pub fn new(probe: R, output_dir: PathBuf, version_marker: impl Into<String>) -> Self {
        Self {
            probe,
            output_dir,
            version_marker: version_marker.into(),
            token: None,
            state: SessionState::Unverified,
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Output directory artifacts are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Replace the token; a different token needs a fresh check
    pub fn set_token(&mut self, token: SecureString) {
        let token = SecureString::trimmed(token.as_str());
        if self.token.as_ref() != Some(&token) {
            self.state = SessionState::Unverified;
        }
        self.token = Some(token);
    }

    /// Run the reachability check on the current token
    pub fn check_token(&mut self) -> SealerResult<()> {
        let token = self
            .token
            .as_ref()
            .filter(|t| !t.is_blank())
            .ok_or_else(|| SealerError::Validation("A token is required".into()))?;

        let result = self.probe.check(token);
        self.state = if result.is_ok() {
            SessionState::Verified
        } else {
            SessionState::Unverified
        };
        debug!(state = ?self.state, "token check finished");
        result
    }

    /// Seal the verified token under the passphrase
    pub fn create_data(&self, passphrase: &SecureString) -> SealerResult<SealedArtifacts> {
        let token = match (&self.token, self.state) {
            (Some(token), SessionState::Verified) => token,
            _ => {
                return Err(SealerError::Validation(
                    "The token must be checked before data can be created".into(),
                ))
            }
        };

        SealingService::new(&self.output_dir, &self.version_marker).seal(token, passphrase)
    }
}
