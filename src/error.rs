//! Custom error types for update-sealer
//!
//! Every failure the tool can report maps to one [`SealerError`] variant.
//! Errors end the current action only; the caller decides whether the
//! session continues.

use std::fmt;
use std::io;

use thiserror::Error;

/// The step of local storage work that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStep {
    /// Listing the output directory during the precondition guard
    InspectOutputDir,
    /// Creating a missing output directory
    CreateOutputDir,
    /// Writing the sealed token artifact
    WriteToken,
    /// Writing the key (index) artifact
    WriteKey,
    /// Writing the version marker artifact
    WriteVersion,
}

impl fmt::Display for StorageStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Self::InspectOutputDir => "inspecting the output directory",
            Self::CreateOutputDir => "creating the output directory",
            Self::WriteToken => "writing the token file",
            Self::WriteKey => "writing the key file",
            Self::WriteVersion => "writing the version file",
        };
        f.write_str(step)
    }
}

/// The main error type for update-sealer operations
#[derive(Error, Debug)]
pub enum SealerError {
    /// Missing or empty required input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote service rejected the token
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The expected remote folder does not exist
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Transport failure or an unexpected response status
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// Local filesystem failure, tagged with the step that failed
    #[error("Storage error while {step}: {source}")]
    Storage {
        step: StorageStep,
        #[source]
        source: io::Error,
    },

    /// Encryption errors
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal and other I/O errors outside the output directory
    #[error("I/O error: {0}")]
    Io(String),
}

impl SealerError {
    /// Create a storage error for the given step
    pub fn storage(step: StorageStep, source: io::Error) -> Self {
        Self::Storage { step, source }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// The failing storage step, if this is a storage error
    pub fn storage_step(&self) -> Option<StorageStep> {
        match self {
            Self::Storage { step, .. } => Some(*step),
            _ => None,
        }
    }
}

impl From<io::Error> for SealerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for update-sealer operations
pub type SealerResult<T> = Result<T, SealerError>;
