//! Output-directory precondition guard
//!
//! Runs before any operator input is accepted. The "already sealed" signal
//! is the entry count alone: a directory holding exactly three entries of
//! any name blocks the session, and every other count is accepted. A
//! directory left with one or two files by an interrupted run therefore
//! passes the guard and gets overwritten.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{SealerError, SealerResult, StorageStep};

/// Number of artifacts a sealed output directory holds
pub const EXPECTED_ARTIFACT_COUNT: usize = 3;

/// What the guard found in the output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    /// The directory did not exist and has been created empty
    Created,
    /// The directory exists and sealing may proceed
    Ready { entries: usize },
    /// The directory already holds a full set of artifacts
    AlreadySealed,
}

impl DirectoryState {
    /// Whether the session may continue
    pub fn may_proceed(&self) -> bool {
        !matches!(self, Self::AlreadySealed)
    }
}

/// Check the output directory, creating it if it is missing
///
/// An existing directory is never modified.
pub fn inspect_output_dir(dir: &Path) -> SealerResult<DirectoryState> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(dir)
                .map_err(|e| SealerError::storage(StorageStep::CreateOutputDir, e))?;
            debug!(dir = %dir.display(), "output directory created");
            return Ok(DirectoryState::Created);
        }
        Err(e) => return Err(SealerError::storage(StorageStep::InspectOutputDir, e)),
    };

    let mut count = 0;
    for entry in entries {
        entry.map_err(|e| SealerError::storage(StorageStep::InspectOutputDir, e))?;
        count += 1;
    }

    let state = if count == EXPECTED_ARTIFACT_COUNT {
        DirectoryState::AlreadySealed
    } else {
        DirectoryState::Ready { entries: count }
    };
    debug!(dir = %dir.display(), entries = count, ?state, "output directory inspected");
    Ok(state)
}
