//! Artifact writes
//!
//! Each artifact is written to a sibling temp file, synced and renamed into
//! place, so a single file is either fully written or absent. Nothing spans
//! files: artifacts written before a failure stay on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SealerError, StorageStep};

/// Write one artifact atomically, tagging any failure with `step`
pub fn write_artifact<P: AsRef<Path>>(
    path: P,
    contents: &[u8],
    step: StorageStep,
) -> Result<(), SealerError> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    if let Err(e) = write_synced(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(SealerError::storage(step, e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        SealerError::storage(step, e)
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}

fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
