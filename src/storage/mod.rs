//! Storage layer for update-sealer
//!
//! Owns the output directory layout: the three artifact names, the
//! precondition guard run before a session starts, and the writes that
//! put artifacts on disk.

pub mod file_io;
pub mod guard;

pub use file_io::write_artifact;
pub use guard::{inspect_output_dir, DirectoryState, EXPECTED_ARTIFACT_COUNT};

/// Sealed token artifact
pub const TOKEN_FILE: &str = "scrto.enc";

/// Key index artifact
pub const KEY_FILE: &str = "key.enc";

/// Version marker artifact
pub const VERSION_FILE: &str = "version.enc";
