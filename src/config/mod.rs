//! Configuration module for update-sealer
//!
//! This module provides configuration management including:
//! - Base and output directory resolution
//! - Optional JSON settings for the remote endpoint and version marker

pub mod paths;
pub mod settings;

pub use paths::SealerPaths;
pub use settings::Settings;
