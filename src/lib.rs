//! update-sealer - seals a cloud storage API token for the game's updater
//!
//! The game updates itself from a folder on a cloud disk and needs an API
//! token to do so. This crate checks a token against that folder, then
//! encrypts it under a key derived from an operator passphrase and writes
//! the game's update data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Base directory resolution and settings
//! - `error`: Custom error types
//! - `crypto`: Key index and key derivation, Fernet token sealing
//! - `storage`: Output directory guard and artifact writes
//! - `services`: The sealing protocol
//! - `remote`: Reachability check against the storage API
//! - `setup`: Session state machine and interactive wizard
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use update_sealer::config::SealerPaths;
//! use update_sealer::services::SealingService;
//!
//! let paths = SealerPaths::new()?;
//! let dir = paths.update_data_dir();
//! let artifacts = SealingService::new(&dir, "1.0").seal("token", "passphrase")?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod remote;
pub mod services;
pub mod setup;
pub mod storage;

pub use error::{SealerError, SealerResult};
