//! Remote reachability check
//!
//! Confirms that a token is accepted by the cloud storage API and that the
//! game's folder exists there, before any credentials are sealed.

pub mod client;

pub use client::DiskClient;

use crate::error::SealerResult;

/// Something that can confirm a token reaches the remote folder
pub trait Reachability {
    /// Check the token with a single request; any failure is final for this call
    fn check(&self, token: &str) -> SealerResult<()>;
}
