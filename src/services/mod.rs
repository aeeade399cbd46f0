//! Service layer for update-sealer
//!
//! The service layer holds the sealing protocol on top of the crypto and
//! storage layers, including its own input validation.

pub mod sealing;

pub use sealing::{SealedArtifacts, SealingService};
