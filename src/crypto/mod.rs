//! Cryptographic functions for update-sealer
//!
//! Derives the key index and the encryption key from a passphrase with
//! SHA-256, and seals the API token as a Fernet token.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{open_token, seal_token, SealedToken};
pub use key_derivation::{derive_index, derive_key, DerivedIndex, DerivedKey, KEY_LEN};
pub use secure_memory::SecureString;
