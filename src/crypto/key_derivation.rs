//! Key derivation using SHA-256
//!
//! The passphrase is hashed once into a hex [`DerivedIndex`], which is what
//! gets stored in the key file. Hashing the index again gives the
//! [`DerivedKey`] used for sealing, so anyone holding the key file can
//! re-derive the key. Neither step takes a salt or a work factor; the game
//! derives the same key from the stored index.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::SealerError;

/// Length of the derived encryption key in bytes
pub const KEY_LEN: usize = 32;

/// Length of the hex-encoded index
pub const INDEX_HEX_LEN: usize = 64;

/// Lowercase hex SHA-256 digest of the passphrase
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedIndex {
    hex: String,
}

impl DerivedIndex {
    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl FromStr for DerivedIndex {
    type Err = SealerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == INDEX_HEX_LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(SealerError::Validation(format!(
                "key index must be {} lowercase hex characters",
                INDEX_HEX_LEN
            )));
        }
        Ok(Self { hex: s.to_string() })
    }
}

impl fmt::Debug for DerivedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedIndex")
            .field("len", &self.hex.len())
            .finish()
    }
}

/// A derived encryption key
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive the key index from a passphrase
pub fn derive_index(passphrase: &str) -> DerivedIndex {
    let digest = Sha256::digest(passphrase.as_bytes());
    DerivedIndex {
        hex: hex::encode(digest),
    }
}

/// Derive the encryption key from a key index
///
/// Hashes the UTF-8 bytes of the hex string, not the decoded digest.
pub fn derive_key(index: &DerivedIndex) -> DerivedKey {
    let mut digest = Sha256::digest(index.as_str().as_bytes());
    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&digest[..KEY_LEN]);
    digest.as_mut_slice().zeroize();
    DerivedKey { key }
}
