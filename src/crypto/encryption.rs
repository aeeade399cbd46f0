//! Fernet token sealing
//!
//! The API token is sealed as a standard Fernet token (AES-128-CBC with an
//! HMAC-SHA256 tag, random IV and timestamp embedded), keyed with the
//! base64url form of the 32-byte [`DerivedKey`]. The token file holds the
//! ASCII bytes of the Fernet token, which is what any Fernet implementation
//! on the game side expects to read back.

use base64::{engine::general_purpose::URL_SAFE, Engine};
use fernet::Fernet;

use crate::error::{SealerError, SealerResult};

use super::DerivedKey;

/// An encrypted API token in Fernet format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedToken {
    token: String,
}

impl SealedToken {
    /// Get the token as text
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Get the bytes written to the token file
    pub fn as_bytes(&self) -> &[u8] {
        self.token.as_bytes()
    }
}

/// Build a Fernet cipher from a derived key
fn cipher(key: &DerivedKey) -> SealerResult<Fernet> {
    let encoded = URL_SAFE.encode(key.as_bytes());
    Fernet::new(&encoded)
        .ok_or_else(|| SealerError::Encryption("Failed to create cipher from derived key".into()))
}

/// Encrypt the API token under the derived key
///
/// Every call embeds a fresh IV, so sealing the same token twice gives
/// different output.
pub fn seal_token(token: &str, key: &DerivedKey) -> SealerResult<SealedToken> {
    let fernet = cipher(key)?;
    Ok(SealedToken {
        token: fernet.encrypt(token.as_bytes()),
    })
}

/// Decrypt the contents of a token file back into the API token
pub fn open_token(sealed: &[u8], key: &DerivedKey) -> SealerResult<String> {
    let fernet = cipher(key)?;
    let text = std::str::from_utf8(sealed)
        .map_err(|e| SealerError::Encryption(format!("Sealed token is not valid text: {}", e)))?;

    let plaintext = fernet.decrypt(text).map_err(|_| {
        SealerError::Encryption("Decryption failed: invalid key or corrupted data".to_string())
    })?;

    String::from_utf8(plaintext)
        .map_err(|e| SealerError::Encryption(format!("Invalid UTF-8 in decrypted data: {}", e)))
}
