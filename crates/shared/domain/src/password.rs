//! Password value object - Domain layer password handling.
//!
//! Digests are PBKDF2-HMAC-SHA1 with a per-password random salt, stored as
//! standard base64 of `[marker][16-byte salt][32-byte derived key]`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::{rngs::OsRng, RngCore};
use sha1::Sha1;

use crate::constants::{
    DIGEST_FORMAT_MARKER, DIGEST_KEY_LENGTH, DIGEST_LENGTH, DIGEST_SALT_LENGTH, PBKDF2_ITERATIONS,
};
use crate::error::{DomainError, DomainResult};

/// Password value object that handles hashing and verification.
///
/// Holds only the encoded digest, never the plain text.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// A fresh salt is drawn for every call, so hashing the same plain text
    /// twice yields two different digests.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the plain text is empty.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if plain_text.is_empty() {
            return Err(DomainError::invalid_input("Empty Password"));
        }

        let mut salt = [0u8; DIGEST_SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| DomainError::internal(format!("Salt generation failed: {}", e)))?;

        let key = derive_key(plain_text, &salt);

        let mut blob = Vec::with_capacity(DIGEST_LENGTH);
        blob.push(DIGEST_FORMAT_MARKER);
        blob.extend_from_slice(&salt);
        blob.extend_from_slice(&key);

        Ok(Self {
            hash: STANDARD.encode(blob),
        })
    }

    /// Create a Password from an existing digest (from storage).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the digest string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the digest string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this digest.
    ///
    /// A digest that is not valid base64, has the wrong length or carries an
    /// unknown format marker never matches.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(blob) = STANDARD.decode(self.hash.as_bytes()) else {
            return false;
        };
        if blob.len() != DIGEST_LENGTH || blob[0] != DIGEST_FORMAT_MARKER {
            return false;
        }

        let (salt, stored_key) = blob[1..].split_at(DIGEST_SALT_LENGTH);
        let derived = derive_key(plain_text, salt);

        constant_time_eq(stored_key, &derived)
    }
}

/// Run the KDF with the fixed parameters of the current digest format.
fn derive_key(plain_text: &str, salt: &[u8]) -> [u8; DIGEST_KEY_LENGTH] {
    let mut key = [0u8; DIGEST_KEY_LENGTH];
    pbkdf2::<Hmac<Sha1>>(plain_text.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Byte comparison whose running time depends only on the input length.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
