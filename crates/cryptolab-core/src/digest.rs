//! # SHA-256 Digest Computation
//!
//! Defines `Sha256Digest` and the hashing entry points. The computation is
//! delegated to `sha2::Sha256` (FIPS 180-4); this module only fixes the types
//! and the hex encoding contract.
//!
//! ## Encoding Invariant
//!
//! `Sha256Digest::to_hex()` always yields exactly [`HEX_LEN`] characters
//! drawn from `0-9a-f`. Every byte renders as two zero-padded digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::DigestParseError;
use crate::message::Message;

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a hex-encoded SHA-256 digest.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// A 32-byte SHA-256 digest.
///
/// Produced by [`sha256_digest()`], or parsed from a published test vector
/// with [`Sha256Digest::from_hex()`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    /// Create a digest from raw bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from a 64-character hex string.
    ///
    /// Surrounding whitespace is ignored and either letter case is accepted.
    ///
    /// # Errors
    ///
    /// Returns `DigestParseError::InvalidLength` if the trimmed input is not
    /// 64 characters, or `DigestParseError::InvalidCharacter` for the first
    /// character that is not a hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, DigestParseError> {
        let hex = hex.trim();
        let actual = hex.chars().count();
        if actual != HEX_LEN {
            return Err(DigestParseError::InvalidLength {
                expected: HEX_LEN,
                actual,
            });
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (position, character) in hex.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(DigestParseError::InvalidCharacter {
                    position,
                    character,
                })? as u8;
            if position % 2 == 0 {
                bytes[position / 2] = nibble << 4;
            } else {
                bytes[position / 2] |= nibble;
            }
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Sha256Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Sha256Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256Digest({self})")
    }
}

impl Serialize for Sha256Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Compute the SHA-256 digest of a message.
///
/// Total over all inputs, including the empty message. The same message
/// always produces the same digest.
pub fn sha256_digest(message: &Message<'_>) -> Sha256Digest {
    Sha256Digest(Sha256::digest(message.as_bytes()).into())
}

/// Compute a SHA-256 hex string from a message.
///
/// Convenience wrapper around [`sha256_digest()`].
pub fn sha256_hex(message: &Message<'_>) -> String {
    sha256_digest(message).to_hex()
}
