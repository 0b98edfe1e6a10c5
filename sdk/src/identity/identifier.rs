//! # Identifiers
//!
//! Every account, channel, block, transaction and contract on a channel ledger
//! is named by a 32-byte [`Identifier`]. Account identifiers are the raw
//! Ed25519 public key of the account's key, so an `Identifier` is also enough
//! to verify that account's signatures.
//!
//! ```text
//! public_key (32 bytes) -> Identifier (same 32 bytes) -> hex for URLs/JSON
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::config::IDENTIFIER_LENGTH;
use crate::crypto::signatures::{self, Signature};
use crate::encoding::fixed_bytes;

/// Errors that can occur while constructing an [`Identifier`].
#[derive(Debug, Error, PartialEq)]
pub enum IdentifierError {
    /// The input has the wrong number of bytes.
    #[error("invalid identifier length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Always [`IDENTIFIER_LENGTH`].
        expected: usize,
        /// What we were given.
        actual: usize,
    },

    /// The input is not valid hex.
    #[error("invalid identifier hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A fixed 32-byte opaque identifier. Equality is byte equality.
///
/// # Examples
///
/// ```
/// use channel_sdk::identity::Identifier;
///
/// let hex = format!("{}01", "00".repeat(31));
/// let id = Identifier::from_hex(&hex).unwrap();
/// assert_eq!(id.as_bytes()[31], 1);
/// assert_eq!(id.to_hex().len(), 64);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Identifier([u8; IDENTIFIER_LENGTH]);

impl Identifier {
    /// Wraps a raw slice. Fails unless it is exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdentifierError> {
        let arr: [u8; IDENTIFIER_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| IdentifierError::InvalidLength {
                    expected: IDENTIFIER_LENGTH,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    /// Decodes a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, IdentifierError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Derives an account identifier from a raw public key encoding.
    ///
    /// The identifier is the key itself, so this only checks the length.
    pub fn from_public_key(public_key: &[u8]) -> Result<Self, IdentifierError> {
        Self::from_bytes(public_key)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; IDENTIFIER_LENGTH] {
        &self.0
    }

    /// Lowercase hex, 64 characters. This is the form used in API paths.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verifies `signature` over `message`, treating this identifier as an
    /// Ed25519 public key. Non-key identifiers (channels, hashes) simply fail.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        signatures::verify(&self.0, message, signature)
    }
}

impl From<[u8; IDENTIFIER_LENGTH]> for Identifier {
    fn from(bytes: [u8; IDENTIFIER_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.to_hex())
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        fixed_bytes::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        fixed_bytes::deserialize(deserializer).map(Self)
    }
}
