//! # Digital Signatures
//!
//! The [`Signature`] value type and Ed25519 verification.
//!
//! A `Signature` can only come from two places: [`ChannelKeypair::sign`]
//! or [`Signature::from_bytes`], which checks the length. There is no way to
//! build a 63-byte signature and find out at submission time.
//!
//! [`ChannelKeypair::sign`]: super::keys::ChannelKeypair::sign

use std::fmt;

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::keys::ChannelKeypair;
use crate::config::{SIGNATURE_LENGTH, VERIFYING_KEY_LENGTH};
use crate::encoding::fixed_bytes;

/// Errors during signature construction.
#[derive(Debug, Error, PartialEq)]
pub enum SignatureError {
    #[error("invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid signature hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Validates a raw slice and wraps it. Fails unless it is exactly 64 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let arr: [u8; SIGNATURE_LENGTH] =
            bytes.try_into().map_err(|_| SignatureError::InvalidLength {
                expected: SIGNATURE_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Parses a hex-encoded signature.
    pub fn from_hex(hex_str: &str) -> Result<Self, SignatureError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// Lowercase hex, 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        fixed_bytes::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        fixed_bytes::deserialize(deserializer).map(Self)
    }
}

/// Verify an Ed25519 signature against raw public key bytes.
///
/// Returns `false` for an invalid key as well as a bad signature; callers
/// only ever need the yes/no answer.
pub fn verify(
    public_key: &[u8; VERIFYING_KEY_LENGTH],
    message: &[u8],
    signature: &Signature,
) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    let sig = DalekSignature::from_bytes(signature.as_bytes());
    verifying_key.verify(message, &sig).is_ok()
}

/// Sign and return the raw signature bytes, unvalidated.
///
/// Callers that need a typed [`Signature`] should pass the result through
/// [`Signature::from_bytes`].
pub fn sign_to_bytes(keypair: &ChannelKeypair, message: &[u8]) -> Vec<u8> {
    keypair.sign(message).as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_accepts_64() {
        let sig = Signature::from_bytes(&[3u8; 64]).unwrap();
        assert_eq!(sig.as_bytes(), &[3u8; 64]);
    }

    #[test]
    fn test_from_bytes_rejects_other_lengths() {
        assert_eq!(
            Signature::from_bytes(&[0u8; 63]),
            Err(SignatureError::InvalidLength {
                expected: 64,
                actual: 63
            })
        );
        assert!(Signature::from_bytes(&[]).is_err());
        assert!(Signature::from_bytes(&[0u8; 65]).is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let kp = ChannelKeypair::from_seed(&[2u8; 32]);
        let sig = kp.sign(b"payload");
        assert_eq!(sig.to_hex().len(), 128);
        assert_eq!(Signature::from_hex(&sig.to_hex()).unwrap(), sig);
        assert_eq!(
            Signature::from_hex("zz").unwrap_err(),
            SignatureError::InvalidHex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        );
    }

    #[test]
    fn test_verify_good_and_bad() {
        let kp = ChannelKeypair::from_seed(&[5u8; 32]);
        let sig = kp.sign(b"right");
        assert!(verify(&kp.public_key_bytes(), b"right", &sig));
        assert!(!verify(&kp.public_key_bytes(), b"wrong", &sig));

        let other = ChannelKeypair::from_seed(&[6u8; 32]);
        assert!(!verify(&other.public_key_bytes(), b"right", &sig));
    }

    #[test]
    fn test_sign_to_bytes_matches_sign() {
        let kp = ChannelKeypair::from_seed(&[8u8; 32]);
        let raw = sign_to_bytes(&kp, b"data");
        assert_eq!(raw.len(), SIGNATURE_LENGTH);
        assert_eq!(Signature::from_bytes(&raw).unwrap(), kp.sign(b"data"));
    }

    #[test]
    fn test_json_is_hex_string() {
        let sig = Signature::from([0xabu8; 64]);
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(64)));
        let back: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }
}
