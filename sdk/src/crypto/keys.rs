//! # Key Management
//!
//! Ed25519 keypairs for signing channel transactions.
//!
//! A [`ChannelKeypair`] is the only place secret key material lives in the
//! SDK. Builders borrow it for the duration of a `sign` call and never store
//! it; the [`crate::client::SigningClient`] owns one for its lifetime.
//!
//! ## Security considerations
//!
//! - Private keys are zeroized on drop (ed25519-dalek does this for us).
//! - Key generation uses `OsRng`.
//! - `Debug` prints the public half only. Key bytes are never logged.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use thiserror::Error;

use super::signatures::Signature;
use crate::config::{SIGNING_KEY_LENGTH, VERIFYING_KEY_LENGTH};
use crate::identity::Identifier;

/// Errors that can occur while loading key material.
///
/// Deliberately vague about the bytes involved.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key: expected 32 bytes of hex")]
    InvalidSecretKey,
}

/// An Ed25519 keypair used to sign transactions.
///
/// `ChannelKeypair` does not implement `Serialize`. Exporting a secret key
/// should be a conscious act; use [`ChannelKeypair::secret_key_bytes`].
///
/// # Examples
///
/// ```
/// use channel_sdk::crypto::ChannelKeypair;
///
/// let kp = ChannelKeypair::from_seed(&[0u8; 32]);
/// let sig = kp.sign(b"hello channel");
/// assert!(kp.identifier().verify(b"hello channel", &sig));
/// ```
pub struct ChannelKeypair {
    signing_key: SigningKey,
}

impl ChannelKeypair {
    /// Generate a fresh keypair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    ///
    /// The seed is the Ed25519 secret key. A weak seed gives a weak key.
    pub fn from_seed(seed: &[u8; SIGNING_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstruct a keypair from a hex-encoded 32-byte seed.
    ///
    /// Handy for devnet seeds passed through the environment. Production
    /// deployments should load keys from something better than an env var.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str.trim()).map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; SIGNING_KEY_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// Raw public key bytes (32 bytes).
    pub fn public_key_bytes(&self) -> [u8; VERIFYING_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The underlying `VerifyingKey`.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// The on-chain identifier of this key: its raw public key bytes.
    pub fn identifier(&self) -> Identifier {
        Identifier::from(self.public_key_bytes())
    }

    /// Sign a message. Deterministic for a given (key, message) pair.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::from(self.signing_key.sign(message).to_bytes())
    }

    /// Exports the raw 32-byte secret key. Handle with care.
    pub fn secret_key_bytes(&self) -> [u8; SIGNING_KEY_LENGTH] {
        self.signing_key.to_bytes()
    }
}

impl Clone for ChannelKeypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for ChannelKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChannelKeypair(pub={})", hex::encode(self.public_key_bytes()))
    }
}

impl PartialEq for ChannelKeypair {
    /// Compares public keys only.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for ChannelKeypair {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_is_deterministic() {
        let a = ChannelKeypair::from_seed(&[7u8; 32]);
        let b = ChannelKeypair::from_seed(&[7u8; 32]);
        assert_eq!(a.public_key_bytes(), b.public_key_bytes());
        assert_eq!(a.identifier(), b.identifier());
    }

    #[test]
    fn test_from_hex_matches_from_seed() {
        let hex_seed = "00".repeat(32);
        let kp = ChannelKeypair::from_hex(&hex_seed).unwrap();
        assert_eq!(kp, ChannelKeypair::from_seed(&[0u8; 32]));
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(ChannelKeypair::from_hex("abcd").is_err());
        assert!(ChannelKeypair::from_hex(&"00".repeat(33)).is_err());
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(ChannelKeypair::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_identifier_is_public_key() {
        let kp = ChannelKeypair::generate();
        assert_eq!(kp.identifier().as_bytes(), &kp.public_key_bytes());
    }

    #[test]
    fn test_signatures_are_deterministic() {
        let kp = ChannelKeypair::from_seed(&[1u8; 32]);
        assert_eq!(kp.sign(b"msg"), kp.sign(b"msg"));
        assert_ne!(kp.sign(b"msg"), kp.sign(b"other"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let kp = ChannelKeypair::from_seed(&[9u8; 32]);
        let dbg = format!("{:?}", kp);
        assert!(dbg.contains(&hex::encode(kp.public_key_bytes())));
        assert!(!dbg.contains(&hex::encode(kp.secret_key_bytes())));
    }

    #[test]
    fn test_clone_preserves_key() {
        let kp = ChannelKeypair::generate();
        let cloned = kp.clone();
        assert_eq!(kp.secret_key_bytes(), cloned.secret_key_bytes());
    }
}
