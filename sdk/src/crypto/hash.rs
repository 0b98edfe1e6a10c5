//! # Hashing Utilities
//!
//! Contract bytes are addressed by their SHA3-256 digest. Nodes recompute the
//! digest on their side and reject deploys where it does not match, so this
//! has to be the exact same function, not "some 256-bit hash".

use sha3::{Digest, Sha3_256};

use crate::config::CONTENT_HASH_LENGTH;
use crate::identity::Identifier;

/// SHA3-256 of the input as a fixed-size array.
///
/// # Example
///
/// ```
/// use channel_sdk::crypto::sha3_256;
///
/// assert_eq!(sha3_256(b"contract").len(), 32);
/// ```
pub fn sha3_256(data: &[u8]) -> [u8; CONTENT_HASH_LENGTH] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; CONTENT_HASH_LENGTH];
    output.copy_from_slice(&result);
    output
}

/// Content address of a contract payload.
pub fn content_hash(contract: &[u8]) -> Identifier {
    Identifier::from(sha3_256(contract))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha3_256_empty_vector() {
        // NIST test vector for the empty message.
        assert_eq!(
            hex::encode(sha3_256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_sha3_256_abc_vector() {
        assert_eq!(
            hex::encode(sha3_256(b"abc")),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn test_content_hash_tracks_input() {
        assert_eq!(content_hash(b"example"), content_hash(b"example"));
        assert_ne!(content_hash(b"example"), content_hash(b"example2"));
    }
}
