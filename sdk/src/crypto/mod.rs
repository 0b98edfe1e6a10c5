//! # Cryptographic Primitives
//!
//! Thin, typed wrappers around audited implementations:
//!
//! - **Ed25519** (`ed25519-dalek`) for transaction signatures.
//! - **SHA3-256** (`sha3`) for contract content hashes.
//!
//! Nothing in here is clever, and it should stay that way.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{content_hash, sha3_256};
pub use keys::{ChannelKeypair, KeyError};
pub use signatures::{sign_to_bytes, verify, Signature, SignatureError};
