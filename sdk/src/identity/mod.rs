//! # Identity Module
//!
//! Naming things on a channel ledger. Accounts, channels, blocks and
//! contract hashes all share one type, [`Identifier`]: 32 opaque bytes,
//! printed as hex.
//!
//! Account identifiers double as Ed25519 public keys. That is what lets a
//! node check a transaction's signature against its `signer` field without a
//! key registry, and it is why [`Identifier::from_public_key`] is a copy
//! rather than a hash.

pub mod identifier;

pub use identifier::{Identifier, IdentifierError};
