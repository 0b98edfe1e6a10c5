// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Channel SDK — Client Library
//!
//! Everything an application needs to talk to a channel ledger: build a
//! transaction, sign it, send it to a node, and read state back.
//!
//! ## Architecture
//!
//! - **crypto** — Ed25519 keys and signatures, SHA3-256 content hashes.
//! - **identity** — The 32-byte [`Identifier`](identity::Identifier) that
//!   names accounts, channels, blocks and contracts.
//! - **transaction** — Typed payloads, per-kind builders, the signing engine.
//! - **client** — Round-robin server selection and the blocking HTTP client.
//! - **encoding** — The canonical byte encoding signatures are computed over.
//! - **config** — Protocol constants and [`ClientConfig`](config::ClientConfig).
//!
//! ## Quick start
//!
//! ```no_run
//! use channel_sdk::prelude::*;
//!
//! let key = ChannelKeypair::generate();
//! let channel: Identifier = "00".repeat(32).parse().unwrap();
//!
//! let tx = CallBuilder::default()
//!     .call(key.identifier(), channel, generate_nonce(), 1_000)
//!     .function("transfer")
//!     .arguments([Argument::string("bob"), Argument::uint64(25)])
//!     .sign(&key)
//!     .unwrap();
//!
//! let client = ChannelClient::new(ClientConfig::default()).unwrap();
//! let accepted = client.transaction_submit(&tx).unwrap();
//! println!("submitted {}", accepted.transaction_id);
//! ```
//!
//! ## Design Philosophy
//!
//! 1. A signed transaction is immutable. Change a field, sign again.
//! 2. One request per call. Retry policy belongs to the application.
//! 3. No I/O outside [`client`]; builders and signing are pure.

pub mod client;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod identity;
pub mod transaction;

/// The types most applications need, in one import.
pub mod prelude {
    pub use crate::client::{ChannelClient, ClientError, SigningClient};
    pub use crate::config::{ApiEncoding, ClientConfig};
    pub use crate::crypto::ChannelKeypair;
    pub use crate::identity::Identifier;
    pub use crate::transaction::{
        generate_nonce, Abi, AccountBuilder, Argument, AuthorizationBuilder, CallBuilder,
        ConfigBuilder, ContractBuilder, FunctionSignature, Payload, SignTransaction, Transaction,
    };
}
