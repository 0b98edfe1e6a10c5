//! # Transaction Module
//!
//! Construction, signing and verification of channel transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        — Payload union and its variant bodies (Call, Config, ...)
//! arguments.rs    — String encodings for contract call arguments
//! envelope.rs     — Action (the signed body) and the signed Transaction
//! builder/        — One builder per transaction kind
//! signing.rs      — The shared signing engine and SignTransaction trait
//! verification.rs — Signature check for a received or decoded envelope
//! nonce.rs        — Nonce sources
//! error.rs        — ValidationError and TransactionError
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — Pick a builder, set the envelope with its entry setter,
//!    then the kind-specific fields.
//! 2. **Sign** — [`SignTransaction::sign`] validates, encodes the [`Action`]
//!    canonically and signs it.
//! 3. **Submit** — Hand the [`Transaction`] to a
//!    [`ChannelClient`](crate::client::ChannelClient).
//!
//! ## Design Decisions
//!
//! - The payload is a closed enum. A transaction cannot carry two operations.
//! - The sender is part of the signed body, so a delegate's signature cannot
//!   be replayed on behalf of a different sender.
//! - Signed transactions are immutable; fields are exposed through accessors.

pub mod arguments;
pub mod builder;
pub mod envelope;
pub mod error;
pub mod nonce;
pub mod signing;
pub mod types;
pub mod verification;

pub use arguments::Argument;
pub use builder::{
    AccountBuilder, AuthorizationBuilder, CallBuilder, ConfigBuilder, ContractBuilder,
};
pub use envelope::{Action, Transaction};
pub use error::{TransactionError, ValidationError};
pub use nonce::{generate_nonce, NonceSource, RandomNonce, SequentialNonce};
pub use signing::{sign_action, SignTransaction};
pub use types::{
    Abi, Account, Authorization, Call, Config, Contract, FunctionSignature, FunctionType, Payload,
    PayloadKind,
};
pub use verification::verify_transaction;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ChannelKeypair;
    use crate::identity::Identifier;

    /// End-to-end: a zero-seed key signs a call on a zero channel, and the
    /// result verifies and survives both wire encodings.
    #[test]
    fn zero_seed_call_scenario() {
        let kp = ChannelKeypair::from_seed(&[0u8; 32]);
        let channel = Identifier::default();

        let tx = CallBuilder::default()
            .call(kp.identifier(), channel, 0, 1)
            .function("setup")
            .arguments([Argument::string("a"), Argument::float64(0.5)])
            .sign(&kp)
            .unwrap();

        assert_eq!(tx.signer(), &kp.identifier());
        assert_eq!(tx.signature().as_bytes().len(), 64);
        assert!(tx.verify().is_ok());

        let bytes = tx.canonical_bytes().unwrap();
        let decoded: Transaction = crate::encoding::from_canonical_bytes(&bytes).unwrap();
        assert_eq!(decoded, tx);

        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"5e-01\""));
        assert_eq!(serde_json::from_str::<Transaction>(&json).unwrap(), tx);
    }
}
