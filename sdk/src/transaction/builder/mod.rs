//! Per-kind transaction builders.
//!
//! Each builder starts from `Default`, takes the shared envelope through its
//! entry setter (`call`, `account`, ...), then the kind-specific fields:
//!
//! ```
//! use channel_sdk::crypto::ChannelKeypair;
//! use channel_sdk::identity::Identifier;
//! use channel_sdk::transaction::{Argument, CallBuilder, SignTransaction};
//!
//! let kp = ChannelKeypair::from_seed(&[0u8; 32]);
//! let tx = CallBuilder::default()
//!     .call(kp.identifier(), Identifier::default(), 1, 100)
//!     .function("transfer")
//!     .arguments([Argument::uint64(10)])
//!     .sign(&kp)
//!     .unwrap();
//! assert_eq!(tx.nonce(), 1);
//! ```
//!
//! Setters overwrite, except list-valued ones (`arguments`, `admins`) which
//! append. Builders are plain values: clone one to sign variations, or
//! sign the same builder twice to get the same transaction twice.

mod account;
mod authorization;
mod call;
mod config;
mod contract;

pub use account::AccountBuilder;
pub use authorization::AuthorizationBuilder;
pub use call::CallBuilder;
pub use config::ConfigBuilder;
pub use contract::ContractBuilder;

use super::envelope::Action;
use super::error::ValidationError;
use super::types::Payload;
use crate::identity::Identifier;

/// The envelope fields every builder shares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Envelope {
    sender: Option<Identifier>,
    channel: Option<Identifier>,
    nonce: u64,
    block_expiration_number: u64,
}

impl Envelope {
    pub(crate) fn new(
        sender: Identifier,
        channel: Identifier,
        nonce: u64,
        block_expiration_number: u64,
    ) -> Self {
        Self {
            sender: Some(sender),
            channel: Some(channel),
            nonce,
            block_expiration_number,
        }
    }

    /// Attaches `payload`, failing if the entry setter was never called.
    pub(crate) fn seal(&self, payload: Payload) -> Result<Action, ValidationError> {
        let (Some(sender), Some(channel)) = (self.sender, self.channel) else {
            return Err(ValidationError::MissingEnvelope);
        };
        Ok(Action {
            sender,
            channel,
            nonce: self.nonce,
            block_expiration_number: self.block_expiration_number,
            payload,
        })
    }
}
