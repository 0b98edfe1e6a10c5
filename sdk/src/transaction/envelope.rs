//! The signed transaction envelope.
//!
//! ```text
//! Transaction
//! ├── action            <- the signed body
//! │   ├── sender
//! │   ├── channel
//! │   ├── nonce
//! │   ├── block_expiration_number
//! │   └── payload       (exactly one operation)
//! ├── signer            <- public key of the signing key
//! └── signature         <- Ed25519 over canonical_bytes(action)
//! ```
//!
//! When `signer != sender` the transaction is *delegated*: the sender must
//! have previously authorized the signer with an authorization payload.

use serde::{Deserialize, Serialize};

use super::error::TransactionError;
use super::types::Payload;
use super::verification;
use crate::crypto::Signature;
use crate::encoding::to_canonical_bytes;
use crate::identity::Identifier;

/// The signed body of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Account the transaction acts on behalf of.
    pub sender: Identifier,
    /// Target channel.
    pub channel: Identifier,
    /// Replay protection. Unique per sender.
    pub nonce: u64,
    /// Last block height at which the transaction may be included.
    pub block_expiration_number: u64,
    /// The operation.
    pub payload: Payload,
}

impl Action {
    /// The exact bytes the signature covers.
    ///
    /// Deterministic: equal actions always produce identical bytes.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(to_canonical_bytes(self)?)
    }
}

/// A signed, immutable transaction ready for submission.
///
/// Only the signing engine constructs these (or deserialization of a
/// transaction that came off the wire). Fields are read through accessors
/// so a signed transaction cannot be edited and still claim its signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    action: Action,
    signer: Identifier,
    signature: Signature,
}

impl Transaction {
    pub(crate) fn new(action: Action, signer: Identifier, signature: Signature) -> Self {
        Self {
            action,
            signer,
            signature,
        }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn sender(&self) -> &Identifier {
        &self.action.sender
    }

    pub fn channel(&self) -> &Identifier {
        &self.action.channel
    }

    pub fn nonce(&self) -> u64 {
        self.action.nonce
    }

    pub fn block_expiration_number(&self) -> u64 {
        self.action.block_expiration_number
    }

    pub fn payload(&self) -> &Payload {
        &self.action.payload
    }

    /// Public key of the key that produced [`Self::signature`].
    pub fn signer(&self) -> &Identifier {
        &self.signer
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// `true` when someone other than the sender signed.
    pub fn is_delegated(&self) -> bool {
        self.signer != self.action.sender
    }

    /// The bytes covered by the signature.
    pub fn signable_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        self.action.canonical_bytes()
    }

    /// Checks the signature against the signer.
    pub fn verify(&self) -> Result<(), TransactionError> {
        verification::verify_transaction(self)
    }

    /// Canonical encoding of the whole envelope, as submitted in binary mode.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(to_canonical_bytes(self)?)
    }

    pub fn into_parts(self) -> (Action, Identifier, Signature) {
        (self.action, self.signer, self.signature)
    }
}
