//! Transaction signing with Ed25519 keypairs.
//!
//! Every builder funnels into [`sign_action`], so all transaction kinds are
//! signed the same way:
//!
//! 1. Encode the [`Action`] canonically.
//! 2. Sign those bytes with the caller's key.
//! 3. Check the signature length.
//! 4. Take the signer identifier from the key's public half.
//!
//! The signing key may belong to someone other than `action.sender`.
//! Signing does not check that; the node enforces delegation rules.

use tracing::debug;

use super::envelope::{Action, Transaction};
use super::error::{TransactionError, ValidationError};
use crate::crypto::{sign_to_bytes, ChannelKeypair, Signature};
use crate::identity::Identifier;

/// Signs `action` and wraps it in a [`Transaction`].
///
/// # Example
///
/// ```
/// use channel_sdk::crypto::ChannelKeypair;
/// use channel_sdk::identity::Identifier;
/// use channel_sdk::transaction::{sign_action, Action, Payload};
///
/// let kp = ChannelKeypair::from_seed(&[0u8; 32]);
/// let action = Action {
///     sender: kp.identifier(),
///     channel: Identifier::default(),
///     nonce: 1,
///     block_expiration_number: 100,
///     payload: Payload::Delete,
/// };
/// let tx = sign_action(action, &kp).unwrap();
/// assert!(tx.verify().is_ok());
/// ```
pub fn sign_action(
    action: Action,
    keypair: &ChannelKeypair,
) -> Result<Transaction, TransactionError> {
    let bytes = action.canonical_bytes()?;
    let raw = sign_to_bytes(keypair, &bytes);
    let signature = Signature::from_bytes(&raw)?;
    let signer = Identifier::from_public_key(&keypair.public_key_bytes())?;

    debug!(
        kind = %action.payload.kind(),
        sender = %action.sender,
        signer = %signer,
        nonce = action.nonce,
        "signed transaction"
    );

    Ok(Transaction::new(action, signer, signature))
}

/// Implemented by every transaction builder.
///
/// `build_action` validates the builder's fields and assembles the signed
/// body. `sign` is the only entry point most callers need.
pub trait SignTransaction {
    fn build_action(&self) -> Result<Action, ValidationError>;

    fn sign(&self, keypair: &ChannelKeypair) -> Result<Transaction, TransactionError> {
        let action = self.build_action()?;
        sign_action(action, keypair)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
