//! Client-side transaction verification.
//!
//! Nodes run the authoritative checks. This module only answers "does the
//! signature on this envelope verify against its signer", which is enough
//! to catch a transaction that was tampered with after signing, or one
//! decoded from a corrupt byte stream.

use super::envelope::Transaction;
use super::error::TransactionError;

/// Verifies the envelope signature over the canonical action bytes.
///
/// # Errors
///
/// [`TransactionError::Encoding`] if the action cannot be encoded and
/// [`TransactionError::VerificationFailed`] if the signature does not match.
pub fn verify_transaction(tx: &Transaction) -> Result<(), TransactionError> {
    let bytes = tx.signable_bytes()?;
    if !tx.signer().verify(&bytes, tx.signature()) {
        return Err(TransactionError::VerificationFailed {
            signer: *tx.signer(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{ChannelKeypair, Signature};
    use crate::identity::Identifier;
    use crate::transaction::envelope::Action;
    use crate::transaction::signing::sign_action;
    use crate::transaction::types::Payload;

    fn valid_signed_tx() -> (Transaction, ChannelKeypair) {
        let kp = ChannelKeypair::from_seed(&[7u8; 32]);
        let action = Action {
            sender: kp.identifier(),
            channel: Identifier::from([8u8; 32]),
            nonce: 1,
            block_expiration_number: 50,
            payload: Payload::Pause(false),
        };
        (sign_action(action, &kp).unwrap(), kp)
    }

    #[test]
    fn valid_transaction_passes() {
        let (tx, _) = valid_signed_tx();
        assert!(verify_transaction(&tx).is_ok());
    }

    #[test]
    fn rejects_tampered_action() {
        let (tx, _) = valid_signed_tx();
        let (mut action, signer, signature) = tx.into_parts();
        action.nonce = 2;
        let tampered = Transaction::new(action, signer, signature);
        match verify_transaction(&tampered) {
            Err(TransactionError::VerificationFailed { signer: s }) => assert_eq!(s, signer),
            other => panic!("expected VerificationFailed, got {:?}", other),
        }
    }

    #[test]
    fn rejects_wrong_signer() {
        let (tx, _) = valid_signed_tx();
        let (action, _, signature) = tx.into_parts();
        let other = ChannelKeypair::from_seed(&[9u8; 32]).identifier();
        let forged = Transaction::new(action, other, signature);
        assert!(verify_transaction(&forged).is_err());
    }

    #[test]
    fn rejects_garbage_signature() {
        let (tx, _) = valid_signed_tx();
        let (action, signer, _) = tx.into_parts();
        let forged = Transaction::new(action, signer, Signature::from([0u8; 64]));
        assert!(verify_transaction(&forged).is_err());
    }
}
