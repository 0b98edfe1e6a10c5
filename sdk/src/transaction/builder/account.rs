use super::Envelope;
use crate::identity::Identifier;
use crate::transaction::envelope::Action;
use crate::transaction::error::ValidationError;
use crate::transaction::signing::SignTransaction;
use crate::transaction::types::{Account, Payload};

/// Builds an account create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBuilder {
    envelope: Envelope,
    alias: String,
}

impl AccountBuilder {
    /// Sets the envelope fields.
    pub fn account(
        mut self,
        sender: Identifier,
        channel: Identifier,
        nonce: u64,
        block_expiration_number: u64,
    ) -> Self {
        self.envelope = Envelope::new(sender, channel, nonce, block_expiration_number);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }
}

impl SignTransaction for AccountBuilder {
    fn build_action(&self) -> Result<Action, ValidationError> {
        if self.alias.is_empty() {
            return Err(ValidationError::MissingRequiredField("alias"));
        }
        self.envelope.seal(Payload::Account(Account {
            alias: self.alias.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ChannelKeypair;

    #[test]
    fn account_update_signs() {
        let kp = ChannelKeypair::from_seed(&[0u8; 32]);
        let tx = AccountBuilder::default()
            .account(kp.identifier(), Identifier::default(), 1, 2)
            .alias("alice")
            .sign(&kp)
            .unwrap();
        assert_eq!(
            tx.payload(),
            &Payload::Account(Account {
                alias: "alice".into()
            })
        );
        assert!(tx.verify().is_ok());
    }

    #[test]
    fn missing_alias_is_rejected() {
        let kp = ChannelKeypair::from_seed(&[0u8; 32]);
        let err = AccountBuilder::default()
            .account(kp.identifier(), Identifier::default(), 1, 2)
            .build_action()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField("alias"));
    }

    #[test]
    fn setter_order_does_not_matter() {
        let kp = ChannelKeypair::from_seed(&[0u8; 32]);
        let canonical = AccountBuilder::default()
            .account(kp.identifier(), Identifier::default(), 1, 2)
            .alias("alice")
            .sign(&kp)
            .unwrap();
        let reversed = AccountBuilder::default()
            .alias("alice")
            .account(kp.identifier(), Identifier::default(), 1, 2)
            .sign(&kp)
            .unwrap();
        assert_eq!(reversed, canonical);
    }

    #[test]
    fn missing_entry_setter_is_rejected() {
        let err = AccountBuilder::default().alias("alice").build_action().unwrap_err();
        assert_eq!(err, ValidationError::MissingEnvelope);
    }
}
