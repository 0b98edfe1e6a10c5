use super::Envelope;
use crate::identity::Identifier;
use crate::transaction::envelope::Action;
use crate::transaction::error::ValidationError;
use crate::transaction::signing::SignTransaction;
use crate::transaction::types::{Authorization, Payload};

/// Builds a grant or revocation of delegated signing rights.
///
/// `authorize` defaults to `false`, i.e. an unconfigured builder revokes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationBuilder {
    envelope: Envelope,
    account: Option<Identifier>,
    alias: Option<String>,
    authorize: bool,
}

impl AuthorizationBuilder {
    /// Sets the envelope fields.
    pub fn authorization(
        mut self,
        sender: Identifier,
        channel: Identifier,
        nonce: u64,
        block_expiration_number: u64,
    ) -> Self {
        self.envelope = Envelope::new(sender, channel, nonce, block_expiration_number);
        self
    }

    /// The account receiving (or losing) the right to sign for the sender.
    pub fn account(mut self, account: Identifier) -> Self {
        self.account = Some(account);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn authorize(mut self, authorize: bool) -> Self {
        self.authorize = authorize;
        self
    }
}

impl SignTransaction for AuthorizationBuilder {
    fn build_action(&self) -> Result<Action, ValidationError> {
        let account = self.account.ok_or(ValidationError::MissingAccount)?;
        self.envelope.seal(Payload::Authorization(Authorization {
            account,
            alias: self.alias.clone(),
            authorize: self.authorize,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ChannelKeypair;

    #[test]
    fn grant_signs() {
        let owner = ChannelKeypair::from_seed(&[0u8; 32]);
        let delegate = ChannelKeypair::from_seed(&[1u8; 32]).identifier();
        let tx = AuthorizationBuilder::default()
            .authorization(owner.identifier(), Identifier::default(), 1, 2)
            .account(delegate)
            .alias("bot")
            .authorize(true)
            .sign(&owner)
            .unwrap();
        assert_eq!(
            tx.payload(),
            &Payload::Authorization(Authorization {
                account: delegate,
                alias: Some("bot".into()),
                authorize: true,
            })
        );
        assert!(tx.verify().is_ok());
    }

    #[test]
    fn default_is_revocation() {
        let owner = ChannelKeypair::from_seed(&[0u8; 32]);
        let action = AuthorizationBuilder::default()
            .authorization(owner.identifier(), Identifier::default(), 1, 2)
            .account(Identifier::from([9u8; 32]))
            .build_action()
            .unwrap();
        let Payload::Authorization(auth) = action.payload else {
            panic!("expected authorization payload");
        };
        assert!(!auth.authorize);
        assert_eq!(auth.alias, None);
    }

    #[test]
    fn missing_account_is_rejected() {
        let owner = ChannelKeypair::from_seed(&[0u8; 32]);
        let err = AuthorizationBuilder::default()
            .authorization(owner.identifier(), Identifier::default(), 1, 2)
            .authorize(true)
            .build_action()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingAccount);
    }

    #[test]
    fn setter_order_does_not_matter() {
        let owner = ChannelKeypair::from_seed(&[0u8; 32]);
        let delegate = Identifier::from([9u8; 32]);
        let canonical = AuthorizationBuilder::default()
            .authorization(owner.identifier(), Identifier::default(), 1, 2)
            .account(delegate)
            .alias("bot")
            .authorize(true)
            .sign(&owner)
            .unwrap();
        let reversed = AuthorizationBuilder::default()
            .authorize(true)
            .alias("bot")
            .account(delegate)
            .authorization(owner.identifier(), Identifier::default(), 1, 2)
            .sign(&owner)
            .unwrap();
        assert_eq!(reversed, canonical);
    }

    #[test]
    fn missing_entry_setter_is_rejected() {
        let err = AuthorizationBuilder::default()
            .account(Identifier::from([9u8; 32]))
            .authorize(true)
            .build_action()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingEnvelope);
    }
}
