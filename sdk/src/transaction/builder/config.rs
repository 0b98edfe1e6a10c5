use super::Envelope;
use crate::identity::Identifier;
use crate::transaction::envelope::Action;
use crate::transaction::error::ValidationError;
use crate::transaction::signing::SignTransaction;
use crate::transaction::types::{Config, Payload};

/// Builds a channel configuration update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigBuilder {
    envelope: Envelope,
    owner: Option<Identifier>,
    admins: Vec<Identifier>,
    channel_name: Option<String>,
    version: Option<String>,
}

impl ConfigBuilder {
    /// Sets the envelope fields.
    pub fn config(
        mut self,
        sender: Identifier,
        channel: Identifier,
        nonce: u64,
        block_expiration_number: u64,
    ) -> Self {
        self.envelope = Envelope::new(sender, channel, nonce, block_expiration_number);
        self
    }

    pub fn owner(mut self, owner: Identifier) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Appends admins after any already set.
    pub fn admins(mut self, admins: impl IntoIterator<Item = Identifier>) -> Self {
        self.admins.extend(admins);
        self
    }

    pub fn admin(mut self, admin: Identifier) -> Self {
        self.admins.push(admin);
        self
    }

    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl SignTransaction for ConfigBuilder {
    fn build_action(&self) -> Result<Action, ValidationError> {
        let owner = self.owner.ok_or(ValidationError::MissingOwner)?;
        self.envelope.seal(Payload::Config(Config {
            owner,
            admins: self.admins.clone(),
            channel_name: self.channel_name.clone(),
            version: self.version.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ChannelKeypair;

    #[test]
    fn config_update_signs() {
        let kp = ChannelKeypair::from_seed(&[0u8; 32]);
        let a = Identifier::from([1u8; 32]);
        let b = Identifier::from([2u8; 32]);
        let tx = ConfigBuilder::default()
            .config(kp.identifier(), Identifier::default(), 1, 2)
            .owner(kp.identifier())
            .admins([a])
            .admin(b)
            .channel_name("payments")
            .version("2")
            .sign(&kp)
            .unwrap();
        assert_eq!(
            tx.payload(),
            &Payload::Config(Config {
                owner: kp.identifier(),
                admins: vec![a, b],
                channel_name: Some("payments".into()),
                version: Some("2".into()),
            })
        );
        assert!(tx.verify().is_ok());
    }

    #[test]
    fn missing_owner_is_rejected() {
        let kp = ChannelKeypair::from_seed(&[0u8; 32]);
        let err = ConfigBuilder::default()
            .config(kp.identifier(), Identifier::default(), 1, 2)
            .build_action()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingOwner);
    }

    #[test]
    fn admin_order_is_preserved() {
        let kp = ChannelKeypair::from_seed(&[0u8; 32]);
        let ids: Vec<Identifier> = (1..=4u8).map(|i| Identifier::from([i; 32])).collect();
        let action = ConfigBuilder::default()
            .config(kp.identifier(), Identifier::default(), 1, 2)
            .owner(kp.identifier())
            .admins(ids.clone())
            .build_action()
            .unwrap();
        let Payload::Config(config) = action.payload else {
            panic!("expected config payload");
        };
        assert_eq!(config.admins, ids);
    }

    #[test]
    fn setter_order_does_not_matter() {
        let kp = ChannelKeypair::from_seed(&[0u8; 32]);
        let admin = Identifier::from([1u8; 32]);
        let canonical = ConfigBuilder::default()
            .config(kp.identifier(), Identifier::default(), 1, 2)
            .owner(kp.identifier())
            .admin(admin)
            .channel_name("payments")
            .sign(&kp)
            .unwrap();
        let reversed = ConfigBuilder::default()
            .channel_name("payments")
            .admin(admin)
            .owner(kp.identifier())
            .config(kp.identifier(), Identifier::default(), 1, 2)
            .sign(&kp)
            .unwrap();
        assert_eq!(reversed, canonical);
    }

    #[test]
    fn missing_entry_setter_is_rejected() {
        let err = ConfigBuilder::default()
            .owner(Identifier::from([1u8; 32]))
            .build_action()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingEnvelope);
    }
}
