//! A client bound to one signing key.

use parking_lot::Mutex;
use thiserror::Error;

use super::client::ChannelClient;
use super::error::ClientError;
use super::responses::SubmitResponse;
use crate::crypto::ChannelKeypair;
use crate::identity::Identifier;
use crate::transaction::{
    AccountBuilder, AuthorizationBuilder, CallBuilder, ConfigBuilder, ContractBuilder, NonceSource,
    RandomNonce, SignTransaction, Transaction, TransactionError,
};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Pairs a [`ChannelClient`] with a keypair and a nonce source.
///
/// The builder helpers fill in the sender and a fresh nonce, so the caller
/// only supplies the channel and expiration:
///
/// ```no_run
/// use channel_sdk::client::{ChannelClient, SigningClient};
/// use channel_sdk::config::ClientConfig;
/// use channel_sdk::crypto::ChannelKeypair;
/// use channel_sdk::identity::Identifier;
///
/// let client = ChannelClient::new(ClientConfig::default()).unwrap();
/// let signer = SigningClient::new(client, ChannelKeypair::generate());
/// let call = signer.call(Identifier::default(), 1_000).function("ping");
/// let response = signer.submit(&call).unwrap();
/// println!("accepted {}", response.transaction_id);
/// ```
pub struct SigningClient {
    client: ChannelClient,
    keypair: ChannelKeypair,
    sender: Identifier,
    nonces: Mutex<Box<dyn NonceSource>>,
}

impl SigningClient {
    /// Signs as the keypair's own account with random nonces.
    pub fn new(client: ChannelClient, keypair: ChannelKeypair) -> Self {
        let sender = keypair.identifier();
        Self {
            client,
            keypair,
            sender,
            nonces: Mutex::new(Box::new(RandomNonce::from_entropy())),
        }
    }

    /// Signs on behalf of `sender`. The sender must have authorized this key.
    pub fn with_sender(mut self, sender: Identifier) -> Self {
        self.sender = sender;
        self
    }

    pub fn with_nonce_source(mut self, source: impl NonceSource + 'static) -> Self {
        self.nonces = Mutex::new(Box::new(source));
        self
    }

    pub fn client(&self) -> &ChannelClient {
        &self.client
    }

    pub fn sender(&self) -> &Identifier {
        &self.sender
    }

    /// Identifier of the signing key.
    pub fn signer(&self) -> Identifier {
        self.keypair.identifier()
    }

    pub fn next_nonce(&self) -> u64 {
        self.nonces.lock().next_nonce()
    }

    pub fn call(&self, channel: Identifier, block_expiration_number: u64) -> CallBuilder {
        CallBuilder::default().call(
            self.sender,
            channel,
            self.next_nonce(),
            block_expiration_number,
        )
    }

    pub fn account(&self, channel: Identifier, block_expiration_number: u64) -> AccountBuilder {
        AccountBuilder::default().account(
            self.sender,
            channel,
            self.next_nonce(),
            block_expiration_number,
        )
    }

    pub fn authorization(
        &self,
        channel: Identifier,
        block_expiration_number: u64,
    ) -> AuthorizationBuilder {
        AuthorizationBuilder::default().authorization(
            self.sender,
            channel,
            self.next_nonce(),
            block_expiration_number,
        )
    }

    pub fn config(&self, channel: Identifier, block_expiration_number: u64) -> ConfigBuilder {
        ConfigBuilder::default().config(
            self.sender,
            channel,
            self.next_nonce(),
            block_expiration_number,
        )
    }

    pub fn contract(&self, channel: Identifier, block_expiration_number: u64) -> ContractBuilder {
        ContractBuilder::default().contract(
            self.sender,
            channel,
            self.next_nonce(),
            block_expiration_number,
        )
    }

    pub fn sign(&self, builder: &impl SignTransaction) -> Result<Transaction, TransactionError> {
        builder.sign(&self.keypair)
    }

    /// Signs and submits in one step.
    pub fn submit(&self, builder: &impl SignTransaction) -> Result<SubmitResponse, SubmitError> {
        let transaction = self.sign(builder)?;
        Ok(self.client.transaction_submit(&transaction)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
    use crate::config::ClientConfig;
    use crate::transaction::SequentialNonce;

    struct Accepting;

    impl HttpTransport for Accepting {
        fn execute(&self, _: HttpRequest) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse {
                status: 200,
                body: format!(r#"{{"transaction_id":"{}"}}"#, "ab".repeat(32)).into_bytes(),
            })
        }
    }

    fn signing_client() -> SigningClient {
        let client = ChannelClient::with_transport(ClientConfig::default(), Accepting).unwrap();
        SigningClient::new(client, ChannelKeypair::from_seed(&[0u8; 32]))
    }

    #[test]
    fn sender_defaults_to_key_identifier() {
        let sc = signing_client();
        assert_eq!(sc.sender(), &sc.signer());
    }

    #[test]
    fn builders_get_fresh_sequential_nonces() {
        let sc = signing_client().with_nonce_source(SequentialNonce::starting_at(5));
        let a = sc.call(Identifier::default(), 9).function("f").sign(&sc.keypair).unwrap();
        let b = sc.account(Identifier::default(), 9).alias("x").sign(&sc.keypair).unwrap();
        assert_eq!(a.nonce(), 5);
        assert_eq!(b.nonce(), 6);
        assert_eq!(sc.next_nonce(), 7);
    }

    #[test]
    fn delegated_sender_is_used() {
        let owner = Identifier::from([3u8; 32]);
        let sc = signing_client().with_sender(owner);
        let tx = sc.sign(&sc.contract(Identifier::default(), 1).delete()).unwrap();
        assert_eq!(tx.sender(), &owner);
        assert_eq!(tx.signer(), &sc.signer());
        assert!(tx.is_delegated());
    }

    #[test]
    fn submit_signs_and_sends() {
        let sc = signing_client();
        let resp = sc.submit(&sc.call(Identifier::default(), 1).function("f")).unwrap();
        assert_eq!(resp.transaction_id, Identifier::from([0xab; 32]));
    }

    #[test]
    fn submit_surfaces_validation_errors() {
        let sc = signing_client();
        let err = sc.submit(&sc.call(Identifier::default(), 1)).unwrap_err();
        assert!(matches!(err, SubmitError::Transaction(_)));
    }
}
