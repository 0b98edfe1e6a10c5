//! The query and submission client.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::ClientError;
use super::responses::{AccountInfo, Block, BlockHeader, BlockHeight, Receipt, SubmitResponse};
use super::selector::RoundRobinSelector;
use super::transport::{HttpRequest, HttpTransport, Method, ReqwestTransport};
use crate::config::{ApiEncoding, ClientConfig, API_VERSION};
use crate::encoding::{from_canonical_bytes, to_canonical_bytes};
use crate::identity::Identifier;
use crate::transaction::{Abi, Config, Transaction};

/// Blocking client for a channel node's HTTP API.
///
/// Every method performs exactly one request against the next server from a
/// [`RoundRobinSelector`]. There are no retries; a failed call can be
/// repeated by the caller and will go to the next server.
///
/// ```no_run
/// use channel_sdk::client::ChannelClient;
/// use channel_sdk::config::ClientConfig;
/// use channel_sdk::identity::Identifier;
///
/// let client = ChannelClient::new(ClientConfig::default()).unwrap();
/// let height = client.block_height(&Identifier::default()).unwrap();
/// println!("channel is at block {}", height.height);
/// ```
pub struct ChannelClient {
    selector: RoundRobinSelector,
    transport: Box<dyn HttpTransport>,
    config: ClientConfig,
}

impl ChannelClient {
    /// Creates a client backed by [`ReqwestTransport`].
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new()?;
        Self::with_transport(config, transport)
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(
        config: ClientConfig,
        transport: impl HttpTransport + 'static,
    ) -> Result<Self, ClientError> {
        let selector = RoundRobinSelector::new(config.servers.iter().cloned())?;
        Ok(Self {
            selector,
            transport: Box::new(transport),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn selector(&self) -> &RoundRobinSelector {
        &self.selector
    }

    // -----------------------------------------------------------------------
    // Transactions
    // -----------------------------------------------------------------------

    /// `POST /v1/channels/{channel}/transactions`
    pub fn transaction_submit(
        &self,
        transaction: &Transaction,
    ) -> Result<SubmitResponse, ClientError> {
        let body = self.encode_body(transaction)?;
        let path = format!("channels/{}/transactions", transaction.channel());
        self.request(Method::Post, &path, Some(body))
    }

    /// `GET /v1/channels/{channel}/transactions/{id}`
    pub fn transaction_lookup(
        &self,
        channel: &Identifier,
        transaction_id: &Identifier,
    ) -> Result<Transaction, ClientError> {
        let path = format!("channels/{}/transactions/{}", channel, transaction_id);
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/transactions?blockheight={height}`
    pub fn transactions_by_block_height(
        &self,
        channel: &Identifier,
        block_height: u64,
    ) -> Result<Vec<Transaction>, ClientError> {
        let path = format!("channels/{}/transactions?blockheight={}", channel, block_height);
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/transactions?blockid={id}`
    pub fn transactions_by_block_id(
        &self,
        channel: &Identifier,
        block_id: &Identifier,
    ) -> Result<Vec<Transaction>, ClientError> {
        let path = format!("channels/{}/transactions?blockid={}", channel, block_id);
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/receipts/{id}`
    pub fn receipt_lookup(
        &self,
        channel: &Identifier,
        transaction_id: &Identifier,
    ) -> Result<Receipt, ClientError> {
        let path = format!("channels/{}/receipts/{}", channel, transaction_id);
        self.get(&path)
    }

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    /// `GET /v1/channels/{channel}/blocks/{id}`
    pub fn block_lookup(
        &self,
        channel: &Identifier,
        block_id: &Identifier,
    ) -> Result<Block, ClientError> {
        let path = format!("channels/{}/blocks/{}", channel, block_id);
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/blocks?height={height}&number={number}`
    pub fn block_list(
        &self,
        channel: &Identifier,
        block_height: u64,
        number: u64,
    ) -> Result<Vec<Block>, ClientError> {
        let path = format!(
            "channels/{}/blocks?height={}&number={}",
            channel, block_height, number
        );
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/blockheaders/{id}`
    pub fn block_header_lookup(
        &self,
        channel: &Identifier,
        block_id: &Identifier,
    ) -> Result<BlockHeader, ClientError> {
        let path = format!("channels/{}/blockheaders/{}", channel, block_id);
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/blockheaders?height={height}&number={number}`
    pub fn block_header_list(
        &self,
        channel: &Identifier,
        block_height: u64,
        number: u64,
    ) -> Result<Vec<BlockHeader>, ClientError> {
        let path = format!(
            "channels/{}/blockheaders?height={}&number={}",
            channel, block_height, number
        );
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/blocks/height`
    pub fn block_height(&self, channel: &Identifier) -> Result<BlockHeight, ClientError> {
        let path = format!("channels/{}/blocks/height", channel);
        self.get(&path)
    }

    // -----------------------------------------------------------------------
    // Channel and accounts
    // -----------------------------------------------------------------------

    /// `GET /v1/channels/{channel}`
    pub fn channel_lookup(&self, channel: &Identifier) -> Result<Config, ClientError> {
        let path = format!("channels/{}", channel);
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/abi`
    pub fn channel_abi(&self, channel: &Identifier) -> Result<Abi, ClientError> {
        let path = format!("channels/{}/abi", channel);
        self.get(&path)
    }

    /// `GET /v1/channels/{channel}/accounts/{id}`
    pub fn account_lookup(
        &self,
        channel: &Identifier,
        account: &Identifier,
    ) -> Result<AccountInfo, ClientError> {
        let path = format!("channels/{}/accounts/{}", channel, account);
        self.get(&path)
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::Get, path, None)
    }

    fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, ClientError> {
        let server = self.selector.pick();
        let url = format!("{}/{}/{}", server.trim_end_matches('/'), API_VERSION, path);
        debug!(%method, %url, "sending request");

        let content_type = body.as_ref().map(|_| self.config.encoding.content_type());
        let response = self.transport.execute(HttpRequest {
            method,
            url,
            content_type,
            body,
            timeout: self.config.timeout,
        })?;

        match response.status {
            200 => self.decode_body(&response.body),
            404 => {
                debug!(path, "not found");
                Err(ClientError::NotFound)
            }
            500 => {
                warn!(server, path, "internal server error");
                Err(ClientError::InternalServer)
            }
            status => {
                let body = String::from_utf8_lossy(&response.body).into_owned();
                warn!(server, path, status, "unexpected http status");
                Err(ClientError::Http { status, body })
            }
        }
    }

    fn encode_body<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ClientError> {
        match self.config.encoding {
            ApiEncoding::Json => serde_json::to_vec(value).map_err(ClientError::encoding),
            ApiEncoding::Binary => {
                let raw = to_canonical_bytes(value).map_err(ClientError::encoding)?;
                Ok(STANDARD.encode(raw).into_bytes())
            }
        }
    }

    fn decode_body<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, ClientError> {
        match self.config.encoding {
            ApiEncoding::Json => serde_json::from_slice(body).map_err(ClientError::decoding),
            ApiEncoding::Binary => {
                let text = std::str::from_utf8(body).map_err(ClientError::decoding)?;
                let raw = STANDARD.decode(text.trim()).map_err(ClientError::decoding)?;
                from_canonical_bytes(&raw).map_err(ClientError::decoding)
            }
        }
    }
}

impl fmt::Debug for ChannelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelClient")
            .field("servers", &self.selector.servers())
            .field("timeout", &self.config.timeout)
            .field("encoding", &self.config.encoding)
            .finish_non_exhaustive()
    }
}
