//! # SDK Configuration & Constants
//!
//! Every fixed size and default the SDK relies on lives here, next to the
//! [`ClientConfig`] that callers hand to [`crate::client::ChannelClient`].
//!
//! The constants mirror what the ledger nodes expect on the wire. Changing
//! one of them without a matching node release will get your transactions
//! rejected, so treat this file as read-mostly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Length of every identifier (account, channel, content hash) in bytes.
pub const IDENTIFIER_LENGTH: usize = 32;

/// Ed25519 signing key (seed) length in bytes.
pub const SIGNING_KEY_LENGTH: usize = 32;

/// Ed25519 public key length. Identifiers are derived by copying these bytes,
/// which is why it has to equal [`IDENTIFIER_LENGTH`].
pub const VERIFYING_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Always 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Output length of the contract content hash (SHA3-256).
pub const CONTENT_HASH_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Node API
// ---------------------------------------------------------------------------

/// Path prefix of the node HTTP API this SDK speaks.
pub const API_VERSION: &str = "v1";

/// Endpoint used when the caller does not configure any.
pub const DEFAULT_SERVER: &str = "http://localhost:8081";

/// Per-request deadline. Nodes answer lookups from memory, so half a second
/// is plenty on a healthy network.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(500);

/// Body format used when talking to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEncoding {
    /// Plain JSON bodies (`Content-Type: application/json`).
    #[default]
    Json,
    /// Base64-wrapped canonical binary bodies.
    Binary,
}

impl ApiEncoding {
    /// Value for the `Content-Type` header of request bodies.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Binary => "text/plain",
        }
    }

    /// Parse an encoding name. Accepts "json" or "binary" (case-insensitive).
    /// Returns `Json` for any unrecognized value.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "binary" | "bin" => Self::Binary,
            _ => Self::Json,
        }
    }
}

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/// Connection settings for a [`crate::client::ChannelClient`].
///
/// `servers` must not be empty; the check happens when the client builds
/// its server selector, not here, so a config can be assembled field by
/// field before it is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Node base URLs, e.g. `http://10.0.0.4:8081`. Picked round-robin.
    pub servers: Vec<String>,

    /// Deadline applied to every HTTP request.
    #[serde(with = "duration_millis")]
    pub timeout: Duration,

    /// Request/response body format.
    #[serde(default)]
    pub encoding: ApiEncoding,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            servers: vec![DEFAULT_SERVER.to_string()],
            timeout: DEFAULT_REQUEST_TIMEOUT,
            encoding: ApiEncoding::default(),
        }
    }
}

impl ClientConfig {
    /// Creates a config for the given servers with default timeout and encoding.
    pub fn new<I, S>(servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            servers: servers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the body encoding.
    pub fn with_encoding(mut self, encoding: ApiEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
