use thiserror::Error;

use super::selector::SelectorError;
use super::transport::TransportError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by [`ChannelClient`](super::ChannelClient).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// The node answered 404.
    #[error("entity not found")]
    NotFound,

    /// The node answered 500.
    #[error("internal server error")]
    InternalServer,

    /// Any other non-200 status.
    #[error("http status {status} - {body}")]
    Http { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A 200 response whose body did not decode into the expected type.
    #[error("could not decode the response body")]
    Decoding(#[source] BoxError),

    #[error("could not encode the request body")]
    Encoding(#[source] BoxError),
}

impl ClientError {
    pub(crate) fn decoding(err: impl Into<BoxError>) -> Self {
        Self::Decoding(err.into())
    }

    pub(crate) fn encoding(err: impl Into<BoxError>) -> Self {
        Self::Encoding(err.into())
    }

    /// `true` for 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
