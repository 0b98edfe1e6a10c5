//! # Client Module
//!
//! Talking to channel nodes over HTTP.
//!
//! ```text
//! selector.rs  — Lock-free round-robin endpoint selection
//! transport.rs — HttpTransport trait and the reqwest-backed default
//! client.rs    — ChannelClient: submit and every lookup endpoint
//! signing.rs   — SigningClient: a ChannelClient bound to one key
//! responses.rs — Typed response bodies
//! error.rs     — ClientError
//! ```
//!
//! All calls are blocking and perform exactly one request. Status codes are
//! classified as 200 (decode), 404 ([`ClientError::NotFound`]), 500
//! ([`ClientError::InternalServer`]) and anything else
//! ([`ClientError::Http`]).

#[allow(clippy::module_inception)]
mod client;
pub mod error;
pub mod responses;
pub mod selector;
pub mod signing;
pub mod transport;

pub use client::ChannelClient;
pub use error::ClientError;
pub use responses::{
    AccountInfo, AuthorizedAccount, Block, BlockHeader, BlockHeight, Receipt, ReceiptStatus,
    SubmitResponse,
};
pub use selector::{RoundRobinSelector, SelectorError};
pub use signing::{SigningClient, SubmitError};
pub use transport::{
    HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport, TransportError,
};
