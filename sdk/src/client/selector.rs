//! Round-robin endpoint selection.

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("unable to create the server selector with an empty server list")]
    EmptyServerList,
}

/// Hands out endpoints in list order, wrapping around.
///
/// Selection is a single atomic fetch-add, so concurrent callers never block
/// each other and `N` serial picks visit each of `N` endpoints exactly once.
///
/// # Example
///
/// ```
/// use channel_sdk::client::RoundRobinSelector;
///
/// let selector = RoundRobinSelector::new(["http://a", "http://b"]).unwrap();
/// assert_eq!(selector.pick(), "http://a");
/// assert_eq!(selector.pick(), "http://b");
/// assert_eq!(selector.pick(), "http://a");
/// ```
#[derive(Debug)]
pub struct RoundRobinSelector {
    servers: Vec<String>,
    cursor: AtomicUsize,
}

impl RoundRobinSelector {
    pub fn new<I, S>(servers: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let servers: Vec<String> = servers.into_iter().map(Into::into).collect();
        if servers.is_empty() {
            return Err(SelectorError::EmptyServerList);
        }
        Ok(Self {
            servers,
            cursor: AtomicUsize::new(0),
        })
    }

    /// The next endpoint.
    pub fn pick(&self) -> &str {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.servers.len();
        &self.servers[index]
    }

    /// Same as [`pick`](Self::pick).
    pub fn peek(&self) -> &str {
        self.pick()
    }

    pub fn servers(&self) -> &[String] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Always `false`; construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
