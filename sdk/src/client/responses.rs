//! Typed node responses.
//!
//! Lookups that return protocol objects (transactions, channel config, ABI)
//! decode straight into the types from [`crate::transaction`]. The structs
//! here cover what only the node produces.

use serde::{Deserialize, Serialize};

use crate::identity::Identifier;
use crate::transaction::Transaction;

/// Returned when a transaction is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub transaction_id: Identifier,
    /// Present when the node executed the transaction before replying.
    #[serde(default)]
    pub receipt: Option<Receipt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Success,
    Failure,
}

/// The outcome of executing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub transaction_id: Identifier,
    pub block_height: u64,
    pub status: ReceiptStatus,
    pub state_root: Identifier,
    /// Return value of a call, if any.
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub block_id: Identifier,
    pub block_height: u64,
    pub parent_block_id: Identifier,
    pub transactions_root: Identifier,
    pub state_root: Identifier,
    /// Unix seconds.
    pub timestamp: u64,
    pub block_producer: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeight {
    pub height: u64,
}

/// An account that may sign on behalf of another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedAccount {
    pub account: Identifier,
    #[serde(default)]
    pub alias: Option<String>,
}

/// On-channel state of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub authorized_accounts: Vec<AuthorizedAccount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_response_without_receipt() {
        let json = format!(r#"{{"transaction_id":"{}"}}"#, "11".repeat(32));
        let resp: SubmitResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp.transaction_id, Identifier::from([0x11; 32]));
        assert!(resp.receipt.is_none());
    }

    #[test]
    fn receipt_status_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReceiptStatus::Failure).unwrap(),
            "\"failure\""
        );
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(serde_json::from_str::<BlockHeight>("{}").is_err());
    }

    #[test]
    fn account_info_defaults_optional_fields() {
        let info: AccountInfo = serde_json::from_str("{}").unwrap();
        assert!(info.alias.is_none());
        assert!(info.authorized_accounts.is_empty());
    }
}
