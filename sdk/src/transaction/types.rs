//! Core payload types for channel transactions.
//!
//! A transaction carries exactly one [`Payload`]. Each variant owns only the
//! data that operation needs, so a "config update with a call attached"
//! cannot be expressed at all.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::arguments::Argument;
use crate::encoding::base64_bytes;
use crate::identity::Identifier;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The typed operation body of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// Invoke a contract function.
    Call(Call),
    /// Create or rename the sender's account.
    Account(Account),
    /// Grant or revoke another account's right to sign for the sender.
    Authorization(Authorization),
    /// Replace the channel configuration.
    Config(Config),
    /// Deploy (or replace) the channel contract.
    Deploy(Contract),
    /// Pause (`true`) or resume (`false`) the channel contract.
    Pause(bool),
    /// Remove the channel contract.
    Delete,
}

impl Payload {
    /// The discriminant of this payload.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Call(_) => PayloadKind::Call,
            Self::Account(_) => PayloadKind::Account,
            Self::Authorization(_) => PayloadKind::Authorization,
            Self::Config(_) => PayloadKind::Config,
            Self::Deploy(_) => PayloadKind::Deploy,
            Self::Pause(_) => PayloadKind::Pause,
            Self::Delete => PayloadKind::Delete,
        }
    }
}

/// Discriminant for [`Payload`], handy for logging and matching on the
/// operation without borrowing its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Call,
    Account,
    Authorization,
    Config,
    Deploy,
    Pause,
    Delete,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Account => write!(f, "Account"),
            Self::Authorization => write!(f, "Authorization"),
            Self::Config => write!(f, "Config"),
            Self::Deploy => write!(f, "Deploy"),
            Self::Pause => write!(f, "Pause"),
            Self::Delete => write!(f, "Delete"),
        }
    }
}

// ---------------------------------------------------------------------------
// Variant bodies
// ---------------------------------------------------------------------------

/// A contract function invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// Function name as declared in the contract ABI. Never empty.
    pub function: String,
    /// Positional arguments, already string-encoded.
    pub arguments: Vec<Argument>,
}

/// Account creation/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Human-readable alias. Never empty.
    pub alias: String,
}

/// Delegated-signing grant or revocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    /// The account being authorized (or de-authorized).
    pub account: Identifier,
    /// Optional alias recorded alongside the grant.
    pub alias: Option<String>,
    /// `true` grants, `false` revokes.
    pub authorize: bool,
}

/// Channel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Channel owner.
    pub owner: Identifier,
    /// Accounts with admin rights, in the order they were added.
    pub admins: Vec<Identifier>,
    /// Optional display name.
    pub channel_name: Option<String>,
    /// Optional configuration version tag.
    pub version: Option<String>,
}

/// A contract deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Contract code.
    #[serde(with = "base64_bytes")]
    pub contract_bytes: Vec<u8>,
    /// SHA3-256 of `contract_bytes`.
    pub contract_hash: Identifier,
    /// Contract version string.
    pub version: String,
    /// Functions exported by the contract.
    pub abi: Abi,
}

/// Contract interface description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abi {
    pub functions: Vec<FunctionSignature>,
}

impl Abi {
    /// Creates an ABI from a list of function signatures.
    pub fn new(functions: Vec<FunctionSignature>) -> Self {
        Self { functions }
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// One exported contract function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub function_type: FunctionType,
    pub function_name: String,
}

impl FunctionSignature {
    /// A read-only function, callable without a transaction.
    pub fn read(name: impl Into<String>) -> Self {
        Self {
            function_type: FunctionType::Read,
            function_name: name.into(),
        }
    }

    /// A state-changing function, callable only through a transaction.
    pub fn write(name: impl Into<String>) -> Self {
        Self {
            function_type: FunctionType::Write,
            function_name: name.into(),
        }
    }
}

/// Whether a contract function may mutate channel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionType {
    Read,
    Write,
}
