//! Transaction errors.

use thiserror::Error;

use crate::crypto::SignatureError;
use crate::identity::{Identifier, IdentifierError};

/// A builder was asked to sign with a required field missing or empty.
///
/// Nothing is signed when one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The entry setter (`call`, `account`, ...) was never called, so the
    /// sender and channel are unknown.
    #[error("missing sender and channel")]
    MissingEnvelope,

    #[error("function name must not be empty")]
    EmptyFunctionName,

    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("missing account to authorize")]
    MissingAccount,

    #[error("missing channel owner")]
    MissingOwner,

    /// A contract builder without deploy, pause or delete selected.
    #[error("no contract operation selected")]
    MissingContractOperation,
}

/// Errors from building, signing or checking a transaction.
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("canonical encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error("cannot derive signer: {0}")]
    Signer(#[from] IdentifierError),

    #[error("signature does not verify against signer {signer}")]
    VerificationFailed { signer: Identifier },
}
