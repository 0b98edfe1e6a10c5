use super::Envelope;
use crate::crypto::content_hash;
use crate::identity::Identifier;
use crate::transaction::envelope::Action;
use crate::transaction::error::ValidationError;
use crate::transaction::signing::SignTransaction;
use crate::transaction::types::{Abi, Contract, Payload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Deploy,
    Pause(bool),
    Delete,
}

/// Builds a contract deploy, pause/resume or delete.
///
/// Exactly one operation is signed: whichever of [`deploy`], [`pause`] or
/// [`delete`] was selected last. Setting the contract bytes, version or ABI
/// individually also selects deploy.
///
/// The content hash is computed from the contract bytes when signing, so
/// replacing the bytes and signing again always yields a matching hash.
///
/// [`deploy`]: ContractBuilder::deploy
/// [`pause`]: ContractBuilder::pause
/// [`delete`]: ContractBuilder::delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractBuilder {
    envelope: Envelope,
    operation: Option<Operation>,
    contract_bytes: Vec<u8>,
    version: String,
    abi: Abi,
}

impl ContractBuilder {
    /// Sets the envelope fields.
    pub fn contract(
        mut self,
        sender: Identifier,
        channel: Identifier,
        nonce: u64,
        block_expiration_number: u64,
    ) -> Self {
        self.envelope = Envelope::new(sender, channel, nonce, block_expiration_number);
        self
    }

    /// Selects deploy with all three deployment fields at once.
    pub fn deploy(self, version: impl Into<String>, abi: Abi, contract_bytes: Vec<u8>) -> Self {
        self.version(version).abi(abi).contract_bytes(contract_bytes)
    }

    pub fn contract_bytes(mut self, contract_bytes: Vec<u8>) -> Self {
        self.contract_bytes = contract_bytes;
        self.operation = Some(Operation::Deploy);
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self.operation = Some(Operation::Deploy);
        self
    }

    pub fn abi(mut self, abi: Abi) -> Self {
        self.abi = abi;
        self.operation = Some(Operation::Deploy);
        self
    }

    /// Selects pause (`true`) or resume (`false`).
    pub fn pause(mut self, paused: bool) -> Self {
        self.operation = Some(Operation::Pause(paused));
        self
    }

    /// Selects delete.
    pub fn delete(mut self) -> Self {
        self.operation = Some(Operation::Delete);
        self
    }

    fn deployment(&self) -> Result<Contract, ValidationError> {
        if self.contract_bytes.is_empty() {
            return Err(ValidationError::MissingRequiredField("contract bytes"));
        }
        if self.version.is_empty() {
            return Err(ValidationError::MissingRequiredField("version"));
        }
        if self.abi.is_empty() {
            return Err(ValidationError::MissingRequiredField("abi"));
        }
        Ok(Contract {
            contract_bytes: self.contract_bytes.clone(),
            contract_hash: content_hash(&self.contract_bytes),
            version: self.version.clone(),
            abi: self.abi.clone(),
        })
    }
}

impl SignTransaction for ContractBuilder {
    fn build_action(&self) -> Result<Action, ValidationError> {
        let payload = match self.operation {
            Some(Operation::Deploy) => Payload::Deploy(self.deployment()?),
            Some(Operation::Pause(paused)) => Payload::Pause(paused),
            Some(Operation::Delete) => Payload::Delete,
            None => return Err(ValidationError::MissingContractOperation),
        };
        self.envelope.seal(payload)
    }
}
