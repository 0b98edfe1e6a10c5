use super::Envelope;
use crate::identity::Identifier;
use crate::transaction::arguments::Argument;
use crate::transaction::envelope::Action;
use crate::transaction::error::ValidationError;
use crate::transaction::signing::SignTransaction;
use crate::transaction::types::{Call, Payload};

/// Builds a contract function call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallBuilder {
    envelope: Envelope,
    function: String,
    arguments: Vec<Argument>,
}

impl CallBuilder {
    /// Sets the envelope fields.
    pub fn call(
        mut self,
        sender: Identifier,
        channel: Identifier,
        nonce: u64,
        block_expiration_number: u64,
    ) -> Self {
        self.envelope = Envelope::new(sender, channel, nonce, block_expiration_number);
        self
    }

    pub fn function(mut self, name: impl Into<String>) -> Self {
        self.function = name.into();
        self
    }

    /// Appends arguments after any already set.
    pub fn arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }
}

impl SignTransaction for CallBuilder {
    fn build_action(&self) -> Result<Action, ValidationError> {
        if self.function.is_empty() {
            return Err(ValidationError::EmptyFunctionName);
        }
        self.envelope.seal(Payload::Call(Call {
            function: self.function.clone(),
            arguments: self.arguments.clone(),
        }))
    }
}
