//! RegisterAlternativeHandler - Command handler for adding alternatives.

use super::{require_name, SharedModel};
use crate::domain::foundation::DomainError;

/// Command to append an alternative.
#[derive(Debug, Clone)]
pub struct RegisterAlternativeCommand {
    pub name: String,
}

/// Result of successful registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterAlternativeResult {
    pub index: usize,
    pub alternatives: Vec<String>,
}

/// Handler for registering alternatives.
pub struct RegisterAlternativeHandler {
    model: SharedModel,
}

impl RegisterAlternativeHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(
        &self,
        cmd: RegisterAlternativeCommand,
    ) -> Result<RegisterAlternativeResult, DomainError> {
        let name = require_name("alternative_name", &cmd.name)?;

        let mut model = self.model.write().await;
        let index = model.register_alternative(name);

        Ok(RegisterAlternativeResult {
            index,
            alternatives: model.alternatives().to_vec(),
        })
    }
}
