//! RegisterCriterionHandler - Command handler for adding criteria.

use super::{require_name, SharedModel};
use crate::domain::foundation::DomainError;

/// Command to append a criterion.
#[derive(Debug, Clone)]
pub struct RegisterCriterionCommand {
    pub name: String,
}

/// Result of successful registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterCriterionResult {
    pub index: usize,
    pub criteria: Vec<String>,
}

/// Handler for registering criteria.
pub struct RegisterCriterionHandler {
    model: SharedModel,
}

impl RegisterCriterionHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(
        &self,
        cmd: RegisterCriterionCommand,
    ) -> Result<RegisterCriterionResult, DomainError> {
        let name = require_name("criterion_name", &cmd.name)?;

        let mut model = self.model.write().await;
        let index = model.register_criterion(name);

        Ok(RegisterCriterionResult {
            index,
            criteria: model.criteria().to_vec(),
        })
    }
}
