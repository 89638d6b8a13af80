//! RegisterExpertHandler - Command handler for adding experts.

use super::{require_name, SharedModel};
use crate::domain::foundation::DomainError;

/// Command to register an expert before any matrix is submitted.
#[derive(Debug, Clone)]
pub struct RegisterExpertCommand {
    pub name: String,
}

/// Result of registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterExpertResult {
    pub expert: String,
    /// False when the expert was already known.
    pub created: bool,
    pub experts: Vec<String>,
}

/// Handler for registering experts.
pub struct RegisterExpertHandler {
    model: SharedModel,
}

impl RegisterExpertHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(&self, cmd: RegisterExpertCommand) -> Result<RegisterExpertResult, DomainError> {
        let name = require_name("expert_name", &cmd.name)?;

        let mut model = self.model.write().await;
        let created = model.register_expert(name.clone());

        Ok(RegisterExpertResult {
            expert: name,
            created,
            experts: model.experts(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::model::shared_model;
    use crate::domain::model::DecisionModel;

    #[tokio::test]
    async fn second_registration_is_not_created() {
        let handler = RegisterExpertHandler::new(shared_model(DecisionModel::new()));

        let first = handler
            .handle(RegisterExpertCommand { name: "alice".into() })
            .await
            .unwrap();
        let second = handler
            .handle(RegisterExpertCommand { name: "alice".into() })
            .await
            .unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(second.experts, vec!["alice"]);
    }
}
