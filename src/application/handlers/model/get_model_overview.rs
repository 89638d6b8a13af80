//! GetModelOverviewHandler - Query handler for registered names.

use serde::Serialize;

use super::SharedModel;

/// Names registered in the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelOverview {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub experts: Vec<String>,
    pub number_of_alternatives: usize,
}

/// Handler for the model overview.
pub struct GetModelOverviewHandler {
    model: SharedModel,
}

impl GetModelOverviewHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(&self) -> ModelOverview {
        let model = self.model.read().await;
        ModelOverview {
            alternatives: model.alternatives().to_vec(),
            criteria: model.criteria().to_vec(),
            experts: model.experts(),
            number_of_alternatives: model.alternative_count(),
        }
    }
}
