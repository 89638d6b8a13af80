//! GetInconsistencyIndicesHandler - Query handler for per-matrix consistency.

use std::collections::BTreeMap;

use super::SharedModel;
use crate::domain::analysis::ConsistencyScore;
use crate::domain::foundation::DomainError;

/// Query for consistency of every stored matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetInconsistencyIndicesQuery;

/// Expert → criterion → consistency index and ratio.
pub type InconsistencyReport = BTreeMap<String, BTreeMap<String, ConsistencyScore>>;

/// Handler for consistency queries.
pub struct GetInconsistencyIndicesHandler {
    model: SharedModel,
}

impl GetInconsistencyIndicesHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(
        &self,
        _query: GetInconsistencyIndicesQuery,
    ) -> Result<InconsistencyReport, DomainError> {
        let model = self.model.read().await;
        Ok(model.inconsistency_report()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::model::shared_model;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::model::DecisionModel;

    #[tokio::test]
    async fn reports_each_stored_pair() {
        let mut model = DecisionModel::new();
        for name in ["A", "B", "C"] {
            model.register_alternative(name);
        }
        model.register_criterion("cost");
        model
            .submit_matrix(
                "alice",
                "cost",
                &[
                    vec![Some(1.0), Some(2.0), Some(4.0)],
                    vec![Some(0.5), Some(1.0), Some(2.0)],
                    vec![Some(0.25), Some(0.5), Some(1.0)],
                ],
            )
            .unwrap();
        let handler = GetInconsistencyIndicesHandler::new(shared_model(model));

        let report = handler.handle(GetInconsistencyIndicesQuery).await.unwrap();

        let score = report["alice"]["cost"];
        assert!(score.index.abs() < 1e-9);
        assert!(score.ratio.unwrap().abs() < 1e-9);
    }

    #[tokio::test]
    async fn single_alternative_is_undefined() {
        let mut model = DecisionModel::new();
        model.register_alternative("A");
        model.register_criterion("cost");
        model
            .submit_matrix("alice", "cost", &[vec![Some(1.0)]])
            .unwrap();
        let handler = GetInconsistencyIndicesHandler::new(shared_model(model));

        let err = handler
            .handle(GetInconsistencyIndicesQuery)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UndefinedConsistency);
    }
}
