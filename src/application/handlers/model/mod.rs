//! Decision model command and query handlers.
//!
//! Every handler wraps the shared [`SharedModel`]. Commands take the write
//! lock, queries the read lock, so concurrent requests are serialized.

mod compute_ranking;
mod get_inconsistency_indices;
mod get_model_overview;
mod persist_model;
mod register_alternative;
mod register_criterion;
mod register_expert;
mod reset_model;
mod submit_matrix;
mod transfer_snapshot;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::model::DecisionModel;

pub use compute_ranking::{
    AllRankingsResult, ComputeRankingHandler, ComputeRankingQuery, RankingsByMethod,
};
pub use get_inconsistency_indices::{
    GetInconsistencyIndicesHandler, GetInconsistencyIndicesQuery, InconsistencyReport,
};
pub use get_model_overview::{GetModelOverviewHandler, ModelOverview};
pub use persist_model::{
    LoadModelCommand, LoadModelHandler, PersistModelResult, SaveModelCommand, SaveModelHandler,
};
pub use register_alternative::{
    RegisterAlternativeCommand, RegisterAlternativeHandler, RegisterAlternativeResult,
};
pub use register_criterion::{
    RegisterCriterionCommand, RegisterCriterionHandler, RegisterCriterionResult,
};
pub use register_expert::{RegisterExpertCommand, RegisterExpertHandler, RegisterExpertResult};
pub use reset_model::ResetModelHandler;
pub use submit_matrix::{SubmitMatrixCommand, SubmitMatrixHandler, SubmitMatrixResult};
pub use transfer_snapshot::{ExportSnapshotHandler, ImportSnapshotCommand, ImportSnapshotHandler};

/// The decision model behind its mutual-exclusion wrapper.
pub type SharedModel = Arc<RwLock<DecisionModel>>;

/// Wraps a model for sharing between handlers.
pub fn shared_model(model: DecisionModel) -> SharedModel {
    Arc::new(RwLock::new(model))
}

/// Trims a submitted name, rejecting blank input.
pub(crate) fn require_name(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field).into());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn require_name_trims() {
        assert_eq!(require_name("name", "  cost ").unwrap(), "cost");
    }

    #[test]
    fn require_name_rejects_blank() {
        let err = require_name("criterion_name", "   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("criterion_name"));
    }
}
