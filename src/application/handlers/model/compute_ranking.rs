//! ComputeRankingHandler - Query handler for ranked alternatives.

use std::collections::BTreeMap;

use serde::Serialize;

use super::SharedModel;
use crate::domain::analysis::{RankedAlternative, RankingMethod};
use crate::domain::foundation::DomainError;
use crate::domain::model::LabeledMatrix;

/// Query for a single ranking method.
#[derive(Debug, Clone, Copy)]
pub struct ComputeRankingQuery {
    pub method: RankingMethod,
}

/// Every method's ranking, keyed by method.
pub type RankingsByMethod = BTreeMap<RankingMethod, Vec<RankedAlternative>>;

/// Every ranking together with the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllRankingsResult {
    pub rankings: RankingsByMethod,
    /// Expert → criterion → consistency index.
    pub inconsistency_indices: BTreeMap<String, BTreeMap<String, f64>>,
    /// Criterion → each expert's labelled matrix.
    pub matrices_with_labels: BTreeMap<String, Vec<LabeledMatrix>>,
}

/// Handler for ranking queries.
pub struct ComputeRankingHandler {
    model: SharedModel,
}

impl ComputeRankingHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(
        &self,
        query: ComputeRankingQuery,
    ) -> Result<Vec<RankedAlternative>, DomainError> {
        let model = self.model.read().await;
        Ok(model.rank(query.method)?)
    }

    /// All three rankings, the consistency indices and the labelled
    /// matrices, read under one lock so they describe the same state.
    pub async fn handle_all(&self) -> Result<AllRankingsResult, DomainError> {
        let model = self.model.read().await;
        Ok(AllRankingsResult {
            rankings: model.rank_all()?,
            inconsistency_indices: model.inconsistency_indices()?,
            matrices_with_labels: model.labeled_matrices()?,
        })
    }
}
