//! HTTP DTOs for decision model endpoints.
//!
//! Snapshots, overviews and rankings are already serializable domain types
//! and are re-exported directly.

pub use crate::application::handlers::model::{ModelOverview, RankingsByMethod};
pub use crate::domain::analysis::RankedAlternative;
pub use crate::domain::model::{LabeledMatrix, ModelSnapshot};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::model::{
    AllRankingsResult, InconsistencyReport, PersistModelResult, RegisterAlternativeResult,
    RegisterCriterionResult, RegisterExpertResult, SubmitMatrixResult,
};
use crate::domain::analysis::{CompletionReport, RankingMethod};
use crate::domain::foundation::DomainError;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to register an alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct AddAlternativeRequest {
    pub alternative_name: String,
}

/// Request to register a criterion.
#[derive(Debug, Clone, Deserialize)]
pub struct AddCriterionRequest {
    pub criterion_name: String,
}

/// Request to register an expert.
#[derive(Debug, Clone, Deserialize)]
pub struct AddExpertRequest {
    pub expert_name: String,
}

/// Request to submit a comparison matrix.
///
/// A cell is a number or `null`; `null` and `0` mark a missing judgement.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitMatrixRequest {
    pub expert_name: String,
    pub criterion: String,
    pub matrix: Vec<Vec<Option<f64>>>,
}

/// Request to save or load a snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersistRequest {
    #[serde(default)]
    pub filename: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response after registering an alternative.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeAddedResponse {
    pub message: String,
    pub index: usize,
    pub alternatives: Vec<String>,
}

impl From<RegisterAlternativeResult> for AlternativeAddedResponse {
    fn from(result: RegisterAlternativeResult) -> Self {
        let name = result.alternatives.get(result.index).cloned().unwrap_or_default();
        Self {
            message: format!("Alternative '{}' added", name),
            index: result.index,
            alternatives: result.alternatives,
        }
    }
}

/// Response after registering a criterion.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionAddedResponse {
    pub message: String,
    pub index: usize,
    pub criteria: Vec<String>,
}

impl From<RegisterCriterionResult> for CriterionAddedResponse {
    fn from(result: RegisterCriterionResult) -> Self {
        let name = result.criteria.get(result.index).cloned().unwrap_or_default();
        Self {
            message: format!("Criterion '{}' added", name),
            index: result.index,
            criteria: result.criteria,
        }
    }
}

/// Response after registering an expert.
#[derive(Debug, Clone, Serialize)]
pub struct ExpertAddedResponse {
    pub message: String,
    pub expert_name: String,
    pub created: bool,
    pub experts: Vec<String>,
}

impl From<RegisterExpertResult> for ExpertAddedResponse {
    fn from(result: RegisterExpertResult) -> Self {
        let message = if result.created {
            format!("Expert '{}' added", result.expert)
        } else {
            format!("Expert '{}' already registered", result.expert)
        };
        Self {
            message,
            expert_name: result.expert,
            created: result.created,
            experts: result.experts,
        }
    }
}

/// Cells filled in by completion, by rule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompletionDto {
    pub mirrored: usize,
    pub inferred: usize,
    pub defaulted: usize,
}

impl From<CompletionReport> for CompletionDto {
    fn from(report: CompletionReport) -> Self {
        Self {
            mirrored: report.mirrored,
            inferred: report.inferred,
            defaulted: report.defaulted,
        }
    }
}

/// Response after storing a matrix.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixSubmittedResponse {
    pub message: String,
    pub expert_name: String,
    pub criterion: String,
    pub replaced: bool,
    pub completed_cells: CompletionDto,
    pub matrix: Vec<Vec<f64>>,
}

impl From<SubmitMatrixResult> for MatrixSubmittedResponse {
    fn from(result: SubmitMatrixResult) -> Self {
        Self {
            message: format!(
                "Matrix for expert '{}' on criterion '{}' stored",
                result.expert, result.criterion
            ),
            expert_name: result.expert,
            criterion: result.criterion,
            replaced: result.replaced,
            completed_cells: result.completion.into(),
            matrix: result.matrix,
        }
    }
}

/// One ranking method's result.
#[derive(Debug, Clone, Serialize)]
pub struct RankingResponse {
    pub method: RankingMethod,
    pub label: &'static str,
    pub ranking: Vec<RankedAlternative>,
}

impl RankingResponse {
    pub fn new(method: RankingMethod, ranking: Vec<RankedAlternative>) -> Self {
        Self {
            method,
            label: method.label(),
            ranking,
        }
    }
}

/// Every method's result plus the indices and matrices behind it.
#[derive(Debug, Clone, Serialize)]
pub struct AllRankingsResponse {
    pub rankings: RankingsByMethod,
    pub inconsistency_indices: BTreeMap<String, BTreeMap<String, f64>>,
    pub matrices_with_labels: BTreeMap<String, Vec<LabeledMatrix>>,
}

impl From<AllRankingsResult> for AllRankingsResponse {
    fn from(result: AllRankingsResult) -> Self {
        Self {
            rankings: result.rankings,
            inconsistency_indices: result.inconsistency_indices,
            matrices_with_labels: result.matrices_with_labels,
        }
    }
}

/// Consistency per expert and criterion.
#[derive(Debug, Clone, Serialize)]
pub struct InconsistencyResponse {
    /// Raw consistency index.
    pub indices: BTreeMap<String, BTreeMap<String, f64>>,
    /// Consistency ratio; `null` when the dimension has no random index.
    pub ratios: BTreeMap<String, BTreeMap<String, Option<f64>>>,
}

impl From<InconsistencyReport> for InconsistencyResponse {
    fn from(report: InconsistencyReport) -> Self {
        let mut indices = BTreeMap::new();
        let mut ratios = BTreeMap::new();
        for (expert, per_criterion) in report {
            indices.insert(
                expert.clone(),
                per_criterion
                    .iter()
                    .map(|(criterion, score)| (criterion.clone(), score.index))
                    .collect(),
            );
            ratios.insert(
                expert,
                per_criterion
                    .into_iter()
                    .map(|(criterion, score)| (criterion, score.ratio))
                    .collect(),
            );
        }
        Self { indices, ratios }
    }
}

/// Response after saving or loading.
#[derive(Debug, Clone, Serialize)]
pub struct PersistResponse {
    pub message: String,
    pub filename: String,
    pub alternatives: usize,
    pub criteria: usize,
    pub matrices: usize,
}

impl PersistResponse {
    pub fn saved(result: PersistModelResult) -> Self {
        Self::with_message(format!("Model saved to {}", result.filename), result)
    }

    pub fn loaded(result: PersistModelResult) -> Self {
        Self::with_message(format!("Model loaded from {}", result.filename), result)
    }

    fn with_message(message: String, result: PersistModelResult) -> Self {
        Self {
            message,
            filename: result.filename,
            alternatives: result.alternatives,
            criteria: result.criteria,
            matrices: result.matrices,
        }
    }
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Carries the domain error's code, message and details.
    pub fn from_domain(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            // Sorted for stable output
            let sorted: BTreeMap<_, _> = error.details.iter().collect();
            serde_json::to_value(sorted).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
