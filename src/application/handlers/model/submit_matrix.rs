//! SubmitMatrixHandler - Command handler for expert comparison matrices.
//!
//! The model ignores matrices for unregistered criteria; this handler turns
//! that outcome into a `CriterionNotFound` error for callers that need a
//! hard failure.

use super::{require_name, SharedModel};
use crate::domain::analysis::CompletionReport;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::model::SubmitOutcome;

/// Command to store one expert's matrix for one criterion.
#[derive(Debug, Clone)]
pub struct SubmitMatrixCommand {
    pub expert: String,
    pub criterion: String,
    /// Row-major judgements; `None` or `0` marks a missing cell.
    pub matrix: Vec<Vec<Option<f64>>>,
}

/// Result of a stored submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitMatrixResult {
    pub expert: String,
    pub criterion: String,
    pub completion: CompletionReport,
    pub replaced: bool,
    /// The stored matrix after completion.
    pub matrix: Vec<Vec<f64>>,
}

/// Handler for matrix submissions.
pub struct SubmitMatrixHandler {
    model: SharedModel,
}

impl SubmitMatrixHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(&self, cmd: SubmitMatrixCommand) -> Result<SubmitMatrixResult, DomainError> {
        let expert = require_name("expert_name", &cmd.expert)?;
        let criterion = require_name("criterion", &cmd.criterion)?;

        let mut model = self.model.write().await;
        match model.submit_matrix(&expert, &criterion, &cmd.matrix)? {
            SubmitOutcome::Stored { report, replaced } => {
                let matrix = model
                    .matrix(&expert, &criterion)
                    .map(|m| m.to_rows())
                    .ok_or_else(|| {
                        DomainError::new(ErrorCode::InternalError, "Stored matrix is missing")
                    })?;
                Ok(SubmitMatrixResult {
                    expert,
                    criterion,
                    completion: report,
                    replaced,
                    matrix,
                })
            }
            SubmitOutcome::CriterionNotRegistered => Err(DomainError::new(
                ErrorCode::CriterionNotFound,
                format!("Criterion '{}' is not registered", criterion),
            )
            .with_detail("criterion", criterion)),
        }
    }
}
