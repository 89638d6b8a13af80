//! Analysis error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Preconditions violated by a pure analysis computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Consistency index is undefined for a {dimension}x{dimension} matrix")]
    UndefinedConsistency { dimension: usize },

    #[error("No random index is tabulated for a {dimension}x{dimension} matrix")]
    NoRandomIndex { dimension: usize },

    #[error(
        "Matrix from expert '{expert}' for criterion '{criterion}' is {actual}x{actual}, \
         expected {expected}x{expected}"
    )]
    DimensionMismatch {
        expert: String,
        criterion: String,
        expected: usize,
        actual: usize,
    },

    #[error("At least one criterion is required to rank alternatives")]
    NoCriteria,
}

impl AnalysisError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::UndefinedConsistency { .. } | AnalysisError::NoRandomIndex { .. } => {
                ErrorCode::UndefinedConsistency
            }
            AnalysisError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            AnalysisError::NoCriteria => ErrorCode::NoCriteria,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            AnalysisError::DimensionMismatch {
                expert, criterion, ..
            } => base
                .with_detail("expert", expert)
                .with_detail("criterion", criterion),
            _ => base,
        }
    }
}
