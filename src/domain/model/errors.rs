//! Decision model error types.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by matrix store operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Invalid matrix from expert '{expert}' for criterion '{criterion}': {source}")]
    InvalidMatrix {
        expert: String,
        criterion: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl ModelError {
    pub fn invalid_matrix(
        expert: impl Into<String>,
        criterion: impl Into<String>,
        source: ValidationError,
    ) -> Self {
        ModelError::InvalidMatrix {
            expert: expert.into(),
            criterion: criterion.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ModelError::InvalidMatrix { .. } => ErrorCode::InvalidMatrix,
            ModelError::InvalidSnapshot(_) => ErrorCode::ValidationFailed,
            ModelError::Analysis(err) => err.code(),
        }
    }
}

impl From<ModelError> for DomainError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Analysis(inner) => inner.into(),
            ModelError::InvalidMatrix {
                ref expert,
                ref criterion,
                ..
            } => DomainError::new(err.code(), err.to_string())
                .with_detail("expert", expert.clone())
                .with_detail("criterion", criterion.clone()),
            ModelError::InvalidSnapshot(_) => DomainError::new(err.code(), err.to_string()),
        }
    }
}
