//! Model Storage Port - Interface for persisting decision model snapshots.
//!
//! Persistence is full-state: a snapshot is written and read whole, under
//! the caller's exclusive lock on the model.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::model::ModelSnapshot;

/// Errors that can occur during model storage operations
#[derive(Debug, thiserror::Error)]
pub enum ModelStorageError {
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    #[error("Invalid snapshot name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl ModelStorageError {
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelStorageError::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<ModelStorageError> for DomainError {
    fn from(err: ModelStorageError) -> Self {
        match &err {
            ModelStorageError::NotFound(name) => {
                DomainError::new(ErrorCode::SnapshotNotFound, err.to_string())
                    .with_detail("filename", name.clone())
            }
            ModelStorageError::InvalidName { name, .. } => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
                    .with_detail("filename", name.clone())
            }
            ModelStorageError::DeserializationFailed(_) => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
            }
            ModelStorageError::SerializationFailed(_) | ModelStorageError::IoError(_) => {
                DomainError::new(ErrorCode::StorageError, err.to_string())
            }
        }
    }
}

/// Port for saving and loading model snapshots by name
#[async_trait]
pub trait ModelStorage: Send + Sync {
    /// Save a snapshot, replacing any snapshot with the same name
    ///
    /// # Errors
    /// Returns `ModelStorageError` if the name is invalid or the write fails
    async fn save(&self, name: &str, snapshot: &ModelSnapshot) -> Result<(), ModelStorageError>;

    /// Load a snapshot
    ///
    /// # Errors
    /// Returns `ModelStorageError::NotFound` if no snapshot exists
    async fn load(&self, name: &str) -> Result<ModelSnapshot, ModelStorageError>;

    /// Check if a snapshot exists
    async fn exists(&self, name: &str) -> Result<bool, ModelStorageError>;

    /// Delete a snapshot. Deleting a missing snapshot is not an error.
    async fn delete(&self, name: &str) -> Result<(), ModelStorageError>;
}
