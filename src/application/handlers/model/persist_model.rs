//! Save/Load handlers - Persist the model through the storage port.
//!
//! Both hold the model's write lock for the whole operation so no mutation
//! interleaves with a full-state read or replace.

use std::sync::Arc;
use tracing::info;

use super::SharedModel;
use crate::domain::foundation::DomainError;
use crate::ports::ModelStorage;

/// Command to save the model. `None` uses the configured default name.
#[derive(Debug, Clone, Default)]
pub struct SaveModelCommand {
    pub filename: Option<String>,
}

/// Command to load the model. `None` uses the configured default name.
#[derive(Debug, Clone, Default)]
pub struct LoadModelCommand {
    pub filename: Option<String>,
}

/// Result of a save or load.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistModelResult {
    pub filename: String,
    pub alternatives: usize,
    pub criteria: usize,
    pub matrices: usize,
}

fn resolve_filename(requested: Option<String>, default_name: &str) -> String {
    requested
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| default_name.to_string())
}

/// Handler for saving the model.
pub struct SaveModelHandler {
    model: SharedModel,
    storage: Arc<dyn ModelStorage>,
    default_name: String,
}

impl SaveModelHandler {
    pub fn new(
        model: SharedModel,
        storage: Arc<dyn ModelStorage>,
        default_name: impl Into<String>,
    ) -> Self {
        Self {
            model,
            storage,
            default_name: default_name.into(),
        }
    }

    pub async fn handle(&self, cmd: SaveModelCommand) -> Result<PersistModelResult, DomainError> {
        let filename = resolve_filename(cmd.filename, &self.default_name);

        let model = self.model.write().await;
        let snapshot = model.export_state();
        self.storage.save(&filename, &snapshot).await?;

        info!(
            filename = %filename,
            matrices = snapshot.matrix_count(),
            "Saved model snapshot"
        );

        Ok(PersistModelResult {
            filename,
            alternatives: snapshot.alternatives.len(),
            criteria: snapshot.criteria.len(),
            matrices: snapshot.matrix_count(),
        })
    }
}

/// Handler for loading the model.
pub struct LoadModelHandler {
    model: SharedModel,
    storage: Arc<dyn ModelStorage>,
    default_name: String,
}

impl LoadModelHandler {
    pub fn new(
        model: SharedModel,
        storage: Arc<dyn ModelStorage>,
        default_name: impl Into<String>,
    ) -> Self {
        Self {
            model,
            storage,
            default_name: default_name.into(),
        }
    }

    pub async fn handle(&self, cmd: LoadModelCommand) -> Result<PersistModelResult, DomainError> {
        let filename = resolve_filename(cmd.filename, &self.default_name);

        let mut model = self.model.write().await;
        let snapshot = self.storage.load(&filename).await?;
        let result = PersistModelResult {
            filename,
            alternatives: snapshot.alternatives.len(),
            criteria: snapshot.criteria.len(),
            matrices: snapshot.matrix_count(),
        };
        model.import_state(snapshot)?;

        info!(
            filename = %result.filename,
            matrices = result.matrices,
            "Loaded model snapshot"
        );

        Ok(result)
    }
}
