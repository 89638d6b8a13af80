//! Snapshot export/import handlers.

use tracing::info;

use super::SharedModel;
use crate::domain::foundation::DomainError;
use crate::domain::model::ModelSnapshot;

/// Handler returning the full model state.
pub struct ExportSnapshotHandler {
    model: SharedModel,
}

impl ExportSnapshotHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(&self) -> ModelSnapshot {
        self.model.read().await.export_state()
    }
}

/// Command to replace the model with an uploaded snapshot.
#[derive(Debug, Clone)]
pub struct ImportSnapshotCommand {
    pub snapshot: ModelSnapshot,
}

/// Handler replacing the full model state.
pub struct ImportSnapshotHandler {
    model: SharedModel,
}

impl ImportSnapshotHandler {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub async fn handle(&self, cmd: ImportSnapshotCommand) -> Result<ModelSnapshot, DomainError> {
        let mut model = self.model.write().await;
        model.import_state(cmd.snapshot)?;

        info!(
            alternatives = model.alternative_count(),
            criteria = model.criteria().len(),
            experts = model.experts().len(),
            "Imported model snapshot"
        );

        Ok(model.export_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::model::shared_model;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::model::DecisionModel;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn export_then_import_round_trips() {
        let mut source = DecisionModel::new();
        source.register_alternative("A");
        source.register_alternative("B");
        source.register_criterion("cost");
        source
            .submit_matrix(
                "alice",
                "cost",
                &[vec![Some(1.0), Some(5.0)], vec![Some(0.2), Some(1.0)]],
            )
            .unwrap();
        let snapshot = ExportSnapshotHandler::new(shared_model(source)).handle().await;

        let target = shared_model(DecisionModel::new());
        let imported = ImportSnapshotHandler::new(target.clone())
            .handle(ImportSnapshotCommand {
                snapshot: snapshot.clone(),
            })
            .await
            .unwrap();

        assert_eq!(imported, snapshot);
        assert_eq!(target.read().await.export_state(), snapshot);
    }

    #[tokio::test]
    async fn invalid_snapshot_is_rejected() {
        let mut snapshot = ModelSnapshot {
            alternatives: vec!["A".into(), "B".into()],
            criteria: vec!["cost".into()],
            ..Default::default()
        };
        snapshot.expert_matrices.insert(
            "alice".into(),
            BTreeMap::from([("cost".to_string(), vec![vec![1.0, -2.0], vec![0.5, 1.0]])]),
        );
        let target = shared_model(DecisionModel::new());

        let err = ImportSnapshotHandler::new(target.clone())
            .handle(ImportSnapshotCommand { snapshot })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidMatrix);
        assert!(target.read().await.alternatives().is_empty());
    }
}
