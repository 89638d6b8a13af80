//! File-based Model Storage Adapter
//!
//! Stores each snapshot as one file in a base directory. Names ending in
//! `.yaml`/`.yml` are written as YAML, everything else as pretty JSON.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::model::ModelSnapshot;
use crate::ports::{ModelStorage, ModelStorageError};

/// Serialization format chosen from the snapshot name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            SnapshotFormat::Yaml
        } else {
            SnapshotFormat::Json
        }
    }

    fn serialize(self, snapshot: &ModelSnapshot) -> Result<String, ModelStorageError> {
        match self {
            SnapshotFormat::Json => serde_json::to_string_pretty(snapshot)
                .map_err(|e| ModelStorageError::SerializationFailed(e.to_string())),
            SnapshotFormat::Yaml => serde_yaml::to_string(snapshot)
                .map_err(|e| ModelStorageError::SerializationFailed(e.to_string())),
        }
    }

    fn deserialize(self, content: &str) -> Result<ModelSnapshot, ModelStorageError> {
        match self {
            SnapshotFormat::Json => serde_json::from_str(content)
                .map_err(|e| ModelStorageError::DeserializationFailed(e.to_string())),
            SnapshotFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ModelStorageError::DeserializationFailed(e.to_string())),
        }
    }
}

/// File-based storage for model snapshots
#[derive(Debug, Clone)]
pub struct FileModelStorage {
    base_path: PathBuf,
}

impl FileModelStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileModelStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a snapshot name to a file inside the base directory
    fn snapshot_path(&self, name: &str) -> Result<PathBuf, ModelStorageError> {
        if name.trim().is_empty() {
            return Err(ModelStorageError::invalid_name(name, "name is empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ModelStorageError::invalid_name(
                name,
                "name must not contain path separators",
            ));
        }
        if name.contains("..") {
            return Err(ModelStorageError::invalid_name(name, "name must not contain '..'"));
        }
        Ok(self.base_path.join(name))
    }

    async fn ensure_base_dir(&self) -> Result<(), ModelStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ModelStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl ModelStorage for FileModelStorage {
    async fn save(&self, name: &str, snapshot: &ModelSnapshot) -> Result<(), ModelStorageError> {
        let path = self.snapshot_path(name)?;
        self.ensure_base_dir().await?;

        let content = SnapshotFormat::from_name(name).serialize(snapshot)?;

        fs::write(&path, content)
            .await
            .map_err(|e| ModelStorageError::IoError(e.to_string()))
    }

    async fn load(&self, name: &str) -> Result<ModelSnapshot, ModelStorageError> {
        let path = self.snapshot_path(name)?;

        if !path.exists() {
            return Err(ModelStorageError::NotFound(name.to_string()));
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| ModelStorageError::IoError(e.to_string()))?;

        SnapshotFormat::from_name(name).deserialize(&content)
    }

    async fn exists(&self, name: &str) -> Result<bool, ModelStorageError> {
        Ok(self.snapshot_path(name)?.is_file())
    }

    async fn delete(&self, name: &str) -> Result<(), ModelStorageError> {
        let path = self.snapshot_path(name)?;

        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| ModelStorageError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn test_snapshot() -> ModelSnapshot {
        let mut snapshot = ModelSnapshot {
            alternatives: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            criteria: vec!["cost".to_string()],
            ..Default::default()
        };
        snapshot.expert_matrices.insert(
            "alice".to_string(),
            BTreeMap::from([(
                "cost".to_string(),
                vec![
                    vec![1.0, 3.0, 7.0],
                    vec![1.0 / 3.0, 1.0, 5.0],
                    vec![1.0 / 7.0, 0.2, 1.0],
                ],
            )]),
        );
        snapshot.expert_matrices.insert("bob".to_string(), BTreeMap::new());
        snapshot
    }

    #[tokio::test]
    async fn test_file_storage_save_and_load_json() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path());
        let snapshot = test_snapshot();

        storage.save("ahp_model.json", &snapshot).await.unwrap();
        let loaded = storage.load("ahp_model.json").await.unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn test_file_storage_json_is_pretty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path());

        storage.save("model.json", &test_snapshot()).await.unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("model.json")).unwrap();
        assert!(content.contains("\n  \"alternatives\""));
    }

    #[tokio::test]
    async fn test_file_storage_save_and_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path());
        let snapshot = test_snapshot();

        storage.save("model.yaml", &snapshot).await.unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("model.yaml")).unwrap();
        assert!(content.contains("alternatives:"));

        let loaded = storage.load("model.yaml").await.unwrap();
        assert_eq!(loaded.alternatives, snapshot.alternatives);
        assert_eq!(loaded.expert_matrices.len(), 2);
    }

    #[tokio::test]
    async fn test_file_storage_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path());

        let result = storage.load("missing.json").await;

        assert!(matches!(result, Err(ModelStorageError::NotFound(name)) if name == "missing.json"));
    }

    #[tokio::test]
    async fn test_file_storage_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path());
        std::fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();

        let result = storage.load("broken.json").await;

        assert!(matches!(result, Err(ModelStorageError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn test_file_storage_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path());

        for name in ["../escape.json", "nested/model.json", "..", "  "] {
            let result = storage.save(name, &test_snapshot()).await;
            assert!(
                matches!(result, Err(ModelStorageError::InvalidName { .. })),
                "accepted {name:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_file_storage_creates_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path().join("snapshots"));

        storage.save("model.json", &test_snapshot()).await.unwrap();

        assert!(temp_dir.path().join("snapshots").join("model.json").is_file());
    }

    #[tokio::test]
    async fn test_file_storage_exists_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path());

        assert!(!storage.exists("model.json").await.unwrap());

        storage.save("model.json", &test_snapshot()).await.unwrap();
        assert!(storage.exists("model.json").await.unwrap());

        storage.delete("model.json").await.unwrap();
        assert!(!storage.exists("model.json").await.unwrap());

        // Deleting again is a no-op
        storage.delete("model.json").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_storage_overwrites_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileModelStorage::new(temp_dir.path());

        storage.save("model.json", &test_snapshot()).await.unwrap();
        storage.save("model.json", &ModelSnapshot::default()).await.unwrap();

        let loaded = storage.load("model.json").await.unwrap();
        assert!(loaded.alternatives.is_empty());
    }
}
