//! In-Memory Model Storage Adapter
//!
//! Keeps snapshots in a map. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::model::ModelSnapshot;
use crate::ports::{ModelStorage, ModelStorageError};

/// In-memory storage for model snapshots
#[derive(Debug, Clone, Default)]
pub struct InMemoryModelStorage {
    snapshots: Arc<RwLock<HashMap<String, ModelSnapshot>>>,
}

impl InMemoryModelStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored snapshots
    pub async fn snapshot_count(&self) -> usize {
        self.snapshots.read().await.len()
    }

    /// Clear all stored snapshots (useful for tests)
    pub async fn clear(&self) {
        self.snapshots.write().await.clear();
    }
}

#[async_trait]
impl ModelStorage for InMemoryModelStorage {
    async fn save(&self, name: &str, snapshot: &ModelSnapshot) -> Result<(), ModelStorageError> {
        if name.trim().is_empty() {
            return Err(ModelStorageError::invalid_name(name, "name is empty"));
        }
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(name.to_string(), snapshot.clone());
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<ModelSnapshot, ModelStorageError> {
        let snapshots = self.snapshots.read().await;
        snapshots
            .get(name)
            .cloned()
            .ok_or_else(|| ModelStorageError::NotFound(name.to_string()))
    }

    async fn exists(&self, name: &str) -> Result<bool, ModelStorageError> {
        Ok(self.snapshots.read().await.contains_key(name))
    }

    async fn delete(&self, name: &str) -> Result<(), ModelStorageError> {
        self.snapshots.write().await.remove(name);
        Ok(())
    }
}
