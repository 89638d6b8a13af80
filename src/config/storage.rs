//! Snapshot storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where model snapshots are kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for snapshot files (file backend only)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Snapshot name used when a save/load request names none
    #[serde(default = "default_snapshot")]
    pub default_snapshot: String,
}

/// Snapshot storage backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.default_snapshot.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingRequired("storage.default_snapshot"));
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(ValidationError::InvalidSnapshotName(name.to_string()));
        }
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            default_snapshot: default_snapshot(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_snapshot() -> String {
    "ahp_model.json".to_string()
}
