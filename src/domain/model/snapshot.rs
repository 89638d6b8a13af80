//! Model Snapshot - The persisted layout of a decision model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expert name → criterion name → matrix rows.
pub type ExpertMatrixRows = BTreeMap<String, BTreeMap<String, Vec<Vec<f64>>>>;

/// Full-state snapshot used for export, import and storage.
///
/// Matrices are nested numeric arrays in row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    /// Absent in a document means no expert matrices.
    #[serde(default)]
    pub expert_matrices: ExpertMatrixRows,
}

impl ModelSnapshot {
    /// Number of stored (expert, criterion) matrices.
    pub fn matrix_count(&self) -> usize {
        self.expert_matrices.values().map(BTreeMap::len).sum()
    }
}

/// One expert's stored matrix with rows and columns named by alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMatrix {
    pub expert: String,
    /// Alternative names, labelling both rows and columns in order.
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}
