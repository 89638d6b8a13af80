//! Consistency Evaluator - Eigenvalue-based consistency of pairwise judgements.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, ComparisonMatrix};

/// Saaty's random consistency index, indexed by matrix dimension (0..=10).
pub const RANDOM_INDEX: [f64; 11] = [
    0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49,
];

/// Indices within this distance of zero are eigen-solver noise and read as 0.
pub const CONSISTENCY_EPSILON: f64 = 1e-10;

/// Consistency measures for one expert's matrix on one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyScore {
    /// Raw consistency index `(λmax - n) / (n - 1)`.
    pub index: f64,
    /// `index / RI(n)`; `None` when no random index is tabulated for `n`.
    pub ratio: Option<f64>,
}

/// Consistency computations over comparison matrices.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Largest real part among the matrix's eigenvalues.
    pub fn principal_eigenvalue(matrix: &ComparisonMatrix) -> f64 {
        matrix
            .values()
            .complex_eigenvalues()
            .iter()
            .map(|eigenvalue| eigenvalue.re)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Computes the raw consistency index `(λmax - n) / (n - 1)`.
    ///
    /// No random-index normalization is applied; see [`Self::consistency_ratio`].
    ///
    /// # Edge Cases
    /// - n < 2: undefined, returns `UndefinedConsistency`
    /// - n = 2: exactly 0 (a reciprocal 2x2 matrix always has λmax = 2)
    /// - |CI| below [`CONSISTENCY_EPSILON`]: exactly 0
    pub fn consistency_index(matrix: &ComparisonMatrix) -> Result<f64, AnalysisError> {
        let n = matrix.dimension();
        match n {
            0 | 1 => Err(AnalysisError::UndefinedConsistency { dimension: n }),
            2 => Ok(0.0),
            _ => {
                let lambda_max = Self::principal_eigenvalue(matrix);
                let index = (lambda_max - n as f64) / (n as f64 - 1.0);
                Ok(if index.abs() < CONSISTENCY_EPSILON { 0.0 } else { index })
            }
        }
    }

    /// Saaty's random index for dimension `n`, if tabulated.
    pub fn random_index(n: usize) -> Option<f64> {
        RANDOM_INDEX.get(n).copied()
    }

    /// Consistency ratio `CI / RI(n)`, defined as 0 for n = 2.
    pub fn consistency_ratio(matrix: &ComparisonMatrix) -> Result<f64, AnalysisError> {
        let n = matrix.dimension();
        let index = Self::consistency_index(matrix)?;
        match Self::random_index(n) {
            Some(ri) if ri > 0.0 => Ok(index / ri),
            Some(_) => Ok(0.0),
            None => Err(AnalysisError::NoRandomIndex { dimension: n }),
        }
    }

    /// Index and, where tabulated, ratio.
    pub fn score(matrix: &ComparisonMatrix) -> Result<ConsistencyScore, AnalysisError> {
        let index = Self::consistency_index(matrix)?;
        let ratio = match Self::consistency_ratio(matrix) {
            Ok(ratio) => Some(ratio),
            Err(AnalysisError::NoRandomIndex { .. }) => None,
            Err(other) => return Err(other),
        };
        Ok(ConsistencyScore { index, ratio })
    }
}
