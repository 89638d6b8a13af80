//! Priority Calculator - Local weights and expert aggregation.

use nalgebra::{DMatrix, DVector};

use super::ComparisonMatrix;

/// Stateless priority computations shared by the rankers.
pub struct PriorityCalculator;

impl PriorityCalculator {
    /// Derives a local weight vector: normalize each column to sum 1, then
    /// average each row.
    ///
    /// # Edge Cases
    /// - Column summing to zero: left unnormalized
    /// - Empty matrix: empty vector
    pub fn local_priorities(matrix: &DMatrix<f64>) -> DVector<f64> {
        let n = matrix.nrows();
        if n == 0 {
            return DVector::zeros(0);
        }

        let mut normalized = matrix.clone();
        for mut column in normalized.column_iter_mut() {
            let sum = column.sum();
            if sum != 0.0 {
                column /= sum;
            }
        }

        DVector::from_fn(n, |i, _| normalized.row(i).mean())
    }

    /// Element-wise mean of expert matrices (equal expert weight).
    ///
    /// With no matrices, falls back to the all-ones matrix.
    pub fn mean_matrix(matrices: &[&ComparisonMatrix], dimension: usize) -> DMatrix<f64> {
        if matrices.is_empty() {
            return ComparisonMatrix::indifferent(dimension).values().clone();
        }
        let weight = 1.0 / matrices.len() as f64;
        let weighted: Vec<(&ComparisonMatrix, f64)> =
            matrices.iter().map(|m| (*m, weight)).collect();
        Self::weighted_matrix(&weighted, dimension)
    }

    /// Weighted sum of expert matrices. Weights are used as given.
    ///
    /// With no matrices, falls back to the all-ones matrix.
    pub fn weighted_matrix(
        matrices: &[(&ComparisonMatrix, f64)],
        dimension: usize,
    ) -> DMatrix<f64> {
        if matrices.is_empty() {
            return ComparisonMatrix::indifferent(dimension).values().clone();
        }
        matrices.iter().fold(
            DMatrix::zeros(dimension, dimension),
            |acc, (matrix, weight)| acc + matrix.values() * *weight,
        )
    }
}
