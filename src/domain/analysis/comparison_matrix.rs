//! Comparison Matrix - Validated, fully populated pairwise comparison matrix.

use nalgebra::DMatrix;

use super::completion::{CompletionReport, MatrixCompleter, MISSING};
use super::ComparisonScale;
use crate::domain::foundation::ValidationError;

/// Default tolerance for `|m[i][j] * m[j][i] - 1|`.
///
/// Wide enough for two-decimal reciprocals such as `3 x 0.33`.
pub const DEFAULT_RECIPROCAL_TOLERANCE: f64 = 0.05;

/// Rules applied when raw judgements are turned into a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixPolicy {
    /// Allowed deviation of populated reciprocal pairs (and the diagonal) from 1.
    pub reciprocal_tolerance: f64,
    /// When set, judgements are snapped to this scale before validation.
    pub scale: Option<ComparisonScale>,
}

impl Default for MatrixPolicy {
    fn default() -> Self {
        Self {
            reciprocal_tolerance: DEFAULT_RECIPROCAL_TOLERANCE,
            scale: None,
        }
    }
}

/// A square matrix of positive judgements with no missing cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    values: DMatrix<f64>,
}

impl ComparisonMatrix {
    /// Builds a matrix from submitted judgements, completing missing cells.
    ///
    /// A raw cell is missing when it is `None` or exactly `0.0`.
    ///
    /// # Errors
    /// - Wrong number of rows or cells per row for `dimension`
    /// - Negative or non-finite judgement
    /// - Populated diagonal cell that is not 1
    /// - Populated pair that violates the reciprocal property
    pub fn from_judgements(
        raw: &[Vec<Option<f64>>],
        dimension: usize,
        policy: &MatrixPolicy,
    ) -> Result<(Self, CompletionReport), ValidationError> {
        if dimension == 0 {
            return Err(ValidationError::invalid_format(
                "matrix",
                "no alternatives are registered",
            ));
        }
        Self::check_shape(raw.iter().map(Vec::len), raw.len(), dimension)?;

        let mut values = DMatrix::from_element(dimension, dimension, MISSING);
        for (i, row) in raw.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                let value = match *cell {
                    None => continue,
                    Some(v) if v == 0.0 => continue,
                    Some(v) if !v.is_finite() || v < 0.0 => {
                        return Err(ValidationError::invalid_format(
                            "matrix",
                            format!("cell ({}, {}) must be a positive number, got {}", i, j, v),
                        ));
                    }
                    Some(v) => v,
                };
                values[(i, j)] = policy.scale.map_or(value, |scale| scale.snap(value));
            }
        }

        Self::check_reciprocal(&values, policy.reciprocal_tolerance)?;
        let report = MatrixCompleter::complete(&mut values);

        Ok((Self { values }, report))
    }

    /// Rebuilds a stored matrix from its rows. Cells must all be populated.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ValidationError> {
        let n = rows.len();
        if n == 0 {
            return Err(ValidationError::invalid_format("matrix", "matrix is empty"));
        }
        Self::check_shape(rows.iter().map(Vec::len), n, n)?;

        if let Some(v) = rows.iter().flatten().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(ValidationError::invalid_format(
                "matrix",
                format!("cells must be positive numbers, got {}", v),
            ));
        }

        Ok(Self {
            values: DMatrix::from_fn(n, n, |i, j| rows[i][j]),
        })
    }

    /// The all-ones matrix: every alternative judged equal to every other.
    pub fn indifferent(dimension: usize) -> Self {
        Self {
            values: DMatrix::from_element(dimension, dimension, 1.0),
        }
    }

    /// Number of alternatives compared.
    pub fn dimension(&self) -> usize {
        self.values.nrows()
    }

    /// Judgement of alternative `row` over alternative `col`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[(row, col)]
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Rows in order, for serialization.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Checks unit diagonal and `m[i][j] * m[j][i] ≈ 1` for every pair.
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        Self::check_reciprocal(&self.values, tolerance).is_ok()
    }

    fn check_shape(
        row_lengths: impl Iterator<Item = usize>,
        row_count: usize,
        dimension: usize,
    ) -> Result<(), ValidationError> {
        if row_count != dimension {
            return Err(ValidationError::invalid_format(
                "matrix",
                format!("expected {} rows, got {}", dimension, row_count),
            ));
        }
        for (i, len) in row_lengths.enumerate() {
            if len != dimension {
                return Err(ValidationError::invalid_format(
                    "matrix",
                    format!("row {} has {} cells, expected {}", i, len, dimension),
                ));
            }
        }
        Ok(())
    }

    /// Missing cells are skipped.
    fn check_reciprocal(values: &DMatrix<f64>, tolerance: f64) -> Result<(), ValidationError> {
        let n = values.nrows();
        for i in 0..n {
            let diagonal = values[(i, i)];
            if !MatrixCompleter::is_missing(diagonal) && (diagonal - 1.0).abs() > tolerance {
                return Err(ValidationError::invalid_format(
                    "matrix",
                    format!("diagonal cell ({}, {}) must be 1, got {}", i, i, diagonal),
                ));
            }
            for j in (i + 1)..n {
                let (a, b) = (values[(i, j)], values[(j, i)]);
                if MatrixCompleter::is_missing(a) || MatrixCompleter::is_missing(b) {
                    continue;
                }
                if (a * b - 1.0).abs() > tolerance {
                    return Err(ValidationError::invalid_format(
                        "matrix",
                        format!(
                            "cells ({}, {}) and ({}, {}) are not reciprocal: {} x {}",
                            i, j, j, i, a, b
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}
