//! Matrix Completion - Fills missing pairwise judgements by transitive inference.

use nalgebra::DMatrix;

/// Sentinel marking a missing judgement.
pub const MISSING: f64 = f64::NAN;

/// How each missing cell was resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionReport {
    /// Taken as the reciprocal of the populated mirror cell.
    pub mirrored: usize,
    /// Inferred through a pivot alternative.
    pub inferred: usize,
    /// No inference path; set to indifference (1.0).
    pub defaulted: usize,
}

impl CompletionReport {
    /// Total number of off-diagonal cells that were filled.
    pub fn filled(&self) -> usize {
        self.mirrored + self.inferred + self.defaulted
    }
}

/// Missing-value completion for pairwise comparison matrices.
pub struct MatrixCompleter;

impl MatrixCompleter {
    /// Returns true if the value is the missing sentinel.
    pub fn is_missing(value: f64) -> bool {
        value.is_nan()
    }

    /// Returns true if any cell holds the missing sentinel.
    pub fn has_missing(values: &DMatrix<f64>) -> bool {
        values.iter().any(|v| Self::is_missing(*v))
    }

    /// Completes the matrix in place.
    ///
    /// # Algorithm
    /// Cells are visited row-major. For a missing `(i, j)`:
    /// 1. If `(j, i)` is populated, `(i, j) = 1 / (j, i)`.
    /// 2. Otherwise the first pivot `k` (ascending, `k != i, j`) with both
    ///    `(i, k)` and `(k, j)` populated gives `(i, j) = (i, k) * (k, j)`,
    ///    and `(j, i)` is set to its reciprocal.
    /// 3. Otherwise both cells are set to 1.0.
    ///
    /// Cells filled earlier in the pass count as populated for later cells,
    /// so the result depends on visiting order when the matrix is sparse.
    /// The diagonal is forced to 1.0 at the end.
    pub fn complete(values: &mut DMatrix<f64>) -> CompletionReport {
        let n = values.nrows();
        let mut report = CompletionReport::default();

        for i in 0..n {
            for j in 0..n {
                if i == j || !Self::is_missing(values[(i, j)]) {
                    continue;
                }

                let mirror = values[(j, i)];
                if !Self::is_missing(mirror) {
                    values[(i, j)] = 1.0 / mirror;
                    report.mirrored += 1;
                    continue;
                }

                let value = match Self::infer_through_pivot(values, i, j) {
                    Some(value) => {
                        report.inferred += 1;
                        value
                    }
                    None => {
                        report.defaulted += 1;
                        1.0
                    }
                };
                values[(i, j)] = value;
                values[(j, i)] = 1.0 / value;
            }
        }

        for i in 0..n {
            values[(i, i)] = 1.0;
        }

        report
    }

    /// First-match pivot search for `(i, j)`.
    fn infer_through_pivot(values: &DMatrix<f64>, i: usize, j: usize) -> Option<f64> {
        (0..values.nrows())
            .filter(|&k| k != i && k != j)
            .find_map(|k| {
                let (ik, kj) = (values[(i, k)], values[(k, j)]);
                (!Self::is_missing(ik) && !Self::is_missing(kj)).then_some(ik * kj)
            })
    }
}
