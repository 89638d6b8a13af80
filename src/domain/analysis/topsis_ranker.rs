//! TOPSIS Ranker - Closeness to the ideal solution.

use nalgebra::{DMatrix, DVector};

use super::ranking::sorted_ranking;
use super::{AnalysisError, JudgementSet, PriorityCalculator, RankedAlternative};

/// Technique for Order Preference by Similarity to Ideal Solution.
pub struct TopsisRanker;

impl TopsisRanker {
    /// Ranks alternatives by closeness coefficient.
    ///
    /// # Algorithm
    /// 1. Decision matrix (alternatives x criteria) of basic local priorities
    /// 2. Vector-normalize each column, weight each criterion `1 / criteria`
    /// 3. Ideal = column max, anti-ideal = column min
    /// 4. Closeness = d⁻ / (d⁺ + d⁻)
    ///
    /// # Edge Cases
    /// - No criteria: `NoCriteria`
    /// - Zero column norm: divided by 1
    /// - Zero total distance: divided by 1, closeness 0
    pub fn rank(set: &JudgementSet<'_>) -> Result<Vec<RankedAlternative>, AnalysisError> {
        let criteria = set.criteria();
        if criteria.is_empty() {
            return Err(AnalysisError::NoCriteria);
        }

        let n = set.alternatives().len();
        let mut decision = DMatrix::<f64>::zeros(n, criteria.len());
        for (c, criterion) in criteria.iter().enumerate() {
            let aggregated = PriorityCalculator::mean_matrix(&criterion.matrices(), n);
            decision.set_column(c, &PriorityCalculator::local_priorities(&aggregated));
        }

        let closeness = Self::closeness_coefficients(&decision);
        Ok(sorted_ranking(set.alternatives(), &closeness))
    }

    /// Closeness coefficient per row of an alternatives x criteria matrix,
    /// with equal criterion weights. Every coefficient lies in [0, 1].
    pub fn closeness_coefficients(decision: &DMatrix<f64>) -> DVector<f64> {
        let (n, m) = decision.shape();
        if n == 0 || m == 0 {
            return DVector::zeros(n);
        }

        let weight = 1.0 / m as f64;
        let mut weighted = decision.clone();
        for mut column in weighted.column_iter_mut() {
            let norm = column.norm();
            let norm = if norm == 0.0 { 1.0 } else { norm };
            column *= weight / norm;
        }

        let ideal: Vec<f64> = weighted
            .column_iter()
            .map(|column| column.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .collect();
        let anti_ideal: Vec<f64> = weighted
            .column_iter()
            .map(|column| column.iter().copied().fold(f64::INFINITY, f64::min))
            .collect();

        DVector::from_fn(n, |i, _| {
            let row: Vec<f64> = weighted.row(i).iter().copied().collect();
            let to_ideal = euclidean_distance(&row, &ideal);
            let to_anti_ideal = euclidean_distance(&row, &anti_ideal);
            let total = to_ideal + to_anti_ideal;
            let total = if total == 0.0 { 1.0 } else { total };
            to_anti_ideal / total
        })
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
