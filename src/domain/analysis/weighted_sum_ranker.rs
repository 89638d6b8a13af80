//! Weighted-Sum Ranker - Basic and consistency-adjusted aggregation.

use nalgebra::{DMatrix, DVector};

use super::ranking::sorted_ranking;
use super::{
    AnalysisError, ConsistencyEvaluator, CriterionJudgements, JudgementSet, PriorityCalculator,
    RankedAlternative, CONSISTENCY_EPSILON,
};

/// Rankers that sum per-criterion local priorities with equal criterion weight.
pub struct WeightedSumRanker;

impl WeightedSumRanker {
    /// Basic ranking.
    ///
    /// # Algorithm
    /// For each criterion, average the expert matrices element-wise and derive
    /// local priorities. Final score = Σ(local priorities) / criterion count.
    ///
    /// # Edge Cases
    /// - No criteria: `NoCriteria`
    /// - Criterion without experts: indifferent (all-ones) matrix
    pub fn basic(set: &JudgementSet<'_>) -> Result<Vec<RankedAlternative>, AnalysisError> {
        Self::rank_with(set, |criterion, n| {
            Ok(PriorityCalculator::mean_matrix(&criterion.matrices(), n))
        })
    }

    /// Consistency-adjusted ranking.
    ///
    /// Identical to [`Self::basic`] except that each criterion's matrix is the
    /// sum of expert matrices weighted by [`Self::expert_weights`].
    ///
    /// # Errors
    /// `UndefinedConsistency` when alternatives number fewer than two.
    pub fn consistency_adjusted(
        set: &JudgementSet<'_>,
    ) -> Result<Vec<RankedAlternative>, AnalysisError> {
        if set.alternatives().len() == 1 {
            return Err(AnalysisError::UndefinedConsistency { dimension: 1 });
        }
        Self::rank_with(set, |criterion, n| {
            let weights = Self::expert_weights(criterion)?;
            let weighted: Vec<_> = criterion
                .matrices()
                .into_iter()
                .zip(weights)
                .collect();
            Ok(PriorityCalculator::weighted_matrix(&weighted, n))
        })
    }

    /// Expert weights for one criterion, in judgement order, summing to 1.
    ///
    /// # Algorithm
    /// With `max_ci` the largest consistency index among the criterion's
    /// experts, each expert gets `(max_ci - ci) / max_ci` when `ci` is below
    /// `max_ci` and `max_ci` is positive, both by more than
    /// [`CONSISTENCY_EPSILON`], otherwise 0. Weights are then normalized; if all are
    /// zero every expert gets an equal share.
    pub fn expert_weights(criterion: &CriterionJudgements<'_>) -> Result<Vec<f64>, AnalysisError> {
        let indices = criterion
            .judgements
            .iter()
            .map(|j| ConsistencyEvaluator::consistency_index(j.matrix))
            .collect::<Result<Vec<f64>, _>>()?;

        if indices.is_empty() {
            return Ok(Vec::new());
        }

        let max_ci = indices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let raw: Vec<f64> = indices
            .iter()
            .map(|&ci| {
                if max_ci - ci > CONSISTENCY_EPSILON && max_ci > CONSISTENCY_EPSILON {
                    (max_ci - ci) / max_ci
                } else {
                    0.0
                }
            })
            .collect();

        let total: f64 = raw.iter().sum();
        if total > 0.0 {
            Ok(raw.into_iter().map(|w| w / total).collect())
        } else {
            let equal = 1.0 / indices.len() as f64;
            Ok(vec![equal; indices.len()])
        }
    }

    fn rank_with<F>(set: &JudgementSet<'_>, aggregate: F) -> Result<Vec<RankedAlternative>, AnalysisError>
    where
        F: Fn(&CriterionJudgements<'_>, usize) -> Result<DMatrix<f64>, AnalysisError>,
    {
        let criteria = set.criteria();
        if criteria.is_empty() {
            return Err(AnalysisError::NoCriteria);
        }

        let n = set.alternatives().len();
        let mut totals = DVector::<f64>::zeros(n);
        for criterion in criteria {
            let aggregated = aggregate(criterion, n)?;
            totals += PriorityCalculator::local_priorities(&aggregated);
        }
        totals /= criteria.len() as f64;

        Ok(sorted_ranking(set.alternatives(), &totals))
    }
}
