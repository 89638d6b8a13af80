//! Ranking - Shared types for the aggregation strategies.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{AnalysisError, ComparisonMatrix, TopsisRanker, WeightedSumRanker};
use crate::domain::foundation::ValidationError;

/// One alternative and its final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: String,
    pub score: f64,
}

/// The available aggregation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMethod {
    /// Equal-weight average of expert matrices, weighted-sum over criteria.
    Basic,
    /// Experts weighted by relative consistency.
    ConsistencyAdjusted,
    /// Closeness to the ideal solution.
    Topsis,
}

impl RankingMethod {
    pub const ALL: [RankingMethod; 3] = [
        RankingMethod::Topsis,
        RankingMethod::ConsistencyAdjusted,
        RankingMethod::Basic,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingMethod::Basic => "basic",
            RankingMethod::ConsistencyAdjusted => "consistency_adjusted",
            RankingMethod::Topsis => "topsis",
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            RankingMethod::Basic => "BASIC",
            RankingMethod::ConsistencyAdjusted => "CAM",
            RankingMethod::Topsis => "TOPSIS",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RankingMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(RankingMethod::Basic),
            "consistency_adjusted" => Ok(RankingMethod::ConsistencyAdjusted),
            "topsis" => Ok(RankingMethod::Topsis),
            other => Err(ValidationError::invalid_format(
                "method",
                format!(
                    "unknown ranking method '{}', expected basic, consistency_adjusted or topsis",
                    other
                ),
            )),
        }
    }
}

/// One expert's matrix for a criterion.
#[derive(Debug, Clone, Copy)]
pub struct ExpertJudgement<'a> {
    pub expert: &'a str,
    pub matrix: &'a ComparisonMatrix,
}

/// Every expert matrix submitted for one criterion.
#[derive(Debug, Clone)]
pub struct CriterionJudgements<'a> {
    pub criterion: &'a str,
    pub judgements: Vec<ExpertJudgement<'a>>,
}

impl<'a> CriterionJudgements<'a> {
    pub fn matrices(&self) -> Vec<&'a ComparisonMatrix> {
        self.judgements.iter().map(|j| j.matrix).collect()
    }
}

/// Dimension-checked input to every ranker.
#[derive(Debug, Clone)]
pub struct JudgementSet<'a> {
    alternatives: &'a [String],
    criteria: Vec<CriterionJudgements<'a>>,
}

impl<'a> JudgementSet<'a> {
    /// Builds the set, checking every matrix matches the alternative count.
    pub fn new(
        alternatives: &'a [String],
        criteria: Vec<CriterionJudgements<'a>>,
    ) -> Result<Self, AnalysisError> {
        let expected = alternatives.len();
        for criterion in &criteria {
            for judgement in &criterion.judgements {
                let actual = judgement.matrix.dimension();
                if actual != expected {
                    return Err(AnalysisError::DimensionMismatch {
                        expert: judgement.expert.to_string(),
                        criterion: criterion.criterion.to_string(),
                        expected,
                        actual,
                    });
                }
            }
        }
        Ok(Self {
            alternatives,
            criteria,
        })
    }

    pub fn alternatives(&self) -> &'a [String] {
        self.alternatives
    }

    pub fn criteria(&self) -> &[CriterionJudgements<'a>] {
        &self.criteria
    }

    /// Runs the given strategy.
    pub fn rank(&self, method: RankingMethod) -> Result<Vec<RankedAlternative>, AnalysisError> {
        match method {
            RankingMethod::Basic => WeightedSumRanker::basic(self),
            RankingMethod::ConsistencyAdjusted => WeightedSumRanker::consistency_adjusted(self),
            RankingMethod::Topsis => TopsisRanker::rank(self),
        }
    }
}

/// Pairs scores with alternative names, sorted by descending score.
///
/// Ties keep registration order.
pub(crate) fn sorted_ranking(alternatives: &[String], scores: &DVector<f64>) -> Vec<RankedAlternative> {
    let mut ranking: Vec<RankedAlternative> = alternatives
        .iter()
        .zip(scores.iter())
        .map(|(alternative, score)| RankedAlternative {
            alternative: alternative.clone(),
            score: *score,
        })
        .collect();
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranking
}
