//! Analysis Module - Pure domain services for pairwise-comparison analysis.
//!
//! This module contains stateless functions that operate on comparison
//! matrices to complete, evaluate and aggregate expert judgements.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Validated, fully populated pairwise matrix
//! - `MatrixCompleter` - Missing-value completion by transitive inference
//! - `ConsistencyEvaluator` - Eigenvalue-based consistency index (and ratio)
//! - `PriorityCalculator` - Local weights and expert aggregation
//! - `WeightedSumRanker` - Basic and consistency-adjusted rankings
//! - `TopsisRanker` - Closeness-to-ideal ranking
//! - `ComparisonScale` - The 1..=9 judgement scale
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. No ports or
//! adapters are needed since there's no I/O.

mod comparison_matrix;
mod completion;
mod consistency;
mod errors;
mod priority;
mod ranking;
mod scale;
mod topsis_ranker;
mod weighted_sum_ranker;

// Re-export all public types
pub use comparison_matrix::{ComparisonMatrix, MatrixPolicy, DEFAULT_RECIPROCAL_TOLERANCE};
pub use completion::{CompletionReport, MatrixCompleter, MISSING};
pub use consistency::{
    ConsistencyEvaluator, ConsistencyScore, CONSISTENCY_EPSILON, RANDOM_INDEX,
};
pub use errors::AnalysisError;
pub use priority::PriorityCalculator;
pub use ranking::{
    CriterionJudgements, ExpertJudgement, JudgementSet, RankedAlternative, RankingMethod,
};
pub use scale::{ComparisonScale, SAATY_SCALE_MAX};
pub use topsis_ranker::TopsisRanker;
pub use weighted_sum_ranker::WeightedSumRanker;
