//! Decision Model - The pairwise matrix store.
//!
//! Holds the ordered alternatives and criteria plus every expert's
//! comparison matrix, and runs the analysis services over them.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::{LabeledMatrix, ModelError, ModelSnapshot};
use crate::domain::analysis::{
    AnalysisError, ComparisonMatrix, CompletionReport, ConsistencyEvaluator, ConsistencyScore,
    CriterionJudgements, ExpertJudgement, JudgementSet, MatrixPolicy, RankedAlternative,
    RankingMethod,
};
use crate::domain::foundation::ValidationError;

/// Criterion name → matrix for one expert.
pub type CriterionMatrices = BTreeMap<String, ComparisonMatrix>;

/// Result of a matrix submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The matrix was completed and stored.
    Stored {
        report: CompletionReport,
        /// True when an earlier matrix for the same expert and criterion was overwritten.
        replaced: bool,
    },
    /// The criterion is not registered; nothing changed.
    CriterionNotRegistered,
}

/// The matrix store of one decision problem.
///
/// Alternatives and criteria are append-only until [`DecisionModel::reset`].
/// Duplicate names are accepted and alias each other.
#[derive(Debug, Clone, Default)]
pub struct DecisionModel {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    expert_matrices: BTreeMap<String, CriterionMatrices>,
    policy: MatrixPolicy,
}

impl DecisionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty model that validates submissions with `policy`.
    pub fn with_policy(policy: MatrixPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> &MatrixPolicy {
        &self.policy
    }

    // ───────────────────────────────────────────────────────────────
    // Registration
    // ───────────────────────────────────────────────────────────────

    /// Appends an alternative and returns its index.
    pub fn register_alternative(&mut self, name: impl Into<String>) -> usize {
        self.alternatives.push(name.into());
        self.alternatives.len() - 1
    }

    /// Appends a criterion and returns its index.
    pub fn register_criterion(&mut self, name: impl Into<String>) -> usize {
        self.criteria.push(name.into());
        self.criteria.len() - 1
    }

    /// Registers an expert with no matrices. Returns false if already known.
    pub fn register_expert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.expert_matrices.contains_key(&name) {
            return false;
        }
        self.expert_matrices.insert(name, BTreeMap::new());
        true
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Every known expert, sorted by name.
    pub fn experts(&self) -> Vec<String> {
        self.expert_matrices.keys().cloned().collect()
    }

    pub fn is_criterion_registered(&self, criterion: &str) -> bool {
        self.criteria.iter().any(|c| c == criterion)
    }

    pub fn matrix(&self, expert: &str, criterion: &str) -> Option<&ComparisonMatrix> {
        self.expert_matrices.get(expert)?.get(criterion)
    }

    // ───────────────────────────────────────────────────────────────
    // Ingestion
    // ───────────────────────────────────────────────────────────────

    /// Validates, completes and stores an expert's matrix for a criterion.
    ///
    /// An unregistered criterion is not an error: the submission is ignored
    /// and [`SubmitOutcome::CriterionNotRegistered`] is returned.
    ///
    /// # Errors
    /// `InvalidMatrix` when the judgements do not form a valid matrix over the
    /// currently registered alternatives. The store is left unchanged.
    pub fn submit_matrix(
        &mut self,
        expert: &str,
        criterion: &str,
        raw: &[Vec<Option<f64>>],
    ) -> Result<SubmitOutcome, ModelError> {
        if !self.is_criterion_registered(criterion) {
            warn!(
                expert = %expert,
                criterion = %criterion,
                "Ignoring matrix for unregistered criterion"
            );
            return Ok(SubmitOutcome::CriterionNotRegistered);
        }

        let (matrix, report) =
            ComparisonMatrix::from_judgements(raw, self.alternatives.len(), &self.policy)
                .map_err(|source| ModelError::invalid_matrix(expert, criterion, source))?;

        if report.filled() > 0 {
            debug!(
                expert = %expert,
                criterion = %criterion,
                mirrored = report.mirrored,
                inferred = report.inferred,
                defaulted = report.defaulted,
                "Completed missing judgements"
            );
        }

        let replaced = self
            .expert_matrices
            .entry(expert.to_string())
            .or_default()
            .insert(criterion.to_string(), matrix)
            .is_some();

        Ok(SubmitOutcome::Stored { report, replaced })
    }

    /// Clears alternatives, criteria and every expert matrix.
    pub fn reset(&mut self) {
        self.alternatives.clear();
        self.criteria.clear();
        self.expert_matrices.clear();
    }

    // ───────────────────────────────────────────────────────────────
    // Analysis
    // ───────────────────────────────────────────────────────────────

    /// Collects, per registered criterion, every expert matrix submitted for it.
    ///
    /// # Errors
    /// `DimensionMismatch` when a stored matrix predates a later alternative.
    pub fn judgements(&self) -> Result<JudgementSet<'_>, ModelError> {
        let criteria = self
            .criteria
            .iter()
            .map(|criterion| CriterionJudgements {
                criterion: criterion.as_str(),
                judgements: self
                    .expert_matrices
                    .iter()
                    .filter_map(|(expert, matrices)| {
                        matrices.get(criterion).map(|matrix| ExpertJudgement {
                            expert: expert.as_str(),
                            matrix,
                        })
                    })
                    .collect(),
            })
            .collect();

        Ok(JudgementSet::new(&self.alternatives, criteria)?)
    }

    /// Ranks alternatives with the given method, best first.
    ///
    /// A model without alternatives yields an empty ranking.
    pub fn rank(&self, method: RankingMethod) -> Result<Vec<RankedAlternative>, ModelError> {
        if self.alternatives.is_empty() {
            return Ok(Vec::new());
        }
        let ranking = self.judgements()?.rank(method)?;
        debug!(
            method = %method,
            alternatives = ranking.len(),
            "Computed ranking"
        );
        Ok(ranking)
    }

    pub fn rank_basic(&self) -> Result<Vec<RankedAlternative>, ModelError> {
        self.rank(RankingMethod::Basic)
    }

    pub fn rank_consistency_adjusted(&self) -> Result<Vec<RankedAlternative>, ModelError> {
        self.rank(RankingMethod::ConsistencyAdjusted)
    }

    pub fn rank_topsis(&self) -> Result<Vec<RankedAlternative>, ModelError> {
        self.rank(RankingMethod::Topsis)
    }

    /// Every ranking method at once.
    pub fn rank_all(
        &self,
    ) -> Result<BTreeMap<RankingMethod, Vec<RankedAlternative>>, ModelError> {
        RankingMethod::ALL
            .iter()
            .map(|&method| Ok((method, self.rank(method)?)))
            .collect()
    }

    /// Raw consistency index per expert and criterion.
    ///
    /// Covers exactly the stored (expert, criterion) pairs.
    pub fn inconsistency_indices(
        &self,
    ) -> Result<BTreeMap<String, BTreeMap<String, f64>>, ModelError> {
        self.map_matrices(ConsistencyEvaluator::consistency_index)
    }

    /// Consistency index and ratio per expert and criterion.
    pub fn inconsistency_report(
        &self,
    ) -> Result<BTreeMap<String, BTreeMap<String, ConsistencyScore>>, ModelError> {
        self.map_matrices(ConsistencyEvaluator::score)
    }

    /// Stored matrices per criterion, each labelled with the alternatives.
    ///
    /// Experts appear in name order; criteria without any matrix are omitted.
    pub fn labeled_matrices(&self) -> Result<BTreeMap<String, Vec<LabeledMatrix>>, ModelError> {
        let set = self.judgements()?;
        let mut result = BTreeMap::new();
        for criterion in set.criteria() {
            if criterion.judgements.is_empty() {
                continue;
            }
            let matrices = criterion
                .judgements
                .iter()
                .map(|judgement| LabeledMatrix {
                    expert: judgement.expert.to_string(),
                    labels: self.alternatives.clone(),
                    values: judgement.matrix.to_rows(),
                })
                .collect();
            result.insert(criterion.criterion.to_string(), matrices);
        }
        Ok(result)
    }

    fn map_matrices<T, F>(&self, f: F) -> Result<BTreeMap<String, BTreeMap<String, T>>, ModelError>
    where
        F: Fn(&ComparisonMatrix) -> Result<T, AnalysisError>,
    {
        let expected = self.alternatives.len();
        let mut result = BTreeMap::new();
        for (expert, matrices) in &self.expert_matrices {
            if matrices.is_empty() {
                continue;
            }
            let mut per_criterion = BTreeMap::new();
            for (criterion, matrix) in matrices {
                if matrix.dimension() != expected {
                    return Err(AnalysisError::DimensionMismatch {
                        expert: expert.clone(),
                        criterion: criterion.clone(),
                        expected,
                        actual: matrix.dimension(),
                    }
                    .into());
                }
                per_criterion.insert(criterion.clone(), f(matrix)?);
            }
            result.insert(expert.clone(), per_criterion);
        }
        Ok(result)
    }

    // ───────────────────────────────────────────────────────────────
    // Snapshots
    // ───────────────────────────────────────────────────────────────

    /// Full-state snapshot.
    pub fn export_state(&self) -> ModelSnapshot {
        ModelSnapshot {
            alternatives: self.alternatives.clone(),
            criteria: self.criteria.clone(),
            expert_matrices: self
                .expert_matrices
                .iter()
                .map(|(expert, matrices)| {
                    let rows = matrices
                        .iter()
                        .map(|(criterion, matrix)| (criterion.clone(), matrix.to_rows()))
                        .collect();
                    (expert.clone(), rows)
                })
                .collect(),
        }
    }

    /// Replaces the whole store with a snapshot.
    ///
    /// Every matrix is validated before anything is replaced, so a rejected
    /// snapshot leaves the model untouched.
    ///
    /// # Errors
    /// `InvalidMatrix` for a non-square, non-positive or non-reciprocal matrix.
    pub fn import_state(&mut self, snapshot: ModelSnapshot) -> Result<(), ModelError> {
        let ModelSnapshot {
            alternatives,
            criteria,
            expert_matrices,
        } = snapshot;

        let mut restored = BTreeMap::new();
        for (expert, matrices) in expert_matrices {
            let mut per_criterion = BTreeMap::new();
            for (criterion, rows) in matrices {
                let matrix = ComparisonMatrix::from_rows(&rows)
                    .map_err(|source| ModelError::invalid_matrix(&expert, &criterion, source))?;
                if !matrix.is_reciprocal(self.policy.reciprocal_tolerance) {
                    return Err(ModelError::invalid_matrix(
                        &expert,
                        &criterion,
                        ValidationError::invalid_format(
                            "matrix",
                            "stored matrix is not reciprocal",
                        ),
                    ));
                }
                per_criterion.insert(criterion, matrix);
            }
            restored.insert(expert, per_criterion);
        }

        self.alternatives = alternatives;
        self.criteria = criteria;
        self.expert_matrices = restored;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ComparisonScale;

    fn cells(rows: &[&[f64]]) -> Vec<Vec<Option<f64>>> {
        rows.iter()
            .map(|r| r.iter().map(|v| Some(*v)).collect())
            .collect()
    }

    fn model_with(alternatives: &[&str], criteria: &[&str]) -> DecisionModel {
        let mut model = DecisionModel::new();
        for a in alternatives {
            model.register_alternative(*a);
        }
        for c in criteria {
            model.register_criterion(*c);
        }
        model
    }

    fn consistent_3x3() -> Vec<Vec<Option<f64>>> {
        cells(&[&[1.0, 2.0, 4.0], &[0.5, 1.0, 2.0], &[0.25, 0.5, 1.0]])
    }

    fn inconsistent_3x3() -> Vec<Vec<Option<f64>>> {
        cells(&[
            &[1.0, 3.0, 1.0 / 3.0],
            &[1.0 / 3.0, 1.0, 3.0],
            &[3.0, 1.0 / 3.0, 1.0],
        ])
    }

    // ───────────────────────────────────────────────────────────────
    // Registration
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn registration_preserves_order_and_allows_duplicates() {
        let mut model = DecisionModel::new();
        assert_eq!(model.register_alternative("A"), 0);
        assert_eq!(model.register_alternative("B"), 1);
        assert_eq!(model.register_alternative("A"), 2);
        model.register_criterion("cost");

        assert_eq!(model.alternatives(), &["A", "B", "A"]);
        assert_eq!(model.alternative_count(), 3);
        assert_eq!(model.criteria(), &["cost"]);
    }

    #[test]
    fn register_expert_is_idempotent() {
        let mut model = model_with(&["A", "B"], &["cost"]);
        assert!(model.register_expert("bob"));
        model
            .submit_matrix("bob", "cost", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap();

        assert!(!model.register_expert("bob"));
        assert!(model.matrix("bob", "cost").is_some());
    }

    #[test]
    fn experts_are_sorted_and_include_submitters() {
        let mut model = model_with(&["A", "B"], &["cost"]);
        model.register_expert("zoe");
        model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap();

        assert_eq!(model.experts(), vec!["alice", "zoe"]);
    }

    // ───────────────────────────────────────────────────────────────
    // Ingestion
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn unregistered_criterion_is_ignored() {
        let mut model = model_with(&["A", "B"], &["cost"]);
        let outcome = model
            .submit_matrix("alice", "speed", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::CriterionNotRegistered);
        assert!(model.experts().is_empty());
        assert!(model.export_state().expert_matrices.is_empty());
    }

    #[test]
    fn resubmission_overwrites() {
        let mut model = model_with(&["A", "B"], &["cost"]);
        model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap();
        let outcome = model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 0.25], &[4.0, 1.0]]))
            .unwrap();

        assert!(matches!(outcome, SubmitOutcome::Stored { replaced: true, .. }));
        assert_eq!(model.matrix("alice", "cost").unwrap().get(0, 1), 0.25);
    }

    #[test]
    fn missing_cell_is_completed_on_submission() {
        let mut model = model_with(&["A", "B", "C"], &["cost"]);
        let raw = vec![
            vec![Some(1.0), None, Some(4.0)],
            vec![None, Some(1.0), Some(2.0)],
            vec![Some(0.25), Some(0.5), Some(1.0)],
        ];
        let outcome = model.submit_matrix("alice", "cost", &raw).unwrap();

        let matrix = model.matrix("alice", "cost").unwrap();
        assert!((matrix.get(0, 1) - 2.0).abs() < 1e-12);
        assert!((matrix.get(1, 0) - 0.5).abs() < 1e-12);
        assert!(matches!(
            outcome,
            SubmitOutcome::Stored { report, replaced: false } if report.filled() == 2
        ));
    }

    #[test]
    fn malformed_matrix_is_rejected_without_state_change() {
        let mut model = model_with(&["A", "B", "C"], &["cost"]);
        let err = model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap_err();

        assert!(matches!(err, ModelError::InvalidMatrix { .. }));
        assert!(model.matrix("alice", "cost").is_none());
        assert!(model.experts().is_empty());
    }

    #[test]
    fn policy_snaps_judgements_to_scale() {
        let mut model = DecisionModel::with_policy(MatrixPolicy {
            scale: Some(ComparisonScale::SAATY),
            ..MatrixPolicy::default()
        });
        model.register_alternative("A");
        model.register_alternative("B");
        model.register_criterion("cost");
        model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 8.0], &[0.13, 1.0]]))
            .unwrap();

        assert_eq!(model.matrix("alice", "cost").unwrap().get(1, 0), 0.125);
    }

    #[test]
    fn reset_clears_everything() {
        let mut model = model_with(&["A", "B"], &["cost"]);
        model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap();
        model.reset();

        assert!(model.alternatives().is_empty());
        assert!(model.criteria().is_empty());
        assert!(model.experts().is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Analysis
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn two_alternative_scenario() {
        let mut model = model_with(&["A", "B"], &["cost"]);
        model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap();

        let ranking = model.rank_basic().unwrap();
        assert_eq!(ranking[0].alternative, "A");
        assert!((ranking[0].score - 0.667).abs() < 1e-3);
        assert!((ranking[1].score - 0.333).abs() < 1e-3);

        let indices = model.inconsistency_indices().unwrap();
        assert_eq!(indices["alice"]["cost"], 0.0);
    }

    #[test]
    fn consistent_three_alternative_scenario() {
        let mut model = model_with(&["A", "B", "C"], &["quality"]);
        model.submit_matrix("alice", "quality", &consistent_3x3()).unwrap();

        let ranking = model.rank_basic().unwrap();
        let scores: Vec<f64> = ranking.iter().map(|r| r.score).collect();
        assert!((scores[0] - 0.571).abs() < 1e-3);
        assert!((scores[1] - 0.286).abs() < 1e-3);
        assert!((scores[2] - 0.143).abs() < 1e-3);

        let ci = model.inconsistency_indices().unwrap()["alice"]["quality"];
        assert!(ci.abs() < 1e-9);
    }

    #[test]
    fn indices_cover_exactly_stored_pairs() {
        let mut model = model_with(&["A", "B", "C"], &["cost", "quality"]);
        model.register_expert("carol");
        model.submit_matrix("alice", "cost", &consistent_3x3()).unwrap();
        model.submit_matrix("bob", "quality", &inconsistent_3x3()).unwrap();

        let indices = model.inconsistency_indices().unwrap();
        assert_eq!(indices.len(), 2);
        assert_eq!(indices["alice"].keys().collect::<Vec<_>>(), vec!["cost"]);
        assert!(indices["bob"]["quality"] > 0.0);

        let report = model.inconsistency_report().unwrap();
        assert!(report["bob"]["quality"].ratio.unwrap() > 0.0);
    }

    #[test]
    fn consistent_matrices_report_exactly_zero() {
        let mut model = model_with(&["A", "B", "C"], &["cost"]);
        model.submit_matrix("alice", "cost", &consistent_3x3()).unwrap();
        model
            .submit_matrix(
                "bob",
                "cost",
                &cells(&[&[1.0, 3.0, 6.0], &[1.0 / 3.0, 1.0, 2.0], &[1.0 / 6.0, 0.5, 1.0]]),
            )
            .unwrap();

        let indices = model.inconsistency_indices().unwrap();
        assert_eq!(indices["alice"]["cost"], 0.0);
        assert_eq!(indices["bob"]["cost"], 0.0);

        // Equal (zero) indices: the adjusted ranking is the plain mean.
        let adjusted = model.rank_consistency_adjusted().unwrap();
        let basic = model.rank_basic().unwrap();
        for (a, b) in adjusted.iter().zip(&basic) {
            assert_eq!(a.alternative, b.alternative);
            assert!((a.score - b.score).abs() < 1e-12);
        }
    }

    #[test]
    fn labeled_matrices_group_by_criterion() {
        let mut model = model_with(&["A", "B", "C"], &["cost", "quality", "speed"]);
        model.submit_matrix("bob", "cost", &inconsistent_3x3()).unwrap();
        model.submit_matrix("alice", "cost", &consistent_3x3()).unwrap();
        model.submit_matrix("alice", "quality", &consistent_3x3()).unwrap();

        let labeled = model.labeled_matrices().unwrap();

        assert_eq!(labeled.keys().collect::<Vec<_>>(), vec!["cost", "quality"]);
        let experts: Vec<&str> = labeled["cost"].iter().map(|m| m.expert.as_str()).collect();
        assert_eq!(experts, vec!["alice", "bob"]);
        assert_eq!(labeled["quality"][0].labels, vec!["A", "B", "C"]);
        assert_eq!(labeled["quality"][0].values[0], vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn consistency_adjusted_ignores_most_inconsistent_expert() {
        let mut model = model_with(&["A", "B", "C"], &["cost"]);
        model.submit_matrix("alice", "cost", &consistent_3x3()).unwrap();
        model.submit_matrix("bob", "cost", &inconsistent_3x3()).unwrap();

        let adjusted = model.rank_consistency_adjusted().unwrap();
        assert_eq!(adjusted[0].alternative, "A");
        assert!((adjusted[0].score - 4.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn rank_all_returns_every_method() {
        let mut model = model_with(&["A", "B", "C"], &["cost", "quality"]);
        model.submit_matrix("alice", "cost", &consistent_3x3()).unwrap();
        model.submit_matrix("bob", "quality", &consistent_3x3()).unwrap();

        let all = model.rank_all().unwrap();
        assert_eq!(all.len(), 3);
        for ranking in all.values() {
            assert_eq!(ranking[0].alternative, "A");
        }
        let topsis = &all[&RankingMethod::Topsis];
        assert!(topsis.iter().all(|r| (0.0..=1.0).contains(&r.score)));
    }

    #[test]
    fn criterion_without_experts_is_indifferent() {
        let mut model = model_with(&["A", "B"], &["cost", "quality"]);
        model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 3.0], &[1.0 / 3.0, 1.0]]))
            .unwrap();

        let ranking = model.rank_basic().unwrap();
        // (0.75 + 0.5) / 2
        assert!((ranking[0].score - 0.625).abs() < 1e-9);
    }

    #[test]
    fn ranking_without_criteria_fails() {
        let model = model_with(&["A", "B"], &[]);
        let err = model.rank_basic().unwrap_err();
        assert_eq!(err, ModelError::Analysis(AnalysisError::NoCriteria));
    }

    #[test]
    fn ranking_without_alternatives_is_empty() {
        let model = model_with(&[], &["cost"]);
        assert!(model.rank_topsis().unwrap().is_empty());
        assert!(model.rank_all().unwrap().values().all(Vec::is_empty));
    }

    #[test]
    fn single_alternative_has_undefined_consistency() {
        let mut model = model_with(&["A"], &["cost"]);
        model.submit_matrix("alice", "cost", &cells(&[&[1.0]])).unwrap();

        assert_eq!(model.rank_basic().unwrap()[0].score, 1.0);
        assert_eq!(
            model.rank_consistency_adjusted().unwrap_err(),
            ModelError::Analysis(AnalysisError::UndefinedConsistency { dimension: 1 })
        );
        assert!(model.inconsistency_indices().is_err());
    }

    #[test]
    fn stale_matrix_is_reported() {
        let mut model = model_with(&["A", "B"], &["cost"]);
        model
            .submit_matrix("alice", "cost", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap();
        model.register_alternative("C");

        let expected = ModelError::Analysis(AnalysisError::DimensionMismatch {
            expert: "alice".to_string(),
            criterion: "cost".to_string(),
            expected: 3,
            actual: 2,
        });
        assert_eq!(model.rank_basic().unwrap_err(), expected);
        assert_eq!(model.inconsistency_indices().unwrap_err(), expected);
        assert_eq!(model.labeled_matrices().unwrap_err(), expected);
    }

    // ───────────────────────────────────────────────────────────────
    // Snapshots
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn export_import_round_trip() {
        let mut model = model_with(&["A", "B", "C"], &["cost", "quality"]);
        model.register_expert("carol");
        model.submit_matrix("alice", "cost", &consistent_3x3()).unwrap();
        model.submit_matrix("bob", "quality", &inconsistent_3x3()).unwrap();
        let snapshot = model.export_state();

        let mut restored = DecisionModel::new();
        restored.import_state(snapshot.clone()).unwrap();

        assert_eq!(restored.export_state(), snapshot);
        assert_eq!(restored.experts(), vec!["alice", "bob", "carol"]);
        assert_eq!(restored.rank_basic().unwrap(), model.rank_basic().unwrap());
    }

    #[test]
    fn import_without_expert_matrices_is_empty() {
        let snapshot: ModelSnapshot =
            serde_json::from_str(r#"{ "alternatives": ["A"], "criteria": ["cost"] }"#).unwrap();
        let mut model = model_with(&["X", "Y"], &["old"]);
        model
            .submit_matrix("alice", "old", &cells(&[&[1.0, 2.0], &[0.5, 1.0]]))
            .unwrap();

        model.import_state(snapshot).unwrap();

        assert_eq!(model.alternatives(), &["A"]);
        assert!(model.experts().is_empty());
    }

    #[test]
    fn invalid_import_leaves_model_untouched() {
        let mut model = model_with(&["A", "B"], &["cost"]);
        let before = model.export_state();

        let mut snapshot = ModelSnapshot {
            alternatives: vec!["X".into(), "Y".into()],
            criteria: vec!["risk".into()],
            ..Default::default()
        };
        snapshot.expert_matrices.insert(
            "alice".into(),
            BTreeMap::from([("risk".to_string(), vec![vec![1.0, 3.0], vec![3.0, 1.0]])]),
        );

        let err = model.import_state(snapshot).unwrap_err();
        assert!(matches!(err, ModelError::InvalidMatrix { ref criterion, .. } if criterion == "risk"));
        assert_eq!(model.export_state(), before);
    }
}
