//! Model Module - The decision model aggregate.
//!
//! `DecisionModel` is the pairwise matrix store: ordered alternatives and
//! criteria, plus expert → criterion → matrix. It owns no I/O; callers share
//! it behind a lock and persist it through [`ModelSnapshot`].

mod decision_model;
mod errors;
mod snapshot;

pub use decision_model::{CriterionMatrices, DecisionModel, SubmitOutcome};
pub use errors::ModelError;
pub use snapshot::{ExpertMatrixRows, LabeledMatrix, ModelSnapshot};
