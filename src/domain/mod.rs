//! Domain layer containing decision analysis logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary
//! - `analysis` - Pure services over comparison matrices (completion,
//!   consistency, priorities, ranking strategies)
//! - `model` - The mutable decision model aggregate and its snapshot form

pub mod analysis;
pub mod foundation;
pub mod model;
