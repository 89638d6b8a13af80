//! expert-ahp - Multi-expert pairwise-comparison decision analysis
//!
//! This crate implements Analytic Hierarchy Process style aggregation:
//! experts submit pairwise-comparison matrices over a set of alternatives for
//! each criterion, and the model completes missing judgements, measures
//! consistency and ranks the alternatives with three competing strategies.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
