//! Foundation module - Shared domain primitives.
//!
//! Error types and codes used across every layer.

mod errors;

pub use errors::{DomainError, ErrorCode, ValidationError};
