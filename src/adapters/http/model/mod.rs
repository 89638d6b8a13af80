//! Decision model HTTP adapter module.
//!
//! Provides REST API endpoints for registration, matrix submission,
//! rankings, consistency and snapshots.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ModelApiError, ModelAppState};
pub use routes::model_routes;
