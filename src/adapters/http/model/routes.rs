//! HTTP routes for decision model endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    add_alternative, add_criterion, add_expert, export_snapshot, get_all_rankings,
    get_inconsistency, get_model_overview, get_ranking, import_snapshot, load_model,
    reset_model, save_model, submit_matrix, ModelAppState,
};

/// Creates the model router with all routes.
pub fn model_routes(state: ModelAppState) -> Router {
    Router::new()
        // GET /api/model, DELETE /api/model
        .route("/api/model", get(get_model_overview).delete(reset_model))
        // Registration and ingestion
        .route("/api/model/alternatives", post(add_alternative))
        .route("/api/model/criteria", post(add_criterion))
        .route("/api/model/experts", post(add_expert))
        .route("/api/model/matrices", post(submit_matrix))
        // Analysis
        .route("/api/model/rankings", get(get_all_rankings))
        .route("/api/model/rankings/:method", get(get_ranking))
        .route("/api/model/inconsistency", get(get_inconsistency))
        // Snapshots
        .route("/api/model/snapshot", get(export_snapshot).put(import_snapshot))
        .route("/api/model/save", post(save_model))
        .route("/api/model/load", post(load_model))
        .with_state(state)
}
