//! HTTP adapters - REST API implementations.
//!
//! The model adapter exposes the decision model; [`with_middleware`] adds
//! the tracing, CORS and timeout layers every deployment carries.

pub mod model;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{CorsPolicy, ServerConfig};

// Re-export key types for convenience
pub use model::{model_routes, ModelApiError, ModelAppState};

/// Wraps a router with request tracing, CORS and a request timeout.
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server.cors_policy()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(policy: CorsPolicy) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let origins = match policy {
        CorsPolicy::AnyOrigin => return base.allow_origin(Any),
        CorsPolicy::Origins(origins) => origins,
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}
