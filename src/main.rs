//! expert-ahp server binary.
//!
//! Loads configuration from the environment, initialises tracing, builds the
//! snapshot storage backend and serves the decision model API.

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use expert_ahp::adapters::http::{model_routes, with_middleware, ModelAppState};
use expert_ahp::adapters::storage::{FileModelStorage, InMemoryModelStorage};
use expert_ahp::application::handlers::model::shared_model;
use expert_ahp::config::{AppConfig, StorageBackend, StorageConfig};
use expert_ahp::domain::model::DecisionModel;
use expert_ahp::ports::ModelStorage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured directive
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    config.validate()?;

    let policy = config.analysis.matrix_policy()?;
    let model = shared_model(DecisionModel::with_policy(policy));
    let storage = build_storage(&config.storage);

    let state = ModelAppState::new(model, storage, config.storage.default_snapshot.clone());
    let app = with_middleware(model_routes(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        address = %addr,
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        "expert-ahp listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn build_storage(storage: &StorageConfig) -> Arc<dyn ModelStorage> {
    match storage.backend {
        StorageBackend::File => Arc::new(FileModelStorage::new(&storage.data_dir)),
        StorageBackend::Memory => Arc::new(InMemoryModelStorage::new()),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
