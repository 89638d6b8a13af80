//! HTTP handlers for decision model endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::model::{
    ComputeRankingHandler, ComputeRankingQuery, ExportSnapshotHandler,
    GetInconsistencyIndicesHandler, GetInconsistencyIndicesQuery, GetModelOverviewHandler,
    ImportSnapshotCommand, ImportSnapshotHandler, LoadModelCommand, LoadModelHandler,
    RegisterAlternativeCommand, RegisterAlternativeHandler, RegisterCriterionCommand,
    RegisterCriterionHandler, RegisterExpertCommand, RegisterExpertHandler, ResetModelHandler,
    SaveModelCommand, SaveModelHandler, SharedModel, SubmitMatrixCommand, SubmitMatrixHandler,
};
use crate::domain::analysis::RankingMethod;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ModelStorage;

use super::dto::{
    AddAlternativeRequest, AddCriterionRequest, AddExpertRequest, AllRankingsResponse,
    AlternativeAddedResponse, CriterionAddedResponse, ErrorResponse, ExpertAddedResponse,
    InconsistencyResponse, MatrixSubmittedResponse, MessageResponse, ModelOverview,
    ModelSnapshot, PersistRequest, PersistResponse, RankingResponse, SubmitMatrixRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Model API error that implements IntoResponse.
#[derive(Debug)]
pub enum ModelApiError {
    /// Blank names, unknown ranking methods, bad snapshot names.
    BadRequest(DomainError),
    /// Unregistered criterion, missing snapshot.
    NotFound(DomainError),
    /// Malformed matrix or snapshot content.
    Unprocessable(DomainError),
    /// The model cannot be analysed in its current state.
    Conflict(DomainError),
    Internal(DomainError),
}

impl ModelApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ModelApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ModelApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ModelApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ModelApiError::Conflict(_) => StatusCode::CONFLICT,
            ModelApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ModelApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = match self {
            ModelApiError::Internal(err) => {
                tracing::error!(error = %err, "Model request failed");
                ErrorResponse::from_domain(&err)
            }
            ModelApiError::BadRequest(err)
            | ModelApiError::NotFound(err)
            | ModelApiError::Unprocessable(err)
            | ModelApiError::Conflict(err) => ErrorResponse::from_domain(&err),
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for ModelApiError {
    fn from(error: DomainError) -> Self {
        match error.code {
            ErrorCode::ValidationFailed => ModelApiError::BadRequest(error),
            ErrorCode::InvalidMatrix => ModelApiError::Unprocessable(error),
            ErrorCode::CriterionNotFound | ErrorCode::SnapshotNotFound => {
                ModelApiError::NotFound(error)
            }
            ErrorCode::DimensionMismatch
            | ErrorCode::UndefinedConsistency
            | ErrorCode::NoCriteria => ModelApiError::Conflict(error),
            ErrorCode::StorageError | ErrorCode::InternalError => ModelApiError::Internal(error),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing model dependencies.
#[derive(Clone)]
pub struct ModelAppState {
    pub model: SharedModel,
    pub storage: Arc<dyn ModelStorage>,
    pub default_snapshot: String,
}

impl ModelAppState {
    pub fn new(
        model: SharedModel,
        storage: Arc<dyn ModelStorage>,
        default_snapshot: impl Into<String>,
    ) -> Self {
        Self {
            model,
            storage,
            default_snapshot: default_snapshot.into(),
        }
    }

    pub fn register_alternative_handler(&self) -> RegisterAlternativeHandler {
        RegisterAlternativeHandler::new(self.model.clone())
    }

    pub fn register_criterion_handler(&self) -> RegisterCriterionHandler {
        RegisterCriterionHandler::new(self.model.clone())
    }

    pub fn register_expert_handler(&self) -> RegisterExpertHandler {
        RegisterExpertHandler::new(self.model.clone())
    }

    pub fn submit_matrix_handler(&self) -> SubmitMatrixHandler {
        SubmitMatrixHandler::new(self.model.clone())
    }

    pub fn compute_ranking_handler(&self) -> ComputeRankingHandler {
        ComputeRankingHandler::new(self.model.clone())
    }

    pub fn inconsistency_handler(&self) -> GetInconsistencyIndicesHandler {
        GetInconsistencyIndicesHandler::new(self.model.clone())
    }

    pub fn overview_handler(&self) -> GetModelOverviewHandler {
        GetModelOverviewHandler::new(self.model.clone())
    }

    pub fn export_snapshot_handler(&self) -> ExportSnapshotHandler {
        ExportSnapshotHandler::new(self.model.clone())
    }

    pub fn import_snapshot_handler(&self) -> ImportSnapshotHandler {
        ImportSnapshotHandler::new(self.model.clone())
    }

    pub fn save_handler(&self) -> SaveModelHandler {
        SaveModelHandler::new(
            self.model.clone(),
            self.storage.clone(),
            self.default_snapshot.clone(),
        )
    }

    pub fn load_handler(&self) -> LoadModelHandler {
        LoadModelHandler::new(
            self.model.clone(),
            self.storage.clone(),
            self.default_snapshot.clone(),
        )
    }

    pub fn reset_handler(&self) -> ResetModelHandler {
        ResetModelHandler::new(self.model.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/model
///
/// Lists registered alternatives, criteria and experts.
pub async fn get_model_overview(State(state): State<ModelAppState>) -> Json<ModelOverview> {
    Json(state.overview_handler().handle().await)
}

/// POST /api/model/alternatives
pub async fn add_alternative(
    State(state): State<ModelAppState>,
    Json(request): Json<AddAlternativeRequest>,
) -> Result<(StatusCode, Json<AlternativeAddedResponse>), ModelApiError> {
    let cmd = RegisterAlternativeCommand {
        name: request.alternative_name,
    };
    let result = state.register_alternative_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// POST /api/model/criteria
pub async fn add_criterion(
    State(state): State<ModelAppState>,
    Json(request): Json<AddCriterionRequest>,
) -> Result<(StatusCode, Json<CriterionAddedResponse>), ModelApiError> {
    let cmd = RegisterCriterionCommand {
        name: request.criterion_name,
    };
    let result = state.register_criterion_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// POST /api/model/experts
pub async fn add_expert(
    State(state): State<ModelAppState>,
    Json(request): Json<AddExpertRequest>,
) -> Result<(StatusCode, Json<ExpertAddedResponse>), ModelApiError> {
    let cmd = RegisterExpertCommand {
        name: request.expert_name,
    };
    let result = state.register_expert_handler().handle(cmd).await?;
    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(result.into())))
}

/// POST /api/model/matrices
///
/// Stores an expert's comparison matrix, completing missing cells.
pub async fn submit_matrix(
    State(state): State<ModelAppState>,
    Json(request): Json<SubmitMatrixRequest>,
) -> Result<Json<MatrixSubmittedResponse>, ModelApiError> {
    let cmd = SubmitMatrixCommand {
        expert: request.expert_name,
        criterion: request.criterion,
        matrix: request.matrix,
    };
    let result = state.submit_matrix_handler().handle(cmd).await?;
    Ok(Json(result.into()))
}

/// GET /api/model/rankings
///
/// Returns the ranking of every method with the consistency indices and
/// labelled matrices they were computed from.
pub async fn get_all_rankings(
    State(state): State<ModelAppState>,
) -> Result<Json<AllRankingsResponse>, ModelApiError> {
    let result = state.compute_ranking_handler().handle_all().await?;
    Ok(Json(result.into()))
}

/// GET /api/model/rankings/:method
pub async fn get_ranking(
    State(state): State<ModelAppState>,
    Path(method): Path<String>,
) -> Result<Json<RankingResponse>, ModelApiError> {
    let method = method
        .parse::<RankingMethod>()
        .map_err(|e| ModelApiError::from(DomainError::from(e)))?;

    let ranking = state
        .compute_ranking_handler()
        .handle(ComputeRankingQuery { method })
        .await?;
    Ok(Json(RankingResponse::new(method, ranking)))
}

/// GET /api/model/inconsistency
pub async fn get_inconsistency(
    State(state): State<ModelAppState>,
) -> Result<Json<InconsistencyResponse>, ModelApiError> {
    let report = state
        .inconsistency_handler()
        .handle(GetInconsistencyIndicesQuery)
        .await?;
    Ok(Json(report.into()))
}

/// GET /api/model/snapshot
pub async fn export_snapshot(State(state): State<ModelAppState>) -> Json<ModelSnapshot> {
    Json(state.export_snapshot_handler().handle().await)
}

/// PUT /api/model/snapshot
///
/// Replaces the whole model with the uploaded snapshot.
pub async fn import_snapshot(
    State(state): State<ModelAppState>,
    Json(snapshot): Json<ModelSnapshot>,
) -> Result<Json<ModelSnapshot>, ModelApiError> {
    let snapshot = state
        .import_snapshot_handler()
        .handle(ImportSnapshotCommand { snapshot })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/model/save
///
/// Body is optional; without a filename the configured default is used.
pub async fn save_model(
    State(state): State<ModelAppState>,
    request: Option<Json<PersistRequest>>,
) -> Result<Json<PersistResponse>, ModelApiError> {
    let filename = request.and_then(|Json(r)| r.filename);
    let result = state
        .save_handler()
        .handle(SaveModelCommand { filename })
        .await?;
    Ok(Json(PersistResponse::saved(result)))
}

/// POST /api/model/load
pub async fn load_model(
    State(state): State<ModelAppState>,
    request: Option<Json<PersistRequest>>,
) -> Result<Json<PersistResponse>, ModelApiError> {
    let filename = request.and_then(|Json(r)| r.filename);
    let result = state
        .load_handler()
        .handle(LoadModelCommand { filename })
        .await?;
    Ok(Json(PersistResponse::loaded(result)))
}

/// DELETE /api/model
pub async fn reset_model(State(state): State<ModelAppState>) -> Json<MessageResponse> {
    state.reset_handler().handle().await;
    Json(MessageResponse::new("Model reset"))
}
