//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::Station;
use crate::ranking::{PipelineError, QueryError, RankingStrategy, rank_stations};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(stations_by_priority))
        .route("/stations/high-traffic", get(stations_by_traffic))
        .route("/stations/by-distance", get(stations_by_distance))
        .route("/stations/combined-scoring", get(stations_by_combined_score))
        .route("/stations/discounts", get(stations_with_discounts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Nearby stations, highest maintenance priority first.
async fn stations_by_priority(
    State(state): State<AppState>,
    Query(params): Query<StationQueryParams>,
) -> Result<Json<Vec<Station>>, AppError> {
    ranked(state, RankingStrategy::Priority, params).await
}

/// Nearby stations, highest predicted traffic first.
async fn stations_by_traffic(
    State(state): State<AppState>,
    Query(params): Query<StationQueryParams>,
) -> Result<Json<Vec<Station>>, AppError> {
    ranked(state, RankingStrategy::HighTraffic, params).await
}

/// Nearby stations, closest first.
async fn stations_by_distance(
    State(state): State<AppState>,
    Query(params): Query<StationQueryParams>,
) -> Result<Json<Vec<Station>>, AppError> {
    ranked(state, RankingStrategy::Distance, params).await
}

/// Nearby stations, best combined score first.
async fn stations_by_combined_score(
    State(state): State<AppState>,
    Query(params): Query<StationQueryParams>,
) -> Result<Json<Vec<Station>>, AppError> {
    ranked(state, RankingStrategy::CombinedScore, params).await
}

/// Nearby stations with vehicles, largest discount first.
async fn stations_with_discounts(
    State(state): State<AppState>,
    Query(params): Query<StationQueryParams>,
) -> Result<Json<Vec<Station>>, AppError> {
    ranked(state, RankingStrategy::Discount, params).await
}

/// Load and rank stations for one request.
///
/// Loading reads the data file synchronously, so the pipeline runs on the
/// blocking pool.
async fn ranked(
    state: AppState,
    strategy: RankingStrategy,
    params: StationQueryParams,
) -> Result<Json<Vec<Station>>, AppError> {
    let query = params.to_query()?;
    let source = state.source.clone();

    let stations = tokio::task::spawn_blocking(move || {
        rank_stations(&*source, strategy, &query)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("ranking task failed: {e}"),
    })??;

    Ok(Json(stations))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "rejected request");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
