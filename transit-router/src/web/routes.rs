//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::catalogue::CatalogueError;
use crate::router::RouteOutcome;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lines/:name", get(line_stats))
        .route("/stops/:name", get(stop_lines))
        .route("/route", get(route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Statistics for one line.
async fn line_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LineStatsResponse>, AppError> {
    let stats = state
        .router
        .line_stats(&name)?
        .ok_or_else(|| AppError::NotFound {
            message: format!("line not found: {name}"),
        })?;

    Ok(Json(stats.into()))
}

/// Lines serving one stop.
async fn stop_lines(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StopLinesResponse>, AppError> {
    let lines = state
        .router
        .lines_at(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("stop not found: {name}"),
        })?;

    Ok(Json(StopLinesResponse {
        lines: lines.into_iter().map(str::to_string).collect(),
    }))
}

/// Fastest route between two stops.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    match state.router.route(&req.from, &req.to) {
        RouteOutcome::Found(itinerary) => Ok(Json(RouteResponse::from_itinerary(&itinerary))),
        RouteOutcome::Unreachable => Err(AppError::NotFound {
            message: format!("no route from {} to {}", req.from, req.to),
        }),
        RouteOutcome::NotFound { stop } => Err(AppError::NotFound {
            message: format!("stop not found: {stop}"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl From<CatalogueError> for AppError {
    fn from(e: CatalogueError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
