use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{DealId, DealSnapshot, DealStatus};
use super::repository::{CoachingNotifier, DealRepository, RepositoryError};
use super::service::{DealCoachingError, DealCoachingService};

/// Router builder exposing HTTP endpoints for deal intake and qualification.
pub fn deal_router<R, N>(service: Arc<DealCoachingService<R, N>>) -> Router
where
    R: DealRepository + 'static,
    N: CoachingNotifier + 'static,
{
    Router::new()
        .route("/api/v1/deals", post(register_handler::<R, N>))
        .route(
            "/api/v1/deals/:deal_id",
            get(status_handler::<R, N>).put(update_handler::<R, N>),
        )
        .route(
            "/api/v1/deals/:deal_id/qualification",
            post(qualify_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R, N>(
    State(service): State<Arc<DealCoachingService<R, N>>>,
    axum::Json(snapshot): axum::Json<DealSnapshot>,
) -> Response
where
    R: DealRepository + 'static,
    N: CoachingNotifier + 'static,
{
    match service.register(snapshot) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(DealCoachingError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "deal already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<DealCoachingService<R, N>>>,
    Path(deal_id): Path<String>,
) -> Response
where
    R: DealRepository + 'static,
    N: CoachingNotifier + 'static,
{
    let id = DealId(deal_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(DealCoachingError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "deal_id": id.0,
                "status": DealStatus::Captured.label(),
                "coaching_summary": "pending qualification",
                "average_score": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn update_handler<R, N>(
    State(service): State<Arc<DealCoachingService<R, N>>>,
    Path(deal_id): Path<String>,
    axum::Json(snapshot): axum::Json<DealSnapshot>,
) -> Response
where
    R: DealRepository + 'static,
    N: CoachingNotifier + 'static,
{
    let id = DealId(deal_id);
    match service.update_snapshot(&id, snapshot) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(DealCoachingError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "deal not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn qualify_handler<R, N>(
    State(service): State<Arc<DealCoachingService<R, N>>>,
    Path(deal_id): Path<String>,
) -> Response
where
    R: DealRepository + 'static,
    N: CoachingNotifier + 'static,
{
    let id = DealId(deal_id);
    match service.qualify(&id) {
        Ok(outcome) => {
            let payload = json!({
                "deal_id": id.0,
                "average_score": outcome.scorecard.average(),
                "scorecard": outcome.scorecard,
                "gaps": outcome.gaps,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(DealCoachingError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "deal not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
