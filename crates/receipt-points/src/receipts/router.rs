use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::domain::{Receipt, ReceiptId};
use super::repository::{ReceiptRepository, RepositoryError};
use super::service::{ReceiptService, ReceiptServiceError};

const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Body returned when a receipt is accepted.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptIssuedView {
    pub id: ReceiptId,
}

/// Body returned for a points lookup.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointsView {
    pub points: u64,
}

/// Router builder exposing the receipt intake and points lookup endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let Json(receipt) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "unreadable receipt payload");
            let payload = json!({
                "message": "The receipt is invalid.",
                "detail": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.submit(receipt) {
        Ok(id) => (StatusCode::OK, Json(ReceiptIssuedView { id })).into_response(),
        Err(ReceiptServiceError::Validation(error)) => {
            let payload = json!({
                "message": error.to_string(),
                "violations": error.violations,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(ReceiptServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "message": "receipt already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "message": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let id = ReceiptId(id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(PointsView { points })).into_response(),
        Err(err) if err.is_not_found() => {
            let payload = json!({
                "message": NOT_FOUND_MESSAGE,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "message": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
