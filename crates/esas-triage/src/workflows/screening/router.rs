use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    PatientIdentity, RawAnswers, ScreeningId, ScreeningSubmission, ScreeningType,
};
use super::repository::{RepositoryError, ScreeningRepository};
use super::service::{ScreeningService, ScreeningServiceError};

const DEFAULT_RECENT_LIMIT: usize = 20;
const MAX_RECENT_LIMIT: usize = 100;

/// Router builder exposing HTTP endpoints for evaluation and recorded screenings.
pub fn screening_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: ScreeningRepository + 'static,
{
    Router::new()
        .route("/api/v1/screenings/evaluate", post(evaluate_handler::<R>))
        .route(
            "/api/v1/screenings",
            post(submit_handler::<R>).get(recent_handler::<R>),
        )
        .route("/api/v1/screenings/:screening_id", get(status_handler::<R>))
        .with_state(service)
}

/// Inbound screening payload. Accepts the legacy `patient_*` field names and
/// converts them into the canonical [`PatientIdentity`].
#[derive(Debug, Deserialize)]
pub struct ScreeningRequest {
    pub answers: RawAnswers,
    pub patient: PatientPayload,
    #[serde(default)]
    pub screening_type: ScreeningType,
}

#[derive(Debug, Deserialize)]
pub struct PatientPayload {
    #[serde(alias = "patient_name")]
    pub name: String,
    #[serde(default, alias = "patient_age")]
    pub age: Option<u16>,
    #[serde(default, alias = "patient_gender")]
    pub gender: Option<String>,
    #[serde(default, alias = "facility_name")]
    pub facility: Option<String>,
}

impl From<PatientPayload> for PatientIdentity {
    fn from(payload: PatientPayload) -> Self {
        PatientIdentity {
            name: payload.name,
            age: payload.age,
            gender: payload.gender,
            facility: payload.facility,
        }
    }
}

impl From<ScreeningRequest> for ScreeningSubmission {
    fn from(request: ScreeningRequest) -> Self {
        ScreeningSubmission {
            answers: request.answers,
            patient: request.patient.into(),
            screening_type: request.screening_type,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

pub(crate) async fn evaluate_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Json(answers): Json<RawAnswers>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    match service.screen(&answers) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Json(request): Json<ScreeningRequest>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    match service.record(request.into()) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(screening_id): Path<String>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let id = ScreeningId(screening_id);
    match service.get(&id) {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "screening_id": id.0,
                "error": "screening not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn recent_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);

    match service.recent(limit) {
        Ok(screenings) => (StatusCode::OK, Json(screenings)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ScreeningServiceError) -> Response {
    match error {
        ScreeningServiceError::Screening(error) => {
            let summary = error.report().summary();
            let payload = json!({
                "error": error.to_string(),
                "isValid": summary.is_valid,
                "errors": summary.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        ScreeningServiceError::InvalidRow(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        ScreeningServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "screening already exists" });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        ScreeningServiceError::Repository(error @ RepositoryError::CapacityExceeded { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
