use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::screening::{ImportError, RepositoryError, ScreeningServiceError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Top-level failure for the CLI and HTTP entry points.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("screening error: {0}")]
    Screening(#[from] ScreeningServiceError),
    #[error("import error: {0}")]
    Import(#[from] ImportError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Screening(ScreeningServiceError::Screening(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Screening(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Import(_) | AppError::Screening(ScreeningServiceError::InvalidRow(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Screening(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::screening::{validate, RawAnswers, ScreeningError};

    #[test]
    fn invalid_assessment_maps_to_unprocessable_entity() {
        let report = validate(&RawAnswers::new());
        let error = AppError::from(ScreeningServiceError::from(
            ScreeningError::InvalidAssessment(report),
        ));

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(error.to_string().contains("item 1 is missing"));
    }

    #[test]
    fn missing_screening_maps_to_not_found() {
        let error = AppError::from(ScreeningServiceError::from(RepositoryError::NotFound));
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }
}
