use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::GenerationFailure;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Generation(#[from] GenerationFailure),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(failure) => {
                tracing::error!("Generation error: {failure}");
                let code = match failure {
                    GenerationFailure::Configuration(_) => "CONFIGURATION_ERROR",
                    _ => "GENERATION_ERROR",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, code, failure.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
