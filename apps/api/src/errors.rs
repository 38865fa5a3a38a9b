use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure in the analysis pipeline surfaces as exactly one of these
/// variants; nothing below this layer recovers on its own, and no handler
/// ever returns a partially-filled analysis alongside an error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Document read error: {0}")]
    DocumentRead(#[from] pdf_extract::OutputError),

    #[error("Document contains no extractable text")]
    EmptyDocument,

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Analysis cancelled after {0}s")]
    Cancelled(u64),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "An API credential is required".to_string(),
            ),
            AppError::DocumentRead(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_READ_ERROR",
                format!("Could not read the uploaded PDF: {e}"),
            ),
            AppError::EmptyDocument => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_DOCUMENT",
                "The PDF parsed but contains no extractable text".to_string(),
            ),
            AppError::Analysis(msg) => {
                tracing::error!("Analysis error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_ERROR",
                    "The analysis request failed".to_string(),
                )
            }
            AppError::Cancelled(secs) => (
                StatusCode::GATEWAY_TIMEOUT,
                "ANALYSIS_CANCELLED",
                format!("Analysis did not complete within {secs}s"),
            ),
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
