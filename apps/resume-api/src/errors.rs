use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::extract::ExtractionError;
use crate::llm_client::CompletionError;
use crate::wizard::DraftError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{ "error": "<message>" }`; the browser client
/// only ever reads that one field.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Draft(#[from] DraftError),

    #[error("Invalid JSON body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Invalid upload: {0}")]
    MultipartBody(#[from] MultipartRejection),

    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("{0}")]
    Completion(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Draft(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::JsonBody(e) => (e.status(), e.body_text()),
            AppError::Multipart(e) => (e.status(), e.body_text()),
            AppError::MultipartBody(e) => (e.status(), e.body_text()),
            AppError::Extraction(e) => {
                tracing::error!("Resume extraction error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Completion(e) => {
                tracing::error!("Completion service error: {e}");
                // Upstream message is echoed back; there is nothing secret in it.
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
