use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::pdf_export::PdfError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// There is no fatal class: every failure maps to "stay on the current
/// step, show a message". Backend failures never touch committed data.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Text generation error: {0}")]
    Llm(#[from] LlmError),

    #[error("PDF export error: {0}")]
    PdfExport(#[from] PdfError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("Text generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "TEXT_GENERATION_ERROR",
                    format!("Error generating text: {e}"),
                )
            }
            AppError::PdfExport(e) => {
                tracing::error!("PDF export error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PDF_EXPORT_ERROR",
                    format!("Error generating PDF: {e}"),
                )
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
