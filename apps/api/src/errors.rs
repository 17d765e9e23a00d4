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
/// Generation-side failures carry two strings: the generic per-tool message
/// shown to the user, and a detail string that is logged but never returned.
/// The three generation error kinds (transport, response shape, response
/// schema) map to distinct error codes so callers can tell "the service
/// failed" apart from "the service returned garbage".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Generation transport error: {detail}")]
    Generation { message: String, detail: String },

    #[error("Generation response was not valid JSON: {detail}")]
    ResponseShape { message: String, detail: String },

    #[error("Generation response failed schema validation: {detail}")]
    ResponseSchema { message: String, detail: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MalformedInput(msg) => {
                (StatusCode::BAD_REQUEST, "MALFORMED_INPUT", msg.clone())
            }
            AppError::UnknownTool(id) => (
                StatusCode::NOT_FOUND,
                "UNKNOWN_TOOL",
                format!("No tool with id '{id}'"),
            ),
            AppError::Generation { message, detail } => {
                tracing::error!("Generation transport error: {detail}");
                (StatusCode::BAD_GATEWAY, "GENERATION_ERROR", message.clone())
            }
            AppError::ResponseShape { message, detail } => {
                tracing::error!("Generation returned non-JSON text: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RESPONSE_SHAPE_ERROR",
                    message.clone(),
                )
            }
            AppError::ResponseSchema { message, detail } => {
                tracing::error!("Generation response violated schema: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RESPONSE_SCHEMA_ERROR",
                    message.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
