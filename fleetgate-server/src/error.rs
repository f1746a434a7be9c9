//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Message returned with a refused origin, word for word what the deployed
/// frontends test against.
pub const CORS_DENIED_MESSAGE: &str =
    "The CORS policy for this site does not allow access from the specified Origin.";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Origin not on the allow-list (403)
    CorsDenied,

    /// Body advertised as JSON but did not parse (400)
    MalformedJson { detail: String },

    /// Body could not be read off the wire (400)
    UnreadableBody { detail: String },

    /// Body exceeded the configured limit (413)
    PayloadTooLarge { limit: usize },

    /// No mount owns the path (404)
    NotFound { path: String },

    /// Mounted group has no handlers attached yet (501)
    NotImplemented { group: &'static str },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::CorsDenied => (
                StatusCode::FORBIDDEN,
                json!({
                    "error": "cors_denied",
                    "message": CORS_DENIED_MESSAGE
                }),
            ),
            Self::MalformedJson { detail } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "malformed_json",
                    "message": format!("request body is not valid JSON: {}", detail)
                }),
            ),
            Self::UnreadableBody { detail } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "unreadable_body",
                    "message": format!("request body could not be read: {}", detail)
                }),
            ),
            Self::PayloadTooLarge { limit } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                json!({
                    "error": "payload_too_large",
                    "message": format!("request body exceeds the {} byte limit", limit)
                }),
            ),
            Self::NotFound { path } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("no handler mounted for {}", path)
                }),
            ),
            Self::NotImplemented { group } => (
                StatusCode::NOT_IMPLEMENTED,
                json!({
                    "error": "not_implemented",
                    "message": format!("the {} service is not attached to this gateway", group)
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
