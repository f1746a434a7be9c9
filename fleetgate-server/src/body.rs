//! JSON body validation, run before dispatch
//!
//! Requests that advertise `application/json` are buffered up to the
//! configured limit and syntax-checked before routing sees them, so handler
//! groups never receive a body that claims to be JSON but is not. Other
//! content types pass through untouched.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http_body_util::{BodyExt, Limited};

use crate::error::ApiError;

/// Whether the request declares a JSON payload. Parameters such as
/// `charset` are ignored; only the media type essence counts.
fn declares_json(request: &Request) -> bool {
    let Some(content_type) = request.headers().get(CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .eq_ignore_ascii_case("application/json")
}

/// Buffer and syntax-check JSON bodies before dispatch. Validated bytes are
/// handed to the mounted handlers unchanged.
pub async fn validate_json(State(limit): State<usize>, request: Request, next: Next) -> Response {
    if !declares_json(&request) {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match Limited::new(body, limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) if err.is::<http_body_util::LengthLimitError>() => {
            return ApiError::PayloadTooLarge { limit }.into_response();
        }
        Err(err) => {
            return ApiError::UnreadableBody {
                detail: err.to_string(),
            }
            .into_response();
        }
    };

    // An empty body is tolerated; only non-empty payloads must parse.
    if !bytes.is_empty() {
        if let Err(err) = serde_json::from_slice::<serde::de::IgnoredAny>(&bytes) {
            return ApiError::MalformedJson {
                detail: err.to_string(),
            }
            .into_response();
        }
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    next.run(request).await
}
