//! Routes served by the gateway itself, outside the `/api` mounts

pub mod health;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths no mount owns.
pub async fn unmatched(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
