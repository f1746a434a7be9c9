//! Origin admission, enforced before routing
//!
//! tower-http's `CorsLayer` only withholds grant headers; it never fails a
//! request. Admission therefore runs as its own middleware in front of the
//! grant layer: a request declaring an origin outside the allow-list is
//! refused with 403 before any handler group can run, and the `CorsLayer`
//! behind it only ever sees admitted traffic.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use fleetgate_core::{AllowList, Decision};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::error::ApiError;

/// Admission middleware. Evaluates the declared `Origin` against the
/// allow-list and refuses rejected requests before they reach routing.
pub async fn enforce(State(allow): State<AllowList>, request: Request, next: Next) -> Response {
    let origin = match request.headers().get(ORIGIN) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(text) => Some(text),
            // Not valid header text, so it cannot match any listed origin.
            Err(_) => {
                tracing::warn!("refusing request with a non-UTF8 Origin header");
                return ApiError::CorsDenied.into_response();
            }
        },
    };

    if let Decision::Reject { origin } = allow.evaluate(origin) {
        tracing::warn!(origin, "origin not on the allow-list, refusing request");
        return ApiError::CorsDenied.into_response();
    }

    next.run(request).await
}

/// Grant layer for admitted origins.
///
/// Answers preflights and attaches the response headers that let browsers
/// expose responses to the listed frontends, credentials included. Listing
/// explicit origins is required here: a wildcard cannot be combined with
/// credentialed requests.
pub fn cors_layer(allow: &AllowList) -> CorsLayer {
    let origins: Vec<HeaderValue> = allow
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    use super::*;

    fn gated_app(hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/probe",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "ok"
                    }
                }),
            )
            .layer(middleware::from_fn_with_state(AllowList::default(), enforce))
    }

    fn probe(origin: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/probe");
        if let Some(origin) = origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn allowed_origin_reaches_the_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gated_app(hits.clone());

        let response = app
            .oneshot(probe(Some("http://localhost:3000")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_origin_never_reaches_the_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gated_app(hits.clone());

        let response = app
            .oneshot(probe(Some("https://evil.example")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn absent_origin_is_admitted() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gated_app(hits.clone());

        let response = app.oneshot(probe(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_utf8_origin_is_refused() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gated_app(hits.clone());

        let request = Request::builder()
            .uri("/probe")
            .header(header::ORIGIN, HeaderValue::from_bytes(b"\xff\xfe").unwrap())
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
