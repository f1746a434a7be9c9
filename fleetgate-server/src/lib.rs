//! fleetgate-server: HTTP admission gateway
//!
//! Terminates HTTP for the vehicle management backend. Every request passes
//! the origin gate first, then JSON body validation, then prefix dispatch
//! to the mounted handler groups. Rejections happen before routing, so a
//! refused request never touches a handler.

pub mod body;
pub mod error;
pub mod gate;
pub mod groups;
pub mod routes;

use std::net::SocketAddr;

use axum::{middleware, Router};
use fleetgate_core::{DispatchTable, GatewayConfig};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use groups::HandlerGroups;

/// Build the gateway router.
///
/// The middleware stack runs top to bottom: request tracing, the origin
/// gate, the cross-origin grant layer, JSON body validation, and finally
/// the dispatch table folded into nested routes. `/health` is served
/// outside the `/api` mounts and unowned paths fall through to 404.
pub fn build_router(config: &GatewayConfig, groups: HandlerGroups) -> Router {
    let api = DispatchTable::standard()
        .iter()
        .fold(Router::new(), |router, mount| {
            router.nest(mount.prefix, groups.router_for(mount.group))
        });

    api.merge(routes::health::router())
        .fallback(routes::unmatched)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    config.allowed_origins.clone(),
                    gate::enforce,
                ))
                .layer(gate::cors_layer(&config.allowed_origins))
                .layer(middleware::from_fn_with_state(
                    config.json_body_limit,
                    body::validate_json,
                )),
        )
}

/// Start the gateway and serve until shutdown.
pub async fn serve(config: GatewayConfig, groups: HandlerGroups) -> Result<(), ServerError> {
    let app = build_router(&config, groups);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("gateway listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gateway shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid bind address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
