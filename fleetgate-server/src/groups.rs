//! Handler groups mounted behind the dispatch table
//!
//! The gateway owns admission and dispatch; the four functional areas are
//! plain routers injected by the embedding application. The bundled binary
//! mounts [`HandlerGroups::stubs`] so the admission path stays observable
//! end to end before any real service is attached.

use axum::Router;
use fleetgate_core::HandlerGroup;

use crate::error::ApiError;

/// One sub-router per functional area served under `/api`.
#[derive(Clone, Default)]
pub struct HandlerGroups {
    pub auth: Router,
    pub vehicle: Router,
    pub reservation: Router,
    pub reimbursement: Router,
}

impl HandlerGroups {
    /// Groups that answer every request with 501.
    pub fn stubs() -> Self {
        Self {
            auth: stub_router(HandlerGroup::Auth),
            vehicle: stub_router(HandlerGroup::Vehicle),
            reservation: stub_router(HandlerGroup::Reservation),
            reimbursement: stub_router(HandlerGroup::Reimbursement),
        }
    }

    /// The router mounted for `group`.
    pub fn router_for(&self, group: HandlerGroup) -> Router {
        match group {
            HandlerGroup::Auth => self.auth.clone(),
            HandlerGroup::Vehicle => self.vehicle.clone(),
            HandlerGroup::Reservation => self.reservation.clone(),
            HandlerGroup::Reimbursement => self.reimbursement.clone(),
        }
    }
}

fn stub_router(group: HandlerGroup) -> Router {
    Router::new().fallback(move || async move {
        ApiError::NotImplemented {
            group: group.name(),
        }
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn stub_groups_answer_501_on_any_path() {
        let stub = HandlerGroups::stubs().router_for(HandlerGroup::Vehicle);

        for path in ["/", "/list", "/42/update"] {
            let response = stub
                .clone()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        }
    }

    #[tokio::test]
    async fn router_for_returns_the_matching_group() {
        let groups = HandlerGroups {
            auth: Router::new(),
            ..HandlerGroups::stubs()
        };

        // The swapped-in empty router has no routes, so it 404s where the
        // stubs answer 501.
        let auth = groups.router_for(HandlerGroup::Auth);
        let response = auth
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
