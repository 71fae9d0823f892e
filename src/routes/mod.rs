//! HTTP route definitions.
//!
//! There is one real route, `GET /health`. Everything else, including other
//! methods on `/health`, ends in the same empty 404.

mod health_routes;

pub use health_routes::{HealthStatus, HEALTH_PATH};

use crate::middleware::trace_request;
use axum::{middleware, Router};

/// Creates the application router.
pub fn create_router() -> Router {
    Router::new()
        .merge(health_routes::routes())
        .fallback(health_routes::not_found)
        .layer(middleware::from_fn(trace_request))
}
