//! Health check endpoint and the not-found response shared by every
//! unmatched request.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

/// The only path the server answers.
pub const HEALTH_PATH: &str = "/health";

/// Payload of a successful health check, serialized as `{"status":"ok"}`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub const fn ok() -> Self {
        HealthStatus { status: "ok" }
    }
}

/// Registers the health check route.
///
/// Only GET is served. HEAD and every other method get the same 404 as an
/// unknown path instead of axum's implicit HEAD handling or 405.
pub fn routes() -> Router {
    Router::new().route(
        HEALTH_PATH,
        get(health_check).head(not_found).fallback(not_found),
    )
}

/// Returns 200 with the JSON health payload.
///
/// The raw request target has to be exactly `/health`. A query string or an
/// absolute-form target (`http://host/health`) makes it a different target.
async fn health_check(uri: Uri) -> Response {
    if !is_exact_target(&uri) {
        return not_found().await.into_response();
    }
    Json(HealthStatus::ok()).into_response()
}

fn is_exact_target(uri: &Uri) -> bool {
    uri.scheme().is_none()
        && uri.authority().is_none()
        && uri.path_and_query().map(|pq| pq.as_str()) == Some(HEALTH_PATH)
}

/// 404 with an empty body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
