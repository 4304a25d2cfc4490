//! Router assembly. Route tables live here; behavior lives in the handlers.

mod common;
mod users;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

pub use common::{common_routes, common_routes_with_ready};
pub use users::user_routes;

use crate::middleware::recovery_layer;
use crate::response::error_body;
use crate::state::AppState;

/// The full application router: user routes, common routes with the readiness
/// probe, the JSON 404 fallback, and the recovery layer outermost.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes(state.service))
        .merge(common_routes_with_ready(state.pool))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(recovery_layer())
}

/// Fallback for unmatched paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(error_body("Path not found")))
}
