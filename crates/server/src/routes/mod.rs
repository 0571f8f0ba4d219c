use axum::{Router, http::StatusCode, middleware, routing::get};

use crate::{AppState, middleware as app_middleware};

pub mod health;
pub mod root;

/// The application's route table. Anything not listed here falls through to
/// axum's default 404/405 responses without touching the identity service.
pub fn router(state: AppState) -> Router {
    Router::new()
        // HEAD would otherwise be served by the GET handler
        .route(
            "/",
            get(root::log_current_user).head(|| async { StatusCode::METHOD_NOT_ALLOWED }),
        )
        .route("/health", get(health::health_check))
        .layer(middleware::from_fn(app_middleware::request_id_middleware))
        .with_state(state)
}
