//! API routes and handlers.

mod wrapped;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use super::state::AppState;

pub use wrapped::{INVALID_SAVE, NO_SAVE_DATA};

/// Build the API router.
pub fn router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes());

    Router::new()
        .route("/health", get(health))
        // The shipped client posts to the trailing-slash form.
        .route(
            "/choku-wrapped",
            get(wrapped::get_snapshot).post(wrapped::upload_save),
        )
        .route(
            "/choku-wrapped/",
            get(wrapped::get_snapshot).post(wrapped::upload_save),
        )
        .route("/choku-wrapped/refresh", post(wrapped::refresh))
        .route("/choku-wrapped/{hash}", get(wrapped::get_save))
        .layer(body_limit)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
