use crate::{errors::RelayError, handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handlers::chat::completions))
        .route("/health", get(|| async { "Working!" }))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// The relay accepts POST only; the body is never read on this path.
async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
