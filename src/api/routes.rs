//! Shared state and router setup used by the binary and the tests.
use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::inpaint::client::InpaintClient;

/// Inpainting bodies carry inline data-URI images, so the limit sits well
/// above axum's 2 MB default.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

pub struct AppState {
    pub inpaint_client: InpaintClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    router_with_body_limit(state, MAX_BODY_BYTES)
}

pub fn router_with_body_limit(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/inpaint", any(handlers::inpaint))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
