// --- File: crates/services/checkout_backend/src/routes.rs ---

use crate::handlers::{create_payment_intent_handler, index_handler, BackendState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Creates the router for the checkout API.
pub fn routes(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/create-payment-intent", post(create_payment_intent_handler))
        .with_state(state)
}

/// The API router with the configured public directory served for everything else.
pub fn app(state: Arc<BackendState>) -> Router {
    let public_dir = state.config.server.public_dir.clone();
    routes(state).fallback_service(ServeDir::new(public_dir))
}
