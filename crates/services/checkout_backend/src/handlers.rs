// --- File: crates/services/checkout_backend/src/handlers.rs ---
use axum::{extract::State, Json};
use checkout_common::{
    CheckoutError, CreatePaymentIntentRequest, CreatePaymentIntentResponse, HttpStatusCode,
};
use checkout_config::AppConfig;
use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::PaymentIntentError;
use crate::logic::create_payment_intent;

// --- State for Checkout Handlers ---
#[derive(Clone)]
pub struct BackendState {
    pub config: Arc<AppConfig>,
    /// Loaded from STRIPE_SECRET_KEY at startup; never from config files.
    pub stripe_secret_key: Option<String>,
    pub http: Client,
}

impl BackendState {
    pub fn new(config: Arc<AppConfig>, stripe_secret_key: Option<String>, http: Client) -> Self {
        Self {
            config,
            stripe_secret_key,
            http,
        }
    }
}

/// Axum handler to create a PaymentIntent for the posted cart.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "PaymentIntent created", body = CreatePaymentIntentResponse),
        (status = 400, description = "Empty cart or unknown item"),
        (status = 500, description = "Stripe secret key not configured"),
        (status = 502, description = "Stripe API error")
    ),
    tag = "Checkout"
))]
pub async fn create_payment_intent_handler(
    State(state): State<Arc<BackendState>>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, CheckoutError> {
    info!(
        "[Checkout Handler] create-payment-intent for {} item(s)",
        payload.items.len()
    );

    let result = match state.stripe_secret_key.as_deref() {
        Some(secret_key) => {
            create_payment_intent(&state.http, &state.config.stripe, secret_key, &payload).await
        }
        None => Err(PaymentIntentError::ConfigError),
    };

    result.map(Json).map_err(|err| {
        error!(
            "[Checkout Handler] create-payment-intent failed ({}): {}",
            err.status_code(),
            err
        );
        CheckoutError::from(err)
    })
}

pub async fn index_handler() -> &'static str {
    "Checkout demo backend is running."
}
