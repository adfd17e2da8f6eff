// --- File: crates/services/checkout_backend/src/error.rs ---
use checkout_common::{
    config_error, external_service_error, validation_error, CheckoutError, HttpStatusCode,
};
use thiserror::Error;

/// Errors of the `create-payment-intent` endpoint.
#[derive(Error, Debug)]
pub enum PaymentIntentError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Unknown item in cart: {0}")]
    UnknownItem(String),

    #[error("Order total is out of range")]
    InvalidAmount,

    /// Error occurred during a Stripe API request
    #[error("Stripe API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Stripe API response
    #[error("Failed to parse Stripe API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// STRIPE_SECRET_KEY is not set
    #[error("Stripe configuration missing or incomplete")]
    ConfigError,

    #[error("Internal processing error: {0}")]
    InternalError(String),
}

impl From<PaymentIntentError> for CheckoutError {
    fn from(err: PaymentIntentError) -> Self {
        match err {
            PaymentIntentError::EmptyCart
            | PaymentIntentError::UnknownItem(_)
            | PaymentIntentError::InvalidAmount => validation_error(err),
            PaymentIntentError::RequestError(e) => external_service_error("Stripe API", e),
            PaymentIntentError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Stripe API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            PaymentIntentError::ParseError(e) => {
                CheckoutError::MalformedResponseError(format!("Stripe response parse error: {}", e))
            }
            PaymentIntentError::ConfigError => config_error(err),
            PaymentIntentError::InternalError(msg) => {
                CheckoutError::InternalError(format!("Stripe internal error: {}", msg))
            }
        }
    }
}

impl HttpStatusCode for PaymentIntentError {
    fn status_code(&self) -> u16 {
        match self {
            PaymentIntentError::EmptyCart
            | PaymentIntentError::UnknownItem(_)
            | PaymentIntentError::InvalidAmount => 400,
            PaymentIntentError::RequestError(_)
            | PaymentIntentError::ApiError { .. }
            | PaymentIntentError::ParseError(_) => 502,
            PaymentIntentError::ConfigError | PaymentIntentError::InternalError(_) => 500,
        }
    }
}
