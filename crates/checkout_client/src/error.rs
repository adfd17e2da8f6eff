// --- File: crates/checkout_client/src/error.rs ---
use checkout_common::CheckoutError;
use thiserror::Error;

/// Failures of a single payment intent fetch.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("Payment intent request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered, but not with a 2xx status. The body is ignored.
    #[error("Backend responded with HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// 2xx response whose body is not JSON or has no string `clientSecret`.
    #[error("{0}")]
    MalformedResponse(String),

    #[error("Failed to encode cart payload: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<BackendError> for CheckoutError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Network(e) => CheckoutError::NetworkError(e.to_string()),
            BackendError::HttpStatus { status, message } => {
                CheckoutError::HttpStatusError { status, message }
            }
            BackendError::MalformedResponse(msg) => CheckoutError::MalformedResponseError(msg),
            BackendError::Encoding(e) => {
                CheckoutError::InternalError(format!("Failed to encode cart payload: {}", e))
            }
        }
    }
}
