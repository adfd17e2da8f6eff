// --- File: crates/checkout_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for the checkout workspace.
///
/// Each crate keeps its own error enum and converts into this one at its
/// boundary. The `Display` text of every variant is what the user sees in the
/// checkout error dialog, so it is written as a human-readable sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Transport-level failure: connection refused, DNS, TLS, timeout.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The backend answered with a non-2xx status.
    #[error("Backend responded with HTTP {status}: {message}")]
    HttpStatusError { status: u16, message: String },

    /// The body could not be parsed or lacked the expected field.
    #[error("Malformed response: {0}")]
    MalformedResponseError(String),

    /// Opaque failure reported by the external payment sheet.
    #[error("{0}")]
    PaymentSheetError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CheckoutError {
    fn status_code(&self) -> u16 {
        match self {
            CheckoutError::NetworkError(_) => 502,
            CheckoutError::HttpStatusError { .. } => 502,
            CheckoutError::MalformedResponseError(_) => 502,
            CheckoutError::PaymentSheetError(_) => 402,
            CheckoutError::ConfigError(_) => 500,
            CheckoutError::ValidationError(_) => 400,
            CheckoutError::ExternalServiceError { .. } => 502,
            CheckoutError::InternalError(_) => 500,
        }
    }
}

impl From<reqwest::Error> for CheckoutError {
    fn from(err: reqwest::Error) -> Self {
        CheckoutError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        CheckoutError::MalformedResponseError(err.to_string())
    }
}

impl From<config::ConfigError> for CheckoutError {
    fn from(err: config::ConfigError) -> Self {
        CheckoutError::ConfigError(err.to_string())
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> CheckoutError {
    CheckoutError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> CheckoutError {
    CheckoutError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> CheckoutError {
    CheckoutError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> CheckoutError {
    CheckoutError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_sheet_error_is_shown_verbatim() {
        let err = CheckoutError::PaymentSheetError("Your card was declined.".to_string());
        assert_eq!(err.to_string(), "Your card was declined.");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("empty cart").status_code(), 400);
        assert_eq!(config_error("no key").status_code(), 500);
        assert_eq!(external_service_error("Stripe API", "down").status_code(), 502);
        assert_eq!(internal_error("boom").status_code(), 500);
    }

    #[test]
    fn test_serde_error_maps_to_malformed_response() {
        let err: CheckoutError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, CheckoutError::MalformedResponseError(_)));
    }
}
