// --- File: crates/checkout_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared wire and boundary types
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, validation_error, CheckoutError,
    HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, HTTP_CLIENT};

pub use logging::{init, init_with_level, log_error, log_result};

pub use models::{
    CartItem, ClientSecret, CreatePaymentIntentRequest, CreatePaymentIntentResponse,
    PaymentSheetConfiguration, PaymentSheetResult, FIXED_CART_ITEM_ID,
};
pub use services::{BoxFuture, BoxOutcome, IntentSource, PaymentSheet};
