// --- File: crates/checkout_client/src/lib.rs ---

pub mod client;
pub mod error;

pub use client::{
    extract_client_secret, BackendClient, CREATE_PAYMENT_INTENT_PATH, JSON_CONTENT_TYPE,
};
pub use error::BackendError;
