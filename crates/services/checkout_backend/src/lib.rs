// --- File: crates/services/checkout_backend/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use error::PaymentIntentError;
pub use handlers::BackendState;
pub use routes::{app, routes};
