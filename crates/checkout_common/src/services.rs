// --- File: crates/checkout_common/src/services.rs ---
//! Service abstractions for the collaborators of the checkout flow.
//!
//! The coordinator only talks to these traits, so the real HTTP client and the
//! real payment sheet can be swapped for test doubles.

use std::future::Future;
use std::pin::Pin;

use crate::error::CheckoutError;
use crate::models::{ClientSecret, PaymentSheetConfiguration, PaymentSheetResult};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Type alias for a boxed future with an infallible output.
pub type BoxOutcome<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Something that can produce a payment intent client secret.
pub trait IntentSource: Send + Sync {
    /// Perform one fetch. Implementations make a single attempt and never retry.
    fn fetch_payment_intent(&self) -> BoxFuture<'_, ClientSecret, CheckoutError>;
}

/// The external payment UI.
///
/// `present` resolves exactly once per call with the outcome of that
/// presentation. Card entry, tokenization and authentication all happen
/// behind this boundary.
pub trait PaymentSheet: Send + Sync {
    fn present(
        &self,
        secret: ClientSecret,
        configuration: PaymentSheetConfiguration,
    ) -> BoxOutcome<'_, PaymentSheetResult>;
}
