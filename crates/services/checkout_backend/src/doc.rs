// --- File: crates/services/checkout_backend/src/doc.rs ---
#![cfg(feature = "openapi")]
use checkout_common::{CartItem, CreatePaymentIntentRequest, CreatePaymentIntentResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Checkout Demo Backend",
        version = "0.1.0",
        description = "Creates payment intents for the checkout screen",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(crate::handlers::create_payment_intent_handler),
    components(schemas(CartItem, CreatePaymentIntentRequest, CreatePaymentIntentResponse)),
    tags((name = "Checkout", description = "Payment intent creation"))
)]
pub struct CheckoutApiDoc;
