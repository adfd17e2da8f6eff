// --- File: crates/checkout_common/src/models.rs ---
//! Wire types shared by the checkout client and the demo backend, plus the
//! values that cross the payment sheet boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Identifier of the single item the checkout screen buys.
pub const FIXED_CART_ITEM_ID: &str = "xl-tshirt";

/// One line of the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CartItem {
    #[cfg_attr(feature = "openapi", schema(example = "xl-tshirt"))]
    pub id: String,
    /// Ignored by the backend, which prices items from its own catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

impl CartItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount: None,
        }
    }
}

/// Body of `POST /create-payment-intent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreatePaymentIntentRequest {
    pub items: Vec<CartItem>,
}

impl CreatePaymentIntentRequest {
    /// The hardcoded cart: `{"items":[{"id":"xl-tshirt"}]}`.
    pub fn fixed_cart() -> Self {
        Self {
            items: vec![CartItem::new(FIXED_CART_ITEM_ID)],
        }
    }
}

/// Response of `POST /create-payment-intent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreatePaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    #[cfg_attr(feature = "openapi", schema(example = "pi_123_secret_456"))]
    pub client_secret: String,
}

/// Opaque token authorizing the client to complete one payment intent.
///
/// Held in memory only. `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(***)")
    }
}

impl From<String> for ClientSecret {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

/// Options handed to the payment sheet on presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSheetConfiguration {
    pub merchant_display_name: String,
}

impl PaymentSheetConfiguration {
    pub fn new(merchant_display_name: impl Into<String>) -> Self {
        Self {
            merchant_display_name: merchant_display_name.into(),
        }
    }
}

/// The single result a payment sheet reports for one presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentSheetResult {
    Completed,
    Canceled,
    /// Carries the sheet's human-readable failure description.
    Failed(String),
}
