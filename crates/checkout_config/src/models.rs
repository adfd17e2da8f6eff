// --- File: crates/checkout_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_BACKEND_URL: &str = "http://10.0.2.2:4242";
pub const DEFAULT_MERCHANT_DISPLAY_NAME: &str = "Example, Inc.";
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

// --- Backend Client Config ---
// Where the checkout screen fetches its payment intent from.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    /// Request timeout for the intent fetch, in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl BackendConfig {
    /// Joins the configured base URL with an endpoint path, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// --- Payment Sheet Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaymentSheetConfig {
    pub merchant_display_name: String,
}

impl Default for PaymentSheetConfig {
    fn default() -> Self {
        Self {
            merchant_display_name: DEFAULT_MERCHANT_DISPLAY_NAME.to_string(),
        }
    }
}

// --- General Server Config (demo backend) ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as static files for unmatched routes.
    pub public_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4242,
            public_dir: "public".to_string(),
        }
    }
}

// --- Stripe Config ---
// Holds non-secret Stripe config. Secret key loaded directly from env var: STRIPE_SECRET_KEY
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct StripeConfig {
    pub api_base: String,
    pub currency: String,
    /// Unit price per catalog item id, in the smallest currency unit.
    pub catalog: BTreeMap<String, i64>,
}

impl Default for StripeConfig {
    fn default() -> Self {
        let mut catalog = BTreeMap::new();
        catalog.insert("xl-tshirt".to_string(), 1400);
        Self {
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
            currency: "vnd".to_string(),
            catalog,
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub payment_sheet: PaymentSheetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub stripe: StripeConfig,
}
