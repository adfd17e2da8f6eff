// --- File: crates/checkout_client/src/client.rs ---
use checkout_common::{
    create_client, BoxFuture, CheckoutError, ClientSecret, CreatePaymentIntentRequest,
    IntentSource,
};
use checkout_config::BackendConfig;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::error::BackendError;

pub const CREATE_PAYMENT_INTENT_PATH: &str = "/create-payment-intent";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const MISSING_SECRET_MESSAGE: &str = "Could not find payment intent client secret in response!";

/// HTTP client for the demo backend's `create-payment-intent` endpoint.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Builds a client with its own connection pool and the configured timeout.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = create_client(config.timeout_secs, true)?;
        Ok(Self { http, config })
    }

    pub fn endpoint_url(&self) -> String {
        self.config.endpoint(CREATE_PAYMENT_INTENT_PATH)
    }

    /// Posts the fixed cart and returns the `clientSecret` of the created intent.
    ///
    /// Exactly one request is sent per call.
    #[instrument(skip(self), fields(url = %self.endpoint_url()))]
    pub async fn fetch_payment_intent(&self) -> Result<ClientSecret, BackendError> {
        let url = self.endpoint_url();
        let body = serde_json::to_vec(&CreatePaymentIntentRequest::fixed_cart())?;

        info!("[Backend Client] Requesting payment intent");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("[Backend Client] Request to {} failed: {}", url, e);
                BackendError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string();
            error!("[Backend Client] Backend responded with {}", status);
            return Err(BackendError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body_text = response.text().await?;
        let secret = extract_client_secret(&body_text).inspect_err(|e| {
            error!("[Backend Client] {}", e);
        })?;

        info!("[Backend Client] Payment intent received");
        Ok(secret)
    }
}

/// Pulls the `clientSecret` string out of a response body.
///
/// Invalid JSON and a missing (or non-string) field are the same error kind;
/// only the message differs.
pub fn extract_client_secret(body: &str) -> Result<ClientSecret, BackendError> {
    let json: Value = serde_json::from_str(body).map_err(|e| {
        BackendError::MalformedResponse(format!("Response is not valid JSON: {}", e))
    })?;

    json.get("clientSecret")
        .and_then(Value::as_str)
        .map(ClientSecret::new)
        .ok_or_else(|| BackendError::MalformedResponse(MISSING_SECRET_MESSAGE.to_string()))
}

impl IntentSource for BackendClient {
    fn fetch_payment_intent(&self) -> BoxFuture<'_, ClientSecret, CheckoutError> {
        Box::pin(async move {
            BackendClient::fetch_payment_intent(self)
                .await
                .map_err(CheckoutError::from)
        })
    }
}
