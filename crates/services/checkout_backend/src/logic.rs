// --- File: crates/services/checkout_backend/src/logic.rs ---
use checkout_common::{CartItem, CreatePaymentIntentRequest, CreatePaymentIntentResponse};
use checkout_config::StripeConfig;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::PaymentIntentError;

#[derive(Deserialize, Debug)]
struct StripePaymentIntentApiResponse {
    pub id: String,
    pub client_secret: Option<String>,
}

/// Totals the cart from the server-side catalog.
///
/// Amounts sent by the client are ignored so the price cannot be manipulated.
pub fn calculate_order_amount(
    items: &[CartItem],
    catalog: &BTreeMap<String, i64>,
) -> Result<i64, PaymentIntentError> {
    if items.is_empty() {
        return Err(PaymentIntentError::EmptyCart);
    }
    items.iter().try_fold(0i64, |total, item| {
        let price = catalog
            .get(&item.id)
            .ok_or_else(|| PaymentIntentError::UnknownItem(item.id.clone()))?;
        total
            .checked_add(*price)
            .ok_or(PaymentIntentError::InvalidAmount)
    })
}

/// Creates a Stripe PaymentIntent for the cart and returns its client secret.
pub async fn create_payment_intent(
    http: &Client,
    stripe_config: &StripeConfig,
    stripe_secret_key: &str,
    request: &CreatePaymentIntentRequest,
) -> Result<CreatePaymentIntentResponse, PaymentIntentError> {
    let amount = calculate_order_amount(&request.items, &stripe_config.catalog)?;
    if amount <= 0 {
        return Err(PaymentIntentError::InvalidAmount);
    }

    let form_body: Vec<(&str, String)> = vec![
        ("amount", amount.to_string()),
        ("currency", stripe_config.currency.to_lowercase()),
        ("automatic_payment_methods[enabled]", "true".to_string()),
    ];

    let api_url = format!(
        "{}/v1/payment_intents",
        stripe_config.api_base.trim_end_matches('/')
    );
    info!(
        "[Stripe Logic] Creating PaymentIntent: amount={}, currency={}",
        amount, stripe_config.currency
    );

    let response = http
        .post(&api_url)
        .basic_auth(stripe_secret_key, None::<&str>)
        .header("Idempotency-Key", Uuid::new_v4().to_string())
        .form(&form_body)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let stripe_response: StripePaymentIntentApiResponse = serde_json::from_str(&body_text)?;
        match stripe_response.client_secret {
            Some(client_secret) => {
                info!("[Stripe Logic] PaymentIntent {} created", stripe_response.id);
                Ok(CreatePaymentIntentResponse { client_secret })
            }
            None => {
                error!(
                    "[Stripe Logic] PaymentIntent {} has no client_secret",
                    stripe_response.id
                );
                Err(PaymentIntentError::InternalError(
                    "Stripe response missing client secret".to_string(),
                ))
            }
        }
    } else {
        let error_message = match serde_json::from_str::<serde_json::Value>(&body_text) {
            Ok(json_body) => json_body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or(&body_text)
                .to_string(),
            Err(_) => body_text,
        };
        error!(
            "[Stripe Logic] Stripe API request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        Err(PaymentIntentError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BTreeMap<String, i64> {
        let mut catalog = BTreeMap::new();
        catalog.insert("xl-tshirt".to_string(), 1400);
        catalog.insert("socks".to_string(), 300);
        catalog
    }

    #[test]
    fn test_total_of_fixed_cart() {
        let request = CreatePaymentIntentRequest::fixed_cart();
        assert_eq!(calculate_order_amount(&request.items, &catalog()).unwrap(), 1400);
    }

    #[test]
    fn test_total_sums_all_items() {
        let items = vec![
            CartItem::new("xl-tshirt"),
            CartItem::new("socks"),
            CartItem::new("socks"),
        ];
        assert_eq!(calculate_order_amount(&items, &catalog()).unwrap(), 2000);
    }

    #[test]
    fn test_client_amount_is_ignored() {
        let items = vec![CartItem {
            id: "xl-tshirt".to_string(),
            amount: Some(1),
        }];
        assert_eq!(calculate_order_amount(&items, &catalog()).unwrap(), 1400);
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let items = vec![CartItem::new("hat")];
        assert!(matches!(
            calculate_order_amount(&items, &catalog()),
            Err(PaymentIntentError::UnknownItem(id)) if id == "hat"
        ));
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        assert!(matches!(
            calculate_order_amount(&[], &catalog()),
            Err(PaymentIntentError::EmptyCart)
        ));
    }

    #[test]
    fn test_overflow_is_rejected() {
        let mut catalog = catalog();
        catalog.insert("yacht".to_string(), i64::MAX);
        let items = vec![CartItem::new("yacht"), CartItem::new("socks")];
        assert!(matches!(
            calculate_order_amount(&items, &catalog),
            Err(PaymentIntentError::InvalidAmount)
        ));
    }
}
