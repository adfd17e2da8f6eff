use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use checkout_backend::{routes, BackendState};
use checkout_client::BackendClient;
use checkout_config::{AppConfig, BackendConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_SECRET_KEY: &str = "sk_test_123";

fn state_for(stripe: &MockServer, secret_key: Option<&str>) -> Arc<BackendState> {
    let mut config = AppConfig::default();
    config.stripe.api_base = stripe.uri();
    Arc::new(BackendState::new(
        Arc::new(config),
        secret_key.map(String::from),
        reqwest::Client::new(),
    ))
}

async fn post_cart(router: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/create-payment-intent")
        .header("content-type", "application/json; charset=utf-8")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn stripe_creating_intents() -> MockServer {
    let stripe = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(header("authorization", "Basic c2tfdGVzdF8xMjM6"))
        .and(header_exists("idempotency-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_123",
            "object": "payment_intent",
            "client_secret": "pi_123_secret_456"
        })))
        .expect(1)
        .mount(&stripe)
        .await;
    stripe
}

#[tokio::test]
async fn test_create_payment_intent_returns_client_secret() {
    let stripe = stripe_creating_intents().await;
    let router = routes(state_for(&stripe, Some(TEST_SECRET_KEY)));

    let (status, body) = post_cart(router, json!({"items": [{"id": "xl-tshirt"}]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"clientSecret": "pi_123_secret_456"}));

    let requests = stripe.received_requests().await.unwrap();
    let form: Vec<(String, String)> = serde_urlencoded::from_bytes(&requests[0].body).unwrap();
    assert!(form.contains(&("amount".to_string(), "1400".to_string())));
    assert!(form.contains(&("currency".to_string(), "vnd".to_string())));
    assert!(form.contains(&(
        "automatic_payment_methods[enabled]".to_string(),
        "true".to_string()
    )));
}

#[tokio::test]
async fn test_client_supplied_amount_is_ignored() {
    let stripe = stripe_creating_intents().await;
    let router = routes(state_for(&stripe, Some(TEST_SECRET_KEY)));

    let (status, _) = post_cart(router, json!({"items": [{"id": "xl-tshirt", "amount": 1}]})).await;
    assert_eq!(status, StatusCode::OK);

    let requests = stripe.received_requests().await.unwrap();
    let form: Vec<(String, String)> = serde_urlencoded::from_bytes(&requests[0].body).unwrap();
    assert!(form.contains(&("amount".to_string(), "1400".to_string())));
}

#[tokio::test]
async fn test_unknown_item_is_bad_request() {
    let stripe = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&stripe)
        .await;
    let router = routes(state_for(&stripe, Some(TEST_SECRET_KEY)));

    let (status, body) = post_cart(router, json!({"items": [{"id": "hat"}]})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 400);
    assert_eq!(
        body["error"]["message"],
        "Validation error: Unknown item in cart: hat"
    );
}

#[tokio::test]
async fn test_empty_cart_is_bad_request() {
    let stripe = MockServer::start().await;
    let router = routes(state_for(&stripe, Some(TEST_SECRET_KEY)));

    let (status, body) = post_cart(router, json!({"items": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Validation error: Cart is empty");
}

#[tokio::test]
async fn test_stripe_error_is_bad_gateway() {
    let stripe = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"type": "invalid_request_error", "message": "Invalid API Key provided"}
        })))
        .mount(&stripe)
        .await;
    let router = routes(state_for(&stripe, Some(TEST_SECRET_KEY)));

    let (status, body) = post_cart(router, json!({"items": [{"id": "xl-tshirt"}]})).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("Invalid API Key provided"), "{message}");
}

#[tokio::test]
async fn test_missing_secret_key_is_server_error() {
    let stripe = MockServer::start().await;
    let router = routes(state_for(&stripe, None));

    let (status, body) = post_cart(router, json!({"items": [{"id": "xl-tshirt"}]})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"]["message"],
        "Configuration error: Stripe configuration missing or incomplete"
    );
}

#[tokio::test]
async fn test_backend_client_talks_to_backend() {
    let stripe = stripe_creating_intents().await;
    let router = routes(state_for(&stripe, Some(TEST_SECRET_KEY)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, router.into_make_service()).await.unwrap();
    });

    let client = BackendClient::new(BackendConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 5,
    })
    .unwrap();
    let secret = client.fetch_payment_intent().await.unwrap();
    assert_eq!(secret.expose(), "pi_123_secret_456");

    server.abort();
}
