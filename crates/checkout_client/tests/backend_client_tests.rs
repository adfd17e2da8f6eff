use checkout_client::{BackendClient, BackendError, CREATE_PAYMENT_INTENT_PATH, JSON_CONTENT_TYPE};
use checkout_common::{CheckoutError, IntentSource};
use checkout_config::BackendConfig;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: String) -> BackendClient {
    BackendClient::new(BackendConfig {
        base_url,
        timeout_secs: 5,
    })
    .expect("client builds")
}

#[tokio::test]
async fn test_fetch_returns_client_secret() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PAYMENT_INTENT_PATH))
        .and(header("content-type", JSON_CONTENT_TYPE))
        .and(body_json(json!({"items": [{"id": "xl-tshirt"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"clientSecret": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let secret = client_for(server.uri()).fetch_payment_intent().await.unwrap();
    assert_eq!(secret.expose(), "abc123");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PAYMENT_INTENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"clientSecret": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let secret = client_for(format!("{}/", server.uri()))
        .fetch_payment_intent()
        .await
        .unwrap();
    assert_eq!(secret.expose(), "abc123");
}

#[tokio::test]
async fn test_server_error_fails_even_with_secret_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PAYMENT_INTENT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"clientSecret": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(server.uri()).fetch_payment_intent().await.unwrap_err();
    match err {
        BackendError::HttpStatus { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_object_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let err = client_for(server.uri()).fetch_payment_intent().await.unwrap_err();
    assert!(matches!(err, BackendError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_non_json_body_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(server.uri()).fetch_payment_intent().await.unwrap_err();
    assert!(matches!(err, BackendError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on port 1.
    let err = client_for("http://127.0.0.1:1".to_string())
        .fetch_payment_intent()
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Network(_)));

    let checkout_err: CheckoutError = err.into();
    assert!(matches!(checkout_err, CheckoutError::NetworkError(_)));
}

#[tokio::test]
async fn test_intent_source_maps_to_checkout_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let source: &dyn IntentSource = &client;
    let err = source.fetch_payment_intent().await.unwrap_err();
    assert_eq!(
        err,
        CheckoutError::HttpStatusError {
            status: 404,
            message: "Not Found".to_string()
        }
    );
}
