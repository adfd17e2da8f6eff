// --- File: crates/checkout_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{CheckoutError, HttpStatusCode};

pub mod client;

/// Implement IntoResponse for CheckoutError so handlers can return it directly.
///
/// The body has the shape `{"error": {"message": "...", "code": 400}}`.
impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}
