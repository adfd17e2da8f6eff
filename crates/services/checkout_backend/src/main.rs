// File: services/checkout_backend/src/main.rs
use checkout_backend::{app, BackendState};
use checkout_common::{logging, CheckoutError, HTTP_CLIENT};
use checkout_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(e) = run().await {
        logging::log_error(e, "Checkout backend stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CheckoutError> {
    let config = Arc::new(load_config()?);

    let stripe_secret_key = std::env::var("STRIPE_SECRET_KEY").ok();
    if stripe_secret_key.is_none() {
        warn!("STRIPE_SECRET_KEY is not set; create-payment-intent will answer 500");
    }

    let state = Arc::new(BackendState::new(
        config.clone(),
        stripe_secret_key,
        HTTP_CLIENT.clone(),
    ));

    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut router = app(state);

    #[cfg(feature = "openapi")]
    {
        use checkout_backend::doc::CheckoutApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        info!("Adding Swagger UI at /api/docs");
        router = router.merge(
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", CheckoutApiDoc::openapi()),
        );
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| CheckoutError::ConfigError(format!("cannot bind {}: {}", addr, e)))?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|e| CheckoutError::InternalError(format!("server error: {}", e)))
}
