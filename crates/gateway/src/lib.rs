//! Auth Gateway Library
//!
//! HTTP front for a Cognito user pool: signup, confirmation, login and
//! code resend, each forwarded to the identity provider and answered as JSON.

pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::clients::CognitoClient;
use crate::config::{GatewayConfig, RuntimeMode};
use crate::routes::create_router;
use crate::state::AppState;

/// Boxed error used by the entry points.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Build the router backed by the Cognito client.
pub async fn build_app(config: &GatewayConfig) -> Router {
    let provider = Arc::new(CognitoClient::from_config(&config.provider).await);
    create_router(AppState::new(provider))
}

/// Run the gateway with the entry point `config.mode` selects.
pub async fn run(config: GatewayConfig) -> Result<(), BoxError> {
    info!("Starting {} in {} mode", config.service.service_name, config.mode);

    let app = build_app(&config).await;

    match config.mode {
        RuntimeMode::Local => server::serve_local(app, &config.service.addr()).await,
        RuntimeMode::Lambda => server::serve_lambda(app).await,
    }
}
