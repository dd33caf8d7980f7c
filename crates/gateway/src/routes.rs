//! Route configuration.

use axum::{
    http::{Method, Uri},
    middleware, Router,
};
use tower_http::trace::TraceLayer;

use common::AppError;

use crate::handlers::{auth_routes, health_routes};
use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Create the main router with all routes.
///
/// The router makes no assumption about how requests arrive, so the local
/// listener and the Lambda entry point both drive this same value.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        // Outermost: every response gets the cross-origin headers
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

/// Unknown route, or a known path called with the wrong method.
async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::not_found(format!("Cannot {} {}", method, uri.path()))
}
