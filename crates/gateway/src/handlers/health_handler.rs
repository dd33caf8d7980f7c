//! Health check handler.

use axum::{extract::OriginalUri, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use domain::HEALTHY_MESSAGE;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "Server is healthy!!!")]
    pub success: &'static str,
    /// Request target as received, query string included
    #[schema(example = "/?x=1")]
    pub url: String,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Report that the server is up and echo the request target.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_check(OriginalUri(uri): OriginalUri) -> Json<HealthResponse> {
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    Json(HealthResponse {
        success: HEALTHY_MESSAGE,
        url,
    })
}
