//! Entry points that feed requests into the router.
//!
//! Both take the finished [`Router`] and differ only in where requests come
//! from: a TCP socket, or API gateway events handed over by the Lambda
//! runtime.

use std::net::SocketAddr;

use axum::Router;
use tower::ServiceBuilder;
use tracing::info;

use crate::middleware::strip_stage;
use crate::BoxError;

/// Listen on `addr` and serve until the process stops.
pub async fn serve_local(app: Router, addr: &str) -> Result<(), BoxError> {
    let addr: SocketAddr = addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("App started on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve API gateway events from the Lambda runtime.
///
/// The stage is removed from the path before routing, so `/dev/resend`
/// reaches the `/resend` handler.
pub async fn serve_lambda(app: Router) -> Result<(), BoxError> {
    info!("Waiting for API gateway events");

    let app = ServiceBuilder::new()
        .map_request(strip_stage::<lambda_http::Body>)
        .service(app);

    lambda_http::run(app).await
}
