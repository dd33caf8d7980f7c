//! API gateway stage handling.

use axum::http::{uri::PathAndQuery, Request, Uri};
use lambda_http::RequestExt;

/// Route on the path the client called, without the API gateway stage.
///
/// The Lambda adapter prefixes the request URI with the stage name
/// (`/dev/resend`) but keeps the event's own path in the request
/// extensions. When that path is present and differs, it replaces the URI
/// path. The query string is kept. Requests that did not come from a
/// Lambda event pass through unchanged.
pub fn strip_stage<B>(mut request: Request<B>) -> Request<B> {
    let raw_path = request.raw_http_path();
    if raw_path.is_empty() || raw_path == request.uri().path() {
        return request;
    }

    if let Some(uri) = with_path(request.uri(), raw_path) {
        *request.uri_mut() = uri;
    }

    request
}

fn with_path(uri: &Uri, path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>().ok()?);
    Uri::from_parts(parts).ok()
}
