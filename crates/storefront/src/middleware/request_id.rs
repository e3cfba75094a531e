//! Request ID middleware for log correlation.
//!
//! Each request carries an `x-request-id`. An incoming value is reused;
//! otherwise a UUID v4 is generated. The id is recorded in the `request_id`
//! field of the request span opened by `TraceLayer`, set as a Sentry tag and
//! echoed on the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span for one HTTP request, with an empty `request_id` field for
/// [`request_id_middleware`] to fill in.
pub fn request_span(request: &Request) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}

/// Ensure every request has a request id.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| !id.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_request_span_declares_request_id() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let request = axum::http::Request::builder()
                .uri("/cart")
                .body(Body::empty())
                .unwrap();
            let span = request_span(&request);
            assert!(span.field("request_id").is_some());
            assert!(span.field("uri").is_some());
        });
    }
}
