//! Request correlation middleware
//!
//! Every request runs inside a `request` span carrying its `RequestId`.
//! The id is taken from the `x-request-id` header when present and echoed
//! back on the response.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use todo_core_types::correlation::REQUEST_ID_HEADER;
use todo_core_types::RequestId;
use tracing::Instrument;

pub async fn trace_requests(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(RequestId::from_header)
        .unwrap_or_default();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        http.method = %request.method(),
        http.path = %request.uri().path(),
    );
    request.extensions_mut().insert(request_id.clone());

    let start = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            http.status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
