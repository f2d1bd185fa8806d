//! Request correlation middleware
//!
//! Accepts a well-formed inbound `x-request-id` or generates a fresh one,
//! runs the request inside a span carrying it, and echoes it on the response.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::Instrument;
use tutordesk_core_types::schema::HEADER_REQUEST_ID;
use tutordesk_core_types::RequestId;

pub async fn request_id(req: Request, next: Next) -> Response {
    let inbound = req
        .headers()
        .get(HEADER_REQUEST_ID)
        .and_then(|value| value.to_str().ok());
    let request_id = RequestId::from_inbound(inbound);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let start = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(HEADER_REQUEST_ID, value);
    }
    response
}
