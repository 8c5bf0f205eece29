//! Request tracing middleware for observability.
//!
//! Assigns a request ID, opens a span per request, logs completion and
//! records request metrics.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID header name for distributed tracing
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Reuses an incoming `x-request-id` or generates a new one, then echoes it
/// back on the response.
pub async fn request_tracing(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        let start = Instant::now();
        let mut response = next.run(request).await;
        let duration = start.elapsed();
        let status = response.status().as_u16();

        tracing::info!(
            status = status,
            duration_ms = duration.as_millis() as u64,
            "Request completed"
        );

        record_request_metrics(&method, &path, status, duration);

        response.headers_mut().insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(&request_id)
                .unwrap_or_else(|_| HeaderValue::from_static("unknown")),
        );
        response
    }
    .instrument(span)
    .await
}

/// Record metrics for HTTP requests
fn record_request_metrics(method: &str, path: &str, status: u16, duration: Duration) {
    let method = method.to_string();
    let route = normalize_path(path);
    let status = status.to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => route.clone(),
        "status" => status.clone()
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => route,
        "status" => status
    )
    .record(duration.as_secs_f64());
}

/// Normalize path for metrics to avoid high cardinality.
///
/// Every route is a single segment, so anything deeper is collapsed to its
/// first segment.
fn normalize_path(path: &str) -> String {
    match path.split('/').find(|s| !s.is_empty()) {
        Some(first) => format!("/{first}"),
        None => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_short() {
        assert_eq!(normalize_path("/health"), "/health");
        assert_eq!(normalize_path("/extract-medical"), "/extract-medical");
    }

    #[test]
    fn test_normalize_path_long() {
        assert_eq!(normalize_path("/swagger-ui/index.html"), "/swagger-ui");
        assert_eq!(normalize_path("/api-docs/openapi.json"), "/api-docs");
    }

    #[test]
    fn test_record_request_metrics_without_recorder() {
        record_request_metrics("POST", "/chat/extra", 200, Duration::from_millis(5));
        record_request_metrics("GET", "/", 404, Duration::ZERO);
    }

    #[test]
    fn test_normalize_path_root() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
    }
}
