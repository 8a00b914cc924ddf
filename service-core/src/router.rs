use crate::middleware::{
    cache_control::no_store_middleware, metrics::metrics_middleware,
    tracing::request_id_middleware,
};
use axum::{body::Body, http::Request, middleware::from_fn, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Wrap a service router with the middleware stack every service shares.
///
/// Outermost first: CORS, no-store caching policy, request ID, trace span,
/// request metrics.
pub fn with_common_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(no_store_middleware))
        .layer(CorsLayer::permissive())
}
