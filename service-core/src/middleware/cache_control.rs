use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

pub const NO_STORE: &str = "no-store, no-cache, must-revalidate, private";

/// Disable client and proxy caching on every response.
///
/// Entity tags are stripped so clients never revalidate with `If-None-Match`.
pub async fn no_store_middleware(req: Request, next: Next) -> impl IntoResponse {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static(NO_STORE),
    );
    headers.remove(header::ETAG);

    response
}
