use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn greeting() -> impl IntoResponse {
    Json(json!({ "msg": "Hello World" }))
}

/// Liveness only; the store is deliberately not probed.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "OK" }))
}
