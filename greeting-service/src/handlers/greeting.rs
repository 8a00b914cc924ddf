use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub msg: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse { msg: "Hello World" })
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}
