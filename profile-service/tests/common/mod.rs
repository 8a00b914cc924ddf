use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use profile_service::config::{MongoConfig, ProfileConfig, StoreBackend};
use profile_service::services::{InMemoryUserRepository, UserRepository};
use profile_service::startup::{build_router, Application};
use profile_service::AppState;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn test_config(store: StoreBackend) -> ProfileConfig {
    ProfileConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "error".to_string(),
        },
        store,
        mongodb: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "profile_test".to_string(),
        },
        otlp_endpoint: None,
    }
}

/// Router over an in-memory store, plus a handle to that store.
pub fn in_memory_router() -> (Router, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let router = build_router(AppState::new(repo.clone()));
    (router, repo)
}

pub fn router_with(users: Arc<dyn UserRepository>) -> Router {
    build_router(AppState::new(users))
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub struct TestApp {
    pub address: String,
    pub users: Arc<dyn UserRepository>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(
            test_config(StoreBackend::Memory),
            Arc::new(InMemoryUserRepository::new()),
        )
        .await
        .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());
        let users = app.users();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address, users }
    }
}
