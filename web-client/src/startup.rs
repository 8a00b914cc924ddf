use crate::config::WebClientConfig;
use crate::handlers;
use crate::services::BackendClient;
use crate::AppState;
use axum::{routing::get, Router};
use service_core::error::AppError;
use service_core::metrics::metrics_endpoint;
use service_core::router::with_common_layers;
use service_core::shutdown::shutdown_signal;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::TcpListener;

type ServerFuture = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state);

    with_common_layers(app)
}

pub struct Application {
    port: u16,
    server: ServerFuture,
}

impl Application {
    pub async fn build(config: WebClientConfig) -> Result<Self, AppError> {
        let backends = Arc::new(BackendClient::new(&config.backends)?);
        tracing::info!(
            greeting = %config.backends.greeting_base_url,
            profile = %config.backends.profile_base_url,
            "Configured backend services"
        );

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, build_router(AppState::new(backends)))
            .with_graceful_shutdown(shutdown_signal())
            .into_future();

        Ok(Self {
            port,
            server: Box::pin(server),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
