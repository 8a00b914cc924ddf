use crate::config::ProfileConfig;
use crate::handlers;
use crate::services::UserRepository;
use axum::{
    routing::{get, post},
    Router,
};
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

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(handlers::greeting))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(metrics_endpoint))
        .route("/user/add", post(handlers::add_user))
        .route("/user/fetch", get(handlers::fetch_users))
        .with_state(state);

    with_common_layers(app)
}

pub struct Application {
    port: u16,
    server: ServerFuture,
    state: AppState,
}

impl Application {
    pub async fn build(
        config: ProfileConfig,
        users: Arc<dyn UserRepository>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(users);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, build_router(state.clone()))
            .with_graceful_shutdown(shutdown_signal())
            .into_future();

        Ok(Self {
            port,
            server: Box::pin(server),
            state,
        })
    }

    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.state.users.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
