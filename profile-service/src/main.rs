use profile_service::config::{ProfileConfig, StoreBackend};
use profile_service::services::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use profile_service::startup::Application;
use service_core::metrics::init_metrics;
use service_core::observability::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ProfileConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "profile-service",
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    );
    init_metrics()?;

    let users: Arc<dyn UserRepository> = match config.store {
        StoreBackend::Mongo => Arc::new(
            MongoUserRepository::connect(&config.mongodb.uri, &config.mongodb.database)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection error: {}", e))?,
        ),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory user store; records are lost on restart");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let app = Application::build(config, users).await?;
    tracing::info!("Starting profile-service on port {}", app.port());

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
