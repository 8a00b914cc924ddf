use service_core::metrics::init_metrics;
use service_core::observability::init_tracing;
use web_client::config::WebClientConfig;
use web_client::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WebClientConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "web-client",
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    );
    init_metrics()?;

    let app = Application::build(config).await?;
    tracing::info!("Starting web-client on port {}", app.port());

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
