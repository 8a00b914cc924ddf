use serde::Deserialize;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct GreetingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub otlp_endpoint: Option<String>,
}

impl GreetingConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(GreetingConfig {
            common,
            otlp_endpoint: get_env("OTLP_ENDPOINT", None).ok(),
        })
    }
}
