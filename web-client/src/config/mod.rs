use serde::Deserialize;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct WebClientConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub backends: BackendSettings,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the greeting service; the greeting is served at its root.
    pub greeting_base_url: String,
    /// Base URL of the profile service.
    pub profile_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// Unset falls back to the default; zero is rejected.
fn parse_timeout_secs(raw: Option<String>) -> Result<u64, AppError> {
    let Some(raw) = raw else {
        return Ok(default_timeout_secs());
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::ConfigError(anyhow::anyhow!(
            "BACKEND_TIMEOUT_SECS must be greater than zero"
        ))),
        Ok(secs) => Ok(secs),
        Err(e) => Err(AppError::ConfigError(anyhow::anyhow!(
            "Invalid BACKEND_TIMEOUT_SECS: {}",
            e
        ))),
    }
}

impl WebClientConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let timeout_secs = parse_timeout_secs(get_env("BACKEND_TIMEOUT_SECS", None).ok())?;

        Ok(WebClientConfig {
            common,
            backends: BackendSettings {
                greeting_base_url: get_env("GREETING_BASE_URL", Some("http://localhost:3001"))?,
                profile_base_url: get_env("PROFILE_BASE_URL", Some("http://localhost:3002"))?,
                timeout_secs,
            },
            otlp_endpoint: get_env("OTLP_ENDPOINT", None).ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_unset() {
        assert_eq!(parse_timeout_secs(None).unwrap(), 10);
    }

    #[test]
    fn timeout_accepts_positive_seconds() {
        assert_eq!(parse_timeout_secs(Some("5".to_string())).unwrap(), 5);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = parse_timeout_secs(Some("0".to_string())).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let err = parse_timeout_secs(Some("abc".to_string())).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
