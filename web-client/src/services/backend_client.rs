use crate::config::BackendSettings;
use crate::models::{Greeting, UserSummary};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use service_core::observability::TracedClientExt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for the greeting and profile services.
pub struct BackendClient {
    http: Client,
    greeting_base_url: String,
    profile_base_url: String,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            greeting_base_url: settings.greeting_base_url.trim_end_matches('/').to_string(),
            profile_base_url: settings.profile_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_greeting(&self, request_id: Option<&str>) -> Result<Greeting, BackendError> {
        self.get_json(format!("{}/", self.greeting_base_url), request_id)
            .await
    }

    pub async fn fetch_users(
        &self,
        request_id: Option<&str>,
    ) -> Result<Vec<UserSummary>, BackendError> {
        self.get_json(format!("{}/user/fetch", self.profile_base_url), request_id)
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        request_id: Option<&str>,
    ) -> Result<T, BackendError> {
        let response = self
            .http
            .traced_get(&url)
            .send(request_id)
            .await
            .map_err(|source| BackendError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| BackendError::Decode { url, source })
    }
}
