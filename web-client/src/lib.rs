pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::BackendClient;
use std::sync::Arc;

/// Shared application state containing the backend client
#[derive(Clone)]
pub struct AppState {
    pub backends: Arc<BackendClient>,
}

impl AppState {
    pub fn new(backends: Arc<BackendClient>) -> Self {
        Self { backends }
    }
}
