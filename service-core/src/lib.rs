//! service-core: Shared infrastructure for the greeting, profile and web-client services.
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod observability;
pub mod router;
pub mod shutdown;
