pub mod cache_control;
pub mod metrics;
pub mod tracing;
