pub mod logging;
mod trace_context;

pub use logging::init_tracing;
pub use trace_context::{extract_request_id, TracedClientExt};
