//! Shared runtime helpers: logging setup, startup environment checks,
//! Prometheus exposition and small response types.

pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;
