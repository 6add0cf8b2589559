//! # seed-common
//!
//! Shared utilities including configuration, error types, telemetry, and JSON output.

pub mod config;
pub mod error;
pub mod output;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ApiConfig, AppSettings, ConfigError, Environment, SeedConfig};
pub use error::PrintError;
pub use output::{format_json, highlight_json, print_json};
pub use telemetry::{try_init_tracing_with_config, TracingConfig, TracingError};
