//! Configuration structs

mod seed_config;

pub use seed_config::{ApiConfig, AppSettings, ConfigError, Environment, SeedConfig};
