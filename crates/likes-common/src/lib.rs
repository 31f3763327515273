//! # likes-common
//!
//! Shared utilities including configuration and telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ApiConfig, AppConfig, AppSettings, ConfigError, Environment};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
