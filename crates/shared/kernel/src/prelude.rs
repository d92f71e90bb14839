//! Convenience re-exports for downstream crates.

pub use crate::config::{AppConfig, ConfigError, load_config};
pub use crate::server::{AppState, system_router};
