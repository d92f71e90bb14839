//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight; it provides configuration types and
//! loading, the shared application state, and the system router.
//!
//! ## Config loading
//! ```rust,no_run
//! use isomer_kernel::config::{AppConfig, load_config};
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
//! assert_eq!(cfg.server.port, 3000);
//! ```

pub mod config;
pub mod prelude;
pub mod server;
