use config::{Config, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or the values did not deserialize.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000 }
    }
}

/// Static asset root served ahead of the catch-all render.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub static_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { static_dir: PathBuf::from("dist") }
    }
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layering:
/// 1. **Base file**: the given path, or a `server` file in the working
///    directory when omitted. The default file is optional; an explicit
///    path must exist.
/// 2. **Environment overrides**: variables prefixed with `ISOMER__`,
///    nested sections separated by double underscores
///    (`ISOMER__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// Returns an error if an explicitly given file cannot be read, or the
/// merged values do not match the structure of `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path
        .map_or_else(|| (PathBuf::from("server"), false), |p| (p.as_ref().to_path_buf(), true));

    info!("Loading config from {}", file.display());

    let config = Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix("ISOMER").separator("__").convert_case(config::Case::Snake),
        )
        .build()?
        .try_deserialize::<T>()?;

    Ok(config)
}
