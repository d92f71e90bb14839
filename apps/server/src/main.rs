use anyhow::Context;
use isomer_kernel::config::{AppConfig, load_config};
use isomer_logger::Logger;
use isomer_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: AppConfig = load_config(None::<&str>).context("Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
