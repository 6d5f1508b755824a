use anyhow::Context;
use v2g::domain::config::AppConfig;
use v2g::kernel::config::load_config;
use v2g_logger::Logger;
use v2g_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // An explicit path must exist; without one `server.toml` is optional.
    let path = std::env::args_os().nth(1);
    let cfg: AppConfig = load_config(path).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder(env!("CARGO_PKG_NAME")).with_config(&cfg.logging)?.init()?;

    Server::builder().config(cfg).build()?.run().await
}
