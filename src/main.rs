mod config;
mod server;
mod http;
mod shortener;

use config::Config;
use shortener::{MappingStore, ShortenerHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let store = MappingStore::new(&cfg.public_host);
    let handler = ShortenerHandler::new(store);

    tokio::select! {
        res = server::listener::run(&cfg, handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
