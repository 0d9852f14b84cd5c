// server/src/main.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::sync::oneshot;
use tracing::info;

use rest_api::AppState;
use storage::SledStorage;

mod config;

use config::load_config;

#[derive(Debug, Parser)]
#[command(
    name = "facility-admin",
    about = "Aged-care facility administration REST service"
)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured listen port
    #[arg(long)]
    port: Option<u16>,
    /// Overrides the configured data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = load_config(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.storage.data_directory = data_dir;
    }

    let engine = SledStorage::open(&config.storage).context("failed to open storage")?;
    let state = AppState::new(Arc::new(engine));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received, shutting down");
            let _ = shutdown_tx.send(());
        }
    });

    rest_api::start_server(&config.server.host, config.server.port, state, shutdown_rx).await
}
