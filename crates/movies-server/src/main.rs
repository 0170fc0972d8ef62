//! movies-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus `MOVIES_*`
//! environment variables, seeds an in-memory store, and serves the movies API
//! over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use movies_server::ServerConfig;
use movies_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Movies REST API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let policy = server_cfg
    .origin_policy()
    .context("invalid allowed_origins")?;

  let store = match &server_cfg.seed_path {
    Some(path) => MemoryStore::from_json_file(path)
      .await
      .with_context(|| format!("failed to load seed from {path:?}"))?,
    None => MemoryStore::seeded().context("bundled seed is invalid")?,
  };
  tracing::info!(movies = store.len().await, "store seeded");

  let app = movies_server::router(Arc::new(store), policy);
  let address = server_cfg.address();

  tracing::info!(
    origins = ?server_cfg.allowed_origins,
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
