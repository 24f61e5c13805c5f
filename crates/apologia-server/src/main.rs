//! apologia server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), merged with
//! `APOLOGIA_`-prefixed environment variables for secrets, opens the SQLite
//! store, and serves the chat backend over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use apologia_billing::StripeGateway;
use apologia_llm::OpenAiClient;
use apologia_server::{AppState, ServerConfig};
use apologia_store_sqlite::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Apologia chat backend")]
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

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("APOLOGIA"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // External dependencies.
  let gateway = StripeGateway::new(&server_cfg.stripe_secret_key)
    .context("failed to build payment gateway")?;
  let model = OpenAiClient::with_base_url(
    &server_cfg.llm_api_key,
    &server_cfg.llm_model,
    &server_cfg.llm_base_url,
  )
  .context("failed to build model client")?;

  // Build application state.
  let state = AppState {
    store:   Arc::new(store),
    config:  Arc::new(server_cfg.clone()),
    gateway: Arc::new(gateway),
    model:   Arc::new(model),
  };

  let app = apologia_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
