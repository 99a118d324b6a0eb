//! said-api server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) and `SAID_*`
//! environment variables, opens the SQLite search history, and serves the
//! JSON API over HTTP.
//!
//! ```
//! SAID_CALENDARIFIC_API_KEY=... cargo run -p said-api --bin server
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use anyhow::Context as _;
use clap::Parser;
use said_api::{AppState, ServerConfig, Settings};
use said_calendarific::{CalendarificClient, CalendarificConfig};
use said_core::cache::CachedSource;
use said_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "South African ID number API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("SAID"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = ?store_path, "opened search store");

  let client = CalendarificClient::new(CalendarificConfig {
    base_url: server_cfg.calendarific_base_url.clone(),
    ..CalendarificConfig::new(server_cfg.calendarific_api_key.clone())
  })
  .context("failed to build holiday client")?;
  let holidays = CachedSource::new(
    client,
    Duration::from_secs(server_cfg.holiday_cache_ttl_secs),
  );

  let state = AppState {
    store:    Arc::new(store),
    holidays: Arc::new(holidays),
    settings: Arc::new(Settings::from(&server_cfg)),
  };

  let app = said_api::app(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!(
    country = %server_cfg.country,
    holiday_failures = ?server_cfg.holiday_failures,
    "Listening on http://{address}"
  );
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
