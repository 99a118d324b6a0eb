//! `said` — decode South African identity numbers from the terminal.
//!
//! # Usage
//!
//! ```
//! said decode 8001015009087
//! said decode 8001015009087 --json
//! said lookup 8001015009087 --url http://localhost:8000
//! said lookup 8001015009087 --config ~/.config/said/config.toml
//! ```

mod client;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use client::ApiClient;
use report::Report;
use said_core::id_number::{check_digit, decode_at, validate_checksum, validate_format};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:8000";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "said", about = "Decode South African identity numbers")]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Decode an identity number locally, without contacting a server.
  Decode {
    id_number: String,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Submit an identity number to a running server and print its response.
  Lookup {
    id_number: String,

    /// Base URL of the said server (default: http://localhost:8000).
    #[arg(long, env = "SAID_URL")]
    url: Option<String>,

    /// Path to a TOML config file (url).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

fn load_config(path: Option<&PathBuf>) -> Result<ConfigFile> {
  let Some(path) = path else {
    return Ok(ConfigFile::default());
  };
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading config file {}", path.display()))?;
  toml::from_str(&raw).context("parsing config file")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  match Args::parse().command {
    Command::Decode { id_number, json } => decode(&id_number, json),
    Command::Lookup { id_number, url, config } => {
      let file_cfg = load_config(config.as_ref())?;
      // CLI flag / env override config file, which overrides the default.
      let base_url = url
        .or_else(|| (!file_cfg.url.is_empty()).then_some(file_cfg.url))
        .unwrap_or_else(|| DEFAULT_URL.to_owned());
      lookup(&id_number, base_url).await
    }
  }
}

fn decode(id_number: &str, json: bool) -> Result<()> {
  let today = Utc::now().date_naive();
  let Ok(identity) = decode_at(id_number, today) else {
    bail!("{id_number}: invalid ID number format{}", checksum_hint(id_number));
  };

  let report = Report::new(identity, today);
  if json {
    let out = serde_json::to_string_pretty(&report).context("serialising report")?;
    println!("{out}");
  } else {
    print!("{report}");
  }
  Ok(())
}

/// Points at the expected check digit when only the checksum is wrong.
fn checksum_hint(id_number: &str) -> String {
  if !validate_format(id_number) || validate_checksum(id_number) {
    return String::new();
  }
  match check_digit(&id_number[..12]) {
    Some(digit) => format!(" (checksum fails; last digit should be {digit})"),
    None => String::new(),
  }
}

async fn lookup(id_number: &str, base_url: String) -> Result<()> {
  tracing::debug!(%base_url, "submitting id number");
  let client = ApiClient::new(base_url)?;
  let body = client.validate(id_number).await?;
  let out = serde_json::to_string_pretty(&body).context("serialising response")?;
  println!("{out}");
  Ok(())
}
