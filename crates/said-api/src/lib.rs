//! JSON API for decoding South African identity numbers.
//!
//! Exposes an axum [`Router`] backed by any [`SearchStore`] and any
//! [`HolidaySource`]. TLS and authentication are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = said_api::app(state); // everything under /api, with tracing
//! ```

pub mod error;
pub mod health;
pub mod response;
pub mod validate;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use said_core::{
  cache::DEFAULT_HOLIDAY_TTL,
  holiday::{FailurePolicy, HolidaySource},
  store::SearchStore,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SAID_*` environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                   String,
  #[serde(default = "default_port")]
  pub port:                   u16,
  #[serde(default = "default_store_path")]
  pub store_path:             PathBuf,
  /// ISO 3166 country whose holidays are reported.
  #[serde(default = "default_country")]
  pub country:                String,
  pub calendarific_api_key:   String,
  #[serde(default = "default_calendarific_base_url")]
  pub calendarific_base_url:  String,
  #[serde(default = "default_holiday_cache_ttl_secs")]
  pub holiday_cache_ttl_secs: u64,
  #[serde(default)]
  pub holiday_failures:       FailurePolicy,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8000 }

fn default_store_path() -> PathBuf { PathBuf::from("said.db") }

fn default_country() -> String { "ZA".to_owned() }

fn default_calendarific_base_url() -> String {
  said_calendarific::DEFAULT_BASE_URL.to_owned()
}

fn default_holiday_cache_ttl_secs() -> u64 { DEFAULT_HOLIDAY_TTL.as_secs() }

/// The subset of configuration the handlers consult per request.
#[derive(Debug, Clone)]
pub struct Settings {
  pub country:          String,
  pub holiday_failures: FailurePolicy,
}

impl From<&ServerConfig> for Settings {
  fn from(config: &ServerConfig) -> Self {
    Self {
      country:          config.country.clone(),
      holiday_failures: config.holiday_failures,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, H> {
  pub store:    Arc<S>,
  pub holidays: Arc<H>,
  pub settings: Arc<Settings>,
}

impl<S, H> Clone for AppState<S, H> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      holidays: Arc::clone(&self.holidays),
      settings: Arc::clone(&self.settings),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, H>(state: AppState<S, H>) -> Router<()>
where
  S: SearchStore + 'static,
  H: HolidaySource + 'static,
{
  Router::new()
    .route("/health", get(health::handler))
    .route("/validate", post(validate::submit::<S, H>))
    .route("/validate/{id_number}", get(validate::lookup::<S, H>))
    .with_state(state)
}

/// The full application: the API under `/api`, with request tracing.
pub fn app<S, H>(state: AppState<S, H>) -> Router
where
  S: SearchStore + 'static,
  H: HolidaySource + 'static,
{
  Router::new()
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http())
}
