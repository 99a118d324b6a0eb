//! Error type for `said-calendarific`.
//!
//! Every variant means the provider could not supply holiday data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to fetch holidays: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("holiday provider returned HTTP {0}")]
  Status(reqwest::StatusCode),

  #[error("holiday provider error {code}: {error_type}")]
  Api { code: u16, error_type: String },

  #[error("malformed holiday response: {0}")]
  Malformed(String),

  #[error("malformed holiday response: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
