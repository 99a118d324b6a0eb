//! Error type for `said-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("unknown gender in stored row: {0:?}")]
  UnknownGender(String),

  #[error("id search not found: {0}")]
  SearchNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
