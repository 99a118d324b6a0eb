//! Error types for `said-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// The input is not 13 digits, has an out-of-range month, day or
  /// citizenship digit, fails the checksum, or names a date that does not
  /// exist on the calendar.
  #[error("invalid ID number format: {0}")]
  InvalidFormat(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
