//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Invalid ID number format")]
  InvalidIdNumber,

  #[error("store error: {0}")]
  Store(#[source] BoxError),

  #[error("holiday data unavailable: {0}")]
  HolidaysUnavailable(#[source] BoxError),
}

impl ApiError {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }

  pub fn holidays(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::HolidaysUnavailable(Box::new(e))
  }
}

impl From<said_core::Error> for ApiError {
  fn from(e: said_core::Error) -> Self {
    match e {
      said_core::Error::InvalidFormat(_) => Self::InvalidIdNumber,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::InvalidIdNumber => StatusCode::BAD_REQUEST,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::HolidaysUnavailable(_) => StatusCode::BAD_GATEWAY,
    };
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
