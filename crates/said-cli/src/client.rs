//! Async HTTP client wrapping the said JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde_json::Value;

/// Async HTTP client for the said JSON API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
  }

  /// `POST /api/validate` with form body `id_number=<id>`.
  ///
  /// Error responses carry their `error` message through.
  pub async fn validate(&self, id_number: &str) -> Result<Value> {
    let resp = self
      .client
      .post(self.url("/validate"))
      .form(&[("id_number", id_number)])
      .send()
      .await
      .context("POST /validate failed")?;

    let status = resp.status();
    let body: Value = resp.json().await.context("deserialising response")?;
    if !status.is_success() {
      let message = body["error"].as_str().unwrap_or("no error message");
      return Err(anyhow!("POST /validate → {status}: {message}"));
    }
    Ok(body)
  }
}
