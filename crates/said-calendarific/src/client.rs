//! Async HTTP client for the Calendarific holidays API.

use std::time::Duration;

use reqwest::Client;
use said_core::holiday::{HolidayRecord, HolidaySource};

use crate::{Error, Result, wire::parse_holidays};

pub const DEFAULT_BASE_URL: &str = "https://calendarific.com/api/v2";

/// Holiday categories requested from the provider.
const HOLIDAY_TYPES: &str = "national,local,religious";

/// Connection settings for the Calendarific API.
#[derive(Debug, Clone)]
pub struct CalendarificConfig {
  pub api_key:  String,
  pub base_url: String,
  pub timeout:  Duration,
}

impl CalendarificConfig {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key:  api_key.into(),
      base_url: DEFAULT_BASE_URL.to_owned(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct CalendarificClient {
  client: Client,
  config: CalendarificConfig,
}

impl CalendarificClient {
  pub fn new(config: CalendarificConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// `GET /holidays?api_key=…&country=…&year=…&type=…`
  pub async fn get_holidays(&self, year: i32, country: &str) -> Result<Vec<HolidayRecord>> {
    let year_param = year.to_string();
    let resp = self
      .client
      .get(self.url("/holidays"))
      .query(&[
        ("api_key", self.config.api_key.as_str()),
        ("country", country),
        ("year", year_param.as_str()),
        ("type", HOLIDAY_TYPES),
      ])
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      tracing::warn!(year, country, %status, "holiday provider rejected request");
      return Err(Error::Status(status));
    }

    let body = resp.text().await?;
    let holidays = parse_holidays(&body)?;
    tracing::debug!(year, country, count = holidays.len(), "fetched holidays");
    Ok(holidays)
  }
}

impl HolidaySource for CalendarificClient {
  type Error = Error;

  async fn fetch_holidays(&self, year: i32, country: &str) -> Result<Vec<HolidayRecord>> {
    self.get_holidays(year, country).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_joins_without_double_slash() {
    let mut config = CalendarificConfig::new("key");
    config.base_url = "http://localhost:9999/api/v2/".to_owned();
    let client = CalendarificClient::new(config).unwrap();
    assert_eq!(client.url("/holidays"), "http://localhost:9999/api/v2/holidays");
  }

  #[tokio::test]
  async fn unreachable_provider_is_a_transport_error() {
    let mut config = CalendarificConfig::new("key");
    // Port 9 (discard) on loopback is closed in test environments.
    config.base_url = "http://127.0.0.1:9".to_owned();
    config.timeout = Duration::from_secs(2);
    let client = CalendarificClient::new(config).unwrap();

    let err = client.fetch_holidays(2024, "ZA").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err}");
  }
}
