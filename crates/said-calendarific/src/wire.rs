//! Calendarific response shapes and their conversion to [`HolidayRecord`].
//!
//! ```json
//! { "meta": { "code": 200 },
//!   "response": { "holidays": [
//!     { "name": "Freedom Day", "description": "…",
//!       "date": { "iso": "2024-04-27",
//!                 "datetime": { "year": 2024, "month": 4, "day": 27 } },
//!       "type": ["National holiday"] } ] } }
//! ```
//!
//! A year with no holidays comes back as `"response": []`.

use chrono::NaiveDate;
use said_core::holiday::HolidayRecord;
use serde::{Deserialize, de::IgnoredAny};

use crate::{Error, Result};

#[derive(Deserialize)]
struct Envelope {
  meta:     Meta,
  #[serde(default)]
  response: Option<Body>,
}

#[derive(Deserialize)]
struct Meta {
  code:       u16,
  #[serde(default)]
  error_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
  Holidays { holidays: Vec<WireHoliday> },
  Empty(Vec<IgnoredAny>),
}

#[derive(Deserialize)]
struct WireHoliday {
  name:        String,
  #[serde(default)]
  description: Option<String>,
  date:        WireDate,
  #[serde(default, rename = "type")]
  kind:        Option<Vec<String>>,
}

#[derive(Deserialize)]
struct WireDate {
  #[serde(default)]
  iso:      Option<String>,
  #[serde(default)]
  datetime: Option<WireDateTime>,
}

#[derive(Deserialize)]
struct WireDateTime {
  year:  i32,
  month: u32,
  day:   u32,
}

impl WireDate {
  /// Prefer the structured `datetime`; fall back to the date part of `iso`.
  fn to_date(&self) -> Result<NaiveDate> {
    if let Some(dt) = &self.datetime {
      return NaiveDate::from_ymd_opt(dt.year, dt.month, dt.day).ok_or_else(|| {
        Error::Malformed(format!("no such date {}-{}-{}", dt.year, dt.month, dt.day))
      });
    }

    let iso = self
      .iso
      .as_deref()
      .ok_or_else(|| Error::Malformed("holiday has no date".to_owned()))?;
    let day_part = iso.get(..10).unwrap_or(iso);
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
      .map_err(|e| Error::Malformed(format!("bad iso date {iso:?}: {e}")))
  }
}

impl WireHoliday {
  fn into_record(self) -> Result<HolidayRecord> {
    Ok(HolidayRecord {
      date:        self.date.to_date()?,
      name:        self.name,
      description: self.description,
      kind:        self.kind.and_then(|kinds| kinds.into_iter().next()),
    })
  }
}

/// Decode a Calendarific `/holidays` response body.
pub fn parse_holidays(body: &str) -> Result<Vec<HolidayRecord>> {
  let envelope: Envelope = serde_json::from_str(body)?;

  if envelope.meta.code != 200 {
    return Err(Error::Api {
      code:       envelope.meta.code,
      error_type: envelope.meta.error_type.unwrap_or_else(|| "unknown".to_owned()),
    });
  }

  match envelope.response {
    Some(Body::Holidays { holidays }) => {
      holidays.into_iter().map(WireHoliday::into_record).collect()
    }
    Some(Body::Empty(_)) => Ok(Vec::new()),
    None => Err(Error::Malformed("missing response".to_owned())),
  }
}
