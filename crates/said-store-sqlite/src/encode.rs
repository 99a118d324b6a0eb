//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, calendar dates as ISO 8601
//! `YYYY-MM-DD`, booleans as `0`/`1` integers.

use chrono::{DateTime, NaiveDate, Utc};
use said_core::{
  Gender,
  holiday::HolidayRecord,
  store::{IdSearch, StoredHoliday},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Gender ──────────────────────────────────────────────────────────────────

pub fn encode_gender(g: Gender) -> &'static str {
  match g {
    Gender::Male => "male",
    Gender::Female => "female",
  }
}

pub fn decode_gender(s: &str) -> Result<Gender> {
  match s {
    "male" => Ok(Gender::Male),
    "female" => Ok(Gender::Female),
    other => Err(Error::UnknownGender(other.to_owned())),
  }
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// Raw values read directly from an `id_searches` row.
pub struct RawIdSearch {
  pub id:            i64,
  pub id_number:     String,
  pub date_of_birth: String,
  pub gender:        String,
  pub citizen:       bool,
  pub search_count:  i64,
  pub created_at:    String,
  pub updated_at:    Option<String>,
}

impl RawIdSearch {
  /// Column order matches [`crate::store::SELECT_SEARCH`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      id_number:     row.get(1)?,
      date_of_birth: row.get(2)?,
      gender:        row.get(3)?,
      citizen:       row.get(4)?,
      search_count:  row.get(5)?,
      created_at:    row.get(6)?,
      updated_at:    row.get(7)?,
    })
  }

  pub fn into_search(self) -> Result<IdSearch> {
    Ok(IdSearch {
      id:            self.id,
      id_number:     self.id_number,
      date_of_birth: decode_date(&self.date_of_birth)?,
      gender:        decode_gender(&self.gender)?,
      citizen:       self.citizen,
      search_count:  self.search_count,
      created_at:    decode_dt(&self.created_at)?,
      updated_at:    self.updated_at.as_deref().map(decode_dt).transpose()?,
    })
  }
}

/// Raw values read directly from a `holidays` row.
pub struct RawHoliday {
  pub id:           i64,
  pub id_search_id: i64,
  pub name:         String,
  pub description:  Option<String>,
  pub date:         String,
  pub kind:         Option<String>,
  pub created_at:   String,
}

impl RawHoliday {
  /// Column order matches [`crate::store::SELECT_HOLIDAY`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      id_search_id: row.get(1)?,
      name:         row.get(2)?,
      description:  row.get(3)?,
      date:         row.get(4)?,
      kind:         row.get(5)?,
      created_at:   row.get(6)?,
    })
  }

  pub fn into_holiday(self) -> Result<StoredHoliday> {
    Ok(StoredHoliday {
      id:           self.id,
      id_search_id: self.id_search_id,
      record:       HolidayRecord {
        name:        self.name,
        description: self.description,
        date:        decode_date(&self.date)?,
        kind:        self.kind,
      },
      created_at:   decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dates_round_trip() {
    let d = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    assert_eq!(encode_date(d), "1980-01-01");
    assert_eq!(decode_date("1980-01-01").unwrap(), d);
    assert!(decode_date("1980-13-01").is_err());
  }

  #[test]
  fn unknown_gender_is_an_error() {
    assert_eq!(decode_gender(encode_gender(Gender::Female)).unwrap(), Gender::Female);
    assert!(matches!(decode_gender("other"), Err(Error::UnknownGender(_))));
  }
}
