//! The `SearchStore` trait and the records it persists.
//!
//! The store is an audit trail of decoded identity numbers: one row per
//! distinct number with a running search count, plus the holidays last found
//! around that person's birthdays. Higher layers (`said-api`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  holiday::HolidayRecord,
  id_number::{DecodedIdentity, Gender},
};

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted identity-number search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSearch {
  pub id:            i64,
  pub id_number:     String,
  pub date_of_birth: NaiveDate,
  pub gender:        Gender,
  pub citizen:       bool,
  /// Number of times this identity number has been looked up; at least 1.
  pub search_count:  i64,
  pub created_at:    DateTime<Utc>,
  /// Set on every lookup after the first.
  pub updated_at:    Option<DateTime<Utc>>,
}

/// The decoded fields needed to create an [`IdSearch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdSearch {
  pub id_number:     String,
  pub date_of_birth: NaiveDate,
  pub gender:        Gender,
  pub citizen:       bool,
}

impl From<&DecodedIdentity> for NewIdSearch {
  fn from(decoded: &DecodedIdentity) -> Self {
    Self {
      id_number:     decoded.id_number().as_str().to_owned(),
      date_of_birth: decoded.birth_date(),
      gender:        decoded.gender(),
      citizen:       decoded.is_citizen(),
    }
  }
}

/// A holiday associated with an [`IdSearch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredHoliday {
  pub id:           i64,
  pub id_search_id: i64,
  #[serde(flatten)]
  pub record:       HolidayRecord,
  pub created_at:   DateTime<Utc>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a search-history backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SearchStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the search record for `id_number`. Returns `None` if the number
  /// has never been looked up.
  fn find_by_id_number<'a>(
    &'a self,
    id_number: &'a str,
  ) -> impl Future<Output = Result<Option<IdSearch>, Self::Error>> + Send + 'a;

  /// Record one lookup of `search.id_number`.
  ///
  /// The first lookup inserts a record with `search_count = 1`; later lookups
  /// increment the count and set `updated_at`. The decoded fields of an
  /// existing record are left untouched.
  fn record_search(
    &self,
    search: NewIdSearch,
  ) -> impl Future<Output = Result<IdSearch, Self::Error>> + Send + '_;

  /// Replace the holidays associated with a search record.
  fn replace_holidays(
    &self,
    id_search_id: i64,
    holidays: Vec<HolidayRecord>,
  ) -> impl Future<Output = Result<Vec<StoredHoliday>, Self::Error>> + Send + '_;

  /// All holidays associated with a search record, ordered by date.
  fn holidays_for(
    &self,
    id_search_id: i64,
  ) -> impl Future<Output = Result<Vec<StoredHoliday>, Self::Error>> + Send + '_;
}
