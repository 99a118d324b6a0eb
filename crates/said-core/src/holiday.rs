//! Public-holiday records and proximity queries.
//!
//! The holiday data itself comes from a [`HolidaySource`], implemented by
//! `said-calendarific`. Queries here never retry; a failed fetch is returned
//! to the caller, who decides via [`FailurePolicy`] whether to propagate it or
//! carry on without holiday data.

use std::{collections::BTreeSet, fmt::Display, future::Future};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ─── Record ──────────────────────────────────────────────────────────────────

/// A single holiday as reported by the holiday-data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
  pub name:        String,
  pub description: Option<String>,
  pub date:        NaiveDate,
  /// Provider classification, e.g. `National holiday`.
  #[serde(rename = "type")]
  pub kind:        Option<String>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a holiday-data provider.
pub trait HolidaySource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every holiday in `year` for the ISO 3166 `country` code, in provider
  /// order.
  fn fetch_holidays<'a>(
    &'a self,
    year: i32,
    country: &'a str,
  ) -> impl Future<Output = Result<Vec<HolidayRecord>, Self::Error>> + Send + 'a;
}

// ─── Queries ─────────────────────────────────────────────────────────────────

/// The first holiday falling on `date`, if any.
///
/// When the provider lists several holidays on the same day, the first in
/// provider order wins.
pub async fn is_public_holiday<S>(
  source: &S,
  date: NaiveDate,
  country: &str,
) -> Result<Option<HolidayRecord>, S::Error>
where
  S: HolidaySource,
{
  let holidays = source.fetch_holidays(date.year(), country).await?;
  Ok(holidays.into_iter().find(|h| h.date == date))
}

/// Holidays in the month before, the month of, and the month after `birth`.
///
/// Every year touched by that window is fetched: a January birthday also
/// fetches the previous year, a December birthday the next one. From each
/// fetched year, every holiday whose month lies in the window is kept, so a
/// January birthday sees December holidays of both years. Years are visited
/// in ascending order.
pub async fn holidays_around_birthday<S>(
  source: &S,
  birth: NaiveDate,
  country: &str,
) -> Result<Vec<HolidayRecord>, S::Error>
where
  S: HolidaySource,
{
  let (months, years) = birthday_window(birth);

  let mut holidays = Vec::new();
  for year in years {
    let yearly = source.fetch_holidays(year, country).await?;
    holidays.extend(yearly.into_iter().filter(|h| months.contains(&h.date.month())));
  }
  Ok(holidays)
}

/// The three months around `birth` (wrapped into `1..=12`) and the years they
/// touch.
fn birthday_window(birth: NaiveDate) -> ([u32; 3], BTreeSet<i32>) {
  let month = birth.month();
  let year = birth.year();

  let before = if month == 1 { 12 } else { month - 1 };
  let after = if month == 12 { 1 } else { month + 1 };

  let mut years = BTreeSet::from([year]);
  if month == 1 {
    years.insert(year - 1);
  }
  if month == 12 {
    years.insert(year + 1);
  }

  ([before, month, after], years)
}

// ─── Failure policy ──────────────────────────────────────────────────────────

/// What a composing layer does when the holiday provider fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
  /// Surface the error to the caller.
  Propagate,
  /// Log the error and continue as if there were no holidays.
  #[default]
  Empty,
}

impl FailurePolicy {
  pub fn apply<T, E>(self, result: Result<T, E>) -> Result<T, E>
  where
    T: Default,
    E: Display,
  {
    match (self, result) {
      (Self::Empty, Err(e)) => {
        tracing::warn!(error = %e, "holiday lookup failed; continuing without holiday data");
        Ok(T::default())
      }
      (_, result) => result,
    }
  }
}
