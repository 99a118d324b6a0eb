//! Age and birthday-countdown facts.
//!
//! Anniversaries are computed on calendar dates only. A 29 February birthday
//! has anniversaries only in leap years; in other years the countdown runs on
//! to the next leap day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeFacts {
  /// Completed years. Negative only if `birth` lies after `today`.
  pub years:                 i32,
  /// The first anniversary on or after `today`.
  pub next_birthday:         NaiveDate,
  pub days_to_next_birthday: i64,
  pub is_birthday_today:     bool,
}

/// `birth`'s month and day in `year`, if that date exists.
pub fn anniversary(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
  NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
}

pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> AgeFacts {
  let mut years = today.year() - birth.year();
  if (today.month(), today.day()) < (birth.month(), birth.day()) {
    years -= 1;
  }

  let next_birthday = first_anniversary(birth, today, |d| d >= today);
  let days_to_next_birthday = (next_birthday - today).num_days();

  AgeFacts {
    years,
    next_birthday,
    days_to_next_birthday,
    is_birthday_today: days_to_next_birthday == 0,
  }
}

/// The most recent anniversary on or before `today`, and the first one
/// strictly after it.
pub fn birthday_anniversaries(
  birth: NaiveDate,
  today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
  let next = first_anniversary(birth, today, |d| d > today);

  let mut year = today.year();
  let last = loop {
    if let Some(d) = anniversary(birth, year)
      && d <= today
    {
      break d;
    }
    year -= 1;
  };

  (last, next)
}

fn first_anniversary(
  birth: NaiveDate,
  from: NaiveDate,
  accept: impl Fn(NaiveDate) -> bool,
) -> NaiveDate {
  let mut year = from.year();
  loop {
    if let Some(d) = anniversary(birth, year)
      && accept(d)
    {
      return d;
    }
    year += 1;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn age_before_and_after_birthday() {
    let birth = date(1985, 3, 21);
    assert_eq!(calculate_age(birth, date(2024, 3, 20)).years, 38);
    assert_eq!(calculate_age(birth, date(2024, 3, 21)).years, 39);
    assert_eq!(calculate_age(birth, date(2024, 12, 31)).years, 39);
  }

  #[test]
  fn countdown_to_later_this_year() {
    let facts = calculate_age(date(1985, 3, 21), date(2024, 3, 1));
    assert_eq!(facts.next_birthday, date(2024, 3, 21));
    assert_eq!(facts.days_to_next_birthday, 20);
    assert!(!facts.is_birthday_today);
  }

  #[test]
  fn countdown_rolls_into_next_year() {
    let facts = calculate_age(date(1980, 1, 1), date(2024, 6, 15));
    assert_eq!(facts.next_birthday, date(2025, 1, 1));
    assert_eq!(facts.days_to_next_birthday, 200);
  }

  #[test]
  fn birthday_today_has_zero_countdown() {
    let facts = calculate_age(date(1990, 6, 15), date(2024, 6, 15));
    assert_eq!(facts.days_to_next_birthday, 0);
    assert!(facts.is_birthday_today);
    assert_eq!(facts.years, 34);
  }

  #[test]
  fn leap_day_birthday_waits_for_a_leap_year() {
    let birth = date(2000, 2, 29);
    let facts = calculate_age(birth, date(2023, 3, 1));
    assert_eq!(facts.next_birthday, date(2024, 2, 29));
    assert_eq!(facts.years, 23);

    let facts = calculate_age(birth, date(2023, 2, 28));
    assert!(!facts.is_birthday_today);
    assert_eq!(facts.years, 22);

    assert!(calculate_age(birth, date(2024, 2, 29)).is_birthday_today);
  }

  #[test]
  fn birthday_today_iff_month_and_day_match() {
    let birth = date(1992, 2, 29);
    let mut today = date(2023, 1, 1);
    while today < date(2025, 1, 1) {
      let same_day = today.month() == birth.month() && today.day() == birth.day();
      assert_eq!(calculate_age(birth, today).is_birthday_today, same_day, "{today}");
      today = today.succ_opt().unwrap();
    }
  }

  #[test]
  fn age_never_decreases_as_time_passes() {
    let birth = date(1980, 7, 31);
    let mut today = date(1990, 1, 1);
    let mut previous = calculate_age(birth, today).years;
    while today < date(1995, 1, 1) {
      today = today.succ_opt().unwrap();
      let years = calculate_age(birth, today).years;
      assert!(years >= previous);
      previous = years;
    }
  }

  #[test]
  fn anniversaries_straddle_today() {
    let birth = date(1980, 1, 1);
    assert_eq!(
      birthday_anniversaries(birth, date(2024, 6, 15)),
      (date(2024, 1, 1), date(2025, 1, 1))
    );
    // On the birthday itself the last anniversary is today.
    assert_eq!(
      birthday_anniversaries(birth, date(2024, 1, 1)),
      (date(2024, 1, 1), date(2025, 1, 1))
    );
    assert_eq!(
      birthday_anniversaries(date(1985, 12, 25), date(2024, 6, 15)),
      (date(2023, 12, 25), date(2024, 12, 25))
    );
  }

  #[test]
  fn leap_day_anniversaries() {
    assert_eq!(
      birthday_anniversaries(date(2000, 2, 29), date(2025, 6, 1)),
      (date(2024, 2, 29), date(2028, 2, 29))
    );
  }
}
