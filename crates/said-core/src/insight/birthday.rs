//! Day-of-week and famous-birthday lookups.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Keyed by `MM-DD`. Most days have no entry.
static FAMOUS_BIRTHDAYS: &[(&str, &[&str])] = &[
  ("01-01", &["Verne Troyer", "Frank Langella"]),
  ("02-02", &["Shakira", "Christie Brinkley"]),
  ("03-03", &["Alexander Graham Bell", "Jessica Biel"]),
  ("04-04", &["Robert Downey Jr.", "Heath Ledger"]),
  ("05-05", &["Adele", "Chris Brown"]),
  ("06-06", &["Jason Isaacs", "Paul Giamatti"]),
  ("07-07", &["Ringo Starr", "Jim Gaffigan"]),
  ("08-08", &["Roger Federer", "Dustin Hoffman"]),
  ("09-09", &["Adam Sandler", "Hugh Grant"]),
  ("10-10", &["David Lee Roth", "Brett Favre"]),
  ("11-11", &["Leonardo DiCaprio", "Demi Moore"]),
  ("12-12", &["Frank Sinatra", "Bob Barker"]),
  ("12-25", &["Annie Lennox", "Justin Trudeau"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthDayInfo {
  pub day_of_week:      &'static str,
  /// Empty when nobody notable shares the day.
  pub famous_birthdays: &'static [&'static str],
}

pub fn weekday_name(day: Weekday) -> &'static str {
  match day {
    Weekday::Mon => "Monday",
    Weekday::Tue => "Tuesday",
    Weekday::Wed => "Wednesday",
    Weekday::Thu => "Thursday",
    Weekday::Fri => "Friday",
    Weekday::Sat => "Saturday",
    Weekday::Sun => "Sunday",
  }
}

pub fn famous_birthdays(date: NaiveDate) -> &'static [&'static str] {
  let key = date.format("%m-%d").to_string();
  FAMOUS_BIRTHDAYS
    .iter()
    .find(|(day, _)| *day == key)
    .map(|(_, names)| *names)
    .unwrap_or_default()
}

pub fn birth_day_info(date: NaiveDate) -> BirthDayInfo {
  BirthDayInfo {
    day_of_week:      weekday_name(date.weekday()),
    famous_birthdays: famous_birthdays(date),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn weekday_of_known_dates() {
    assert_eq!(birth_day_info(date(1980, 1, 1)).day_of_week, "Tuesday");
    assert_eq!(birth_day_info(date(2000, 2, 29)).day_of_week, "Tuesday");
    assert_eq!(birth_day_info(date(1990, 3, 21)).day_of_week, "Wednesday");
  }

  #[test]
  fn famous_birthdays_are_keyed_by_month_and_day() {
    assert_eq!(
      famous_birthdays(date(1985, 12, 25)),
      &["Annie Lennox", "Justin Trudeau"]
    );
    assert_eq!(famous_birthdays(date(2011, 1, 1)), famous_birthdays(date(1950, 1, 1)));
  }

  #[test]
  fn missing_day_is_empty_not_an_error() {
    assert!(famous_birthdays(date(1990, 3, 21)).is_empty());
  }
}
