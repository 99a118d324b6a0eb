//! Life-path numerology.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const MEANINGS: [&str; 9] = [
  "The Leader: Independent, focused, and a natural-born leader",
  "The Mediator: Diplomatic, sensitive, and cooperative",
  "The Creative: Expressive, optimistic, and talented in arts",
  "The Worker: Practical, trustworthy, and hardworking",
  "The Freedom Seeker: Adventurous, versatile, and progressive",
  "The Nurturer: Responsible, caring, and a natural healer",
  "The Seeker: Analytical, introspective, and philosophical",
  "The Powerhouse: Ambitious, successful, and materialistic",
  "The Humanitarian: Compassionate, romantic, and selfless",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifePath {
  /// Always in `1..=9`.
  pub number:  u8,
  pub meaning: &'static str,
}

/// Sum decimal digits repeatedly until the value is a single digit.
pub fn reduce_digits(mut n: u32) -> u32 {
  while n > 9 {
    let mut sum = 0;
    while n > 0 {
      sum += n % 10;
      n /= 10;
    }
    n = sum;
  }
  n
}

/// Reduce year, month and day independently, then reduce their sum.
///
/// Master numbers (11, 22, 33) are not preserved; the result is always a
/// single digit.
pub fn life_path(date: NaiveDate) -> LifePath {
  let year = reduce_digits(date.year().unsigned_abs());
  let month = reduce_digits(date.month());
  let day = reduce_digits(date.day());

  // Day and month are at least 1, so the reduced sum is at least 1.
  let number = reduce_digits(year + month + day) as u8;
  LifePath {
    number,
    meaning: MEANINGS[usize::from(number) - 1],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn reduces_to_a_single_digit() {
    assert_eq!(reduce_digits(0), 0);
    assert_eq!(reduce_digits(9), 9);
    assert_eq!(reduce_digits(10), 1);
    assert_eq!(reduce_digits(1999), 1);
    assert_eq!(reduce_digits(99_999), 9);
  }

  #[test]
  fn known_life_paths() {
    assert_eq!(life_path(date(1980, 1, 1)).number, 2);
    assert_eq!(life_path(date(1985, 3, 21)).number, 2);
    assert_eq!(life_path(date(1999, 12, 31)).number, 8);
    assert_eq!(life_path(date(2000, 2, 29)).number, 6);

    let lp = life_path(date(1990, 6, 15));
    assert_eq!(lp.number, 4);
    assert!(lp.meaning.starts_with("The Worker"));
  }

  #[test]
  fn master_numbers_are_reduced() {
    // 2009-01-01: 2 + 1 + 1 = 4; 1991-11-29: 2 + 2 + 2 = 6 (22 is not kept).
    assert_eq!(life_path(date(2009, 1, 1)).number, 4);
    assert_eq!(life_path(date(1991, 11, 29)).number, 6);
  }

  #[test]
  fn every_date_lands_in_one_to_nine() {
    let mut day = date(1900, 1, 1);
    let end = date(2030, 12, 31);
    while day <= end {
      let n = life_path(day).number;
      assert!((1..=9).contains(&n), "{day} gave {n}");
      day = day.succ_opt().unwrap();
    }
  }
}
