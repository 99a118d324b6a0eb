//! Western (tropical) and Chinese zodiac lookups.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumIter,
  strum::IntoStaticStr,
)]
pub enum WesternZodiac {
  Aries,
  Taurus,
  Gemini,
  Cancer,
  Leo,
  Virgo,
  Libra,
  Scorpio,
  Sagittarius,
  Capricorn,
  Aquarius,
  Pisces,
}

/// First `(month, day)` of each sign, in calendar order. A date belongs to
/// the last sign whose start it has reached; dates before 20 January fall
/// back to Capricorn, which straddles the new year.
const SIGN_STARTS: [(u32, u32, WesternZodiac); 12] = [
  (1, 20, WesternZodiac::Aquarius),
  (2, 19, WesternZodiac::Pisces),
  (3, 21, WesternZodiac::Aries),
  (4, 20, WesternZodiac::Taurus),
  (5, 21, WesternZodiac::Gemini),
  (6, 21, WesternZodiac::Cancer),
  (7, 23, WesternZodiac::Leo),
  (8, 23, WesternZodiac::Virgo),
  (9, 23, WesternZodiac::Libra),
  (10, 23, WesternZodiac::Scorpio),
  (11, 22, WesternZodiac::Sagittarius),
  (12, 22, WesternZodiac::Capricorn),
];

pub fn western_zodiac(date: NaiveDate) -> WesternZodiac {
  let key = (date.month(), date.day());
  SIGN_STARTS
    .iter()
    .rev()
    .find(|(month, day, _)| key >= (*month, *day))
    .map_or(WesternZodiac::Capricorn, |(_, _, sign)| *sign)
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::IntoStaticStr,
)]
pub enum ChineseZodiac {
  Rat,
  Ox,
  Tiger,
  Rabbit,
  Dragon,
  Snake,
  Horse,
  Goat,
  Monkey,
  Rooster,
  Dog,
  Pig,
}

const ANIMALS: [ChineseZodiac; 12] = [
  ChineseZodiac::Rat,
  ChineseZodiac::Ox,
  ChineseZodiac::Tiger,
  ChineseZodiac::Rabbit,
  ChineseZodiac::Dragon,
  ChineseZodiac::Snake,
  ChineseZodiac::Horse,
  ChineseZodiac::Goat,
  ChineseZodiac::Monkey,
  ChineseZodiac::Rooster,
  ChineseZodiac::Dog,
  ChineseZodiac::Pig,
];

/// `ANIMALS[year mod 12]`.
///
/// This is a plain modulo over the Gregorian year. It ignores the lunar new
/// year, so people born in January or early February get the animal of the
/// following lunar year.
pub fn chinese_zodiac(year: i32) -> ChineseZodiac {
  ANIMALS[year.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator as _;

  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn aries_starts_on_march_twenty_first() {
    assert_eq!(western_zodiac(date(1990, 3, 21)), WesternZodiac::Aries);
    assert_eq!(western_zodiac(date(1990, 3, 20)), WesternZodiac::Pisces);
  }

  #[test]
  fn capricorn_wraps_the_new_year() {
    assert_eq!(western_zodiac(date(1990, 12, 22)), WesternZodiac::Capricorn);
    assert_eq!(western_zodiac(date(1990, 12, 31)), WesternZodiac::Capricorn);
    assert_eq!(western_zodiac(date(1991, 1, 1)), WesternZodiac::Capricorn);
    assert_eq!(western_zodiac(date(1991, 1, 19)), WesternZodiac::Capricorn);
    assert_eq!(western_zodiac(date(1991, 1, 20)), WesternZodiac::Aquarius);
  }

  #[test]
  fn every_boundary_matches_the_table() {
    let cases = [
      ((4, 19), WesternZodiac::Aries),
      ((4, 20), WesternZodiac::Taurus),
      ((5, 20), WesternZodiac::Taurus),
      ((5, 21), WesternZodiac::Gemini),
      ((6, 20), WesternZodiac::Gemini),
      ((6, 21), WesternZodiac::Cancer),
      ((7, 22), WesternZodiac::Cancer),
      ((7, 23), WesternZodiac::Leo),
      ((8, 22), WesternZodiac::Leo),
      ((8, 23), WesternZodiac::Virgo),
      ((9, 22), WesternZodiac::Virgo),
      ((9, 23), WesternZodiac::Libra),
      ((10, 22), WesternZodiac::Libra),
      ((10, 23), WesternZodiac::Scorpio),
      ((11, 21), WesternZodiac::Scorpio),
      ((11, 22), WesternZodiac::Sagittarius),
      ((12, 21), WesternZodiac::Sagittarius),
      ((2, 18), WesternZodiac::Aquarius),
      ((2, 19), WesternZodiac::Pisces),
      ((2, 29), WesternZodiac::Pisces),
    ];
    for ((m, d), expected) in cases {
      assert_eq!(western_zodiac(date(2000, m, d)), expected, "{m}-{d}");
    }
  }

  #[test]
  fn every_sign_is_reachable() {
    let mut seen = std::collections::HashSet::new();
    let mut day = date(2001, 1, 1);
    while day.year() == 2001 {
      seen.insert(western_zodiac(day));
      day = day.succ_opt().unwrap();
    }
    assert_eq!(seen.len(), WesternZodiac::iter().count());
  }

  #[test]
  fn chinese_zodiac_is_plain_modulo() {
    assert_eq!(chinese_zodiac(0), ChineseZodiac::Rat);
    assert_eq!(chinese_zodiac(1980), ChineseZodiac::Rat);
    assert_eq!(chinese_zodiac(1985), ChineseZodiac::Snake);
    assert_eq!(chinese_zodiac(2023), ChineseZodiac::Goat);
    assert_eq!(chinese_zodiac(-1), ChineseZodiac::Pig);
  }

  #[test]
  fn chinese_zodiac_has_period_twelve() {
    for year in 1900..2100 {
      assert_eq!(chinese_zodiac(year), chinese_zodiac(year + 12));
    }
  }
}
