//! Validation and decoding of 13-digit South African identity numbers.
//!
//! Layout, 0-based positions left to right:
//!
//! | Positions | Meaning |
//! |-----------|---------|
//! | `0..2`    | Two-digit birth year |
//! | `2..4`    | Birth month |
//! | `4..6`    | Birth day |
//! | `6..10`   | Sequence number; `>= 5000` is male |
//! | `10`      | Citizenship, `0` citizen, `1` permanent resident |
//! | `11`      | Legacy filler, unused |
//! | `12`      | Check digit |
//!
//! Validation is two-phase. [`validate`] bounds the day by 31 regardless of
//! month; a day that does not exist in the given month (31 April, 30 February)
//! is only rejected by [`decode`] when the calendar date is built.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const ID_LENGTH: usize = 13;

/// Sequence numbers at or above this value are allocated to males.
const MALE_SEQUENCE_START: u32 = 5000;

// ─── Validation ──────────────────────────────────────────────────────────────

/// `true` iff `raw` is exactly 13 ASCII digits.
pub fn validate_format(raw: &str) -> bool {
  raw.len() == ID_LENGTH && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Luhn-style parity check over every digit, check digit included.
///
/// Digits at even positions count at face value. Digits at odd positions are
/// doubled, and 9 is subtracted when the doubled value exceeds 9. The number
/// passes when the total is a multiple of 10. Non-digit input never passes.
pub fn validate_checksum(raw: &str) -> bool {
  match checksum_total(raw) {
    Some(total) => total % 10 == 0,
    None => false,
  }
}

/// The check digit that makes `first_twelve` pass [`validate_checksum`].
///
/// Returns `None` unless the input is exactly 12 ASCII digits.
pub fn check_digit(first_twelve: &str) -> Option<u8> {
  if first_twelve.len() != ID_LENGTH - 1 {
    return None;
  }
  // Position 12 is even, so the check digit is added unchanged.
  let total = checksum_total(first_twelve)?;
  Some(((10 - total % 10) % 10) as u8)
}

fn checksum_total(raw: &str) -> Option<u32> {
  raw.chars().enumerate().try_fold(0u32, |total, (i, c)| {
    let digit = c.to_digit(10)?;
    let weighted = if i % 2 == 1 {
      let doubled = digit * 2;
      if doubled > 9 { doubled - 9 } else { doubled }
    } else {
      digit
    };
    Some(total + weighted)
  })
}

/// Full structural validation: format, month `1..=12`, day `1..=31`,
/// citizenship digit `0` or `1`, and the checksum.
pub fn validate(raw: &str) -> bool {
  if !validate_format(raw) {
    return false;
  }
  let digits = raw.as_bytes();
  let month = pair(digits, 2);
  let day = pair(digits, 4);
  let citizenship = digit(digits, 10);

  (1..=12).contains(&month)
    && (1..=31).contains(&day)
    && citizenship <= 1
    && validate_checksum(raw)
}

fn digit(digits: &[u8], at: usize) -> u32 { u32::from(digits[at] - b'0') }

fn pair(digits: &[u8], at: usize) -> u32 {
  digit(digits, at) * 10 + digit(digits, at + 1)
}

// ─── IdNumber ────────────────────────────────────────────────────────────────

/// An identity number that has passed [`validate`].
///
/// Holding an `IdNumber` does not guarantee the embedded birth date exists;
/// that is only established by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdNumber(String);

impl IdNumber {
  pub fn parse(raw: &str) -> Result<Self> {
    if validate(raw) {
      Ok(Self(raw.to_owned()))
    } else {
      Err(Error::InvalidFormat(raw.to_owned()))
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn year_of_century(&self) -> u32 { pair(self.0.as_bytes(), 0) }

  pub fn month(&self) -> u32 { pair(self.0.as_bytes(), 2) }

  pub fn day(&self) -> u32 { pair(self.0.as_bytes(), 4) }

  /// The four-digit sequence number at positions 6 to 9.
  pub fn sequence(&self) -> u32 {
    let digits = self.0.as_bytes();
    pair(digits, 6) * 100 + pair(digits, 8)
  }

  pub fn citizenship_digit(&self) -> u32 { digit(self.0.as_bytes(), 10) }
}

impl fmt::Display for IdNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for IdNumber {
  fn as_ref(&self) -> &str { &self.0 }
}

impl FromStr for IdNumber {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl TryFrom<String> for IdNumber {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> {
    if validate(&value) {
      Ok(Self(value))
    } else {
      Err(Error::InvalidFormat(value))
    }
  }
}

impl From<IdNumber> for String {
  fn from(id: IdNumber) -> Self { id.0 }
}

// ─── Decoded identity ────────────────────────────────────────────────────────

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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
}

impl Gender {
  fn from_sequence(sequence: u32) -> Self {
    if sequence >= MALE_SEQUENCE_START {
      Self::Male
    } else {
      Self::Female
    }
  }
}

/// The demographic facts embedded in a valid identity number.
///
/// Only [`decode_at`] builds one, so the fields always agree with the number
/// they were read from. Serialize-only for the same reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedIdentity {
  id_number:  IdNumber,
  birth_date: NaiveDate,
  gender:     Gender,
  is_citizen: bool,
}

impl DecodedIdentity {
  pub fn id_number(&self) -> &IdNumber { &self.id_number }

  pub fn birth_date(&self) -> NaiveDate { self.birth_date }

  pub fn gender(&self) -> Gender { self.gender }

  pub fn is_citizen(&self) -> bool { self.is_citizen }

  /// Human-readable residency status.
  pub fn citizen_status(&self) -> &'static str {
    citizen_status(self.is_citizen)
  }
}

pub fn citizen_status(is_citizen: bool) -> &'static str {
  if is_citizen {
    "South African Citizen"
  } else {
    "Permanent Resident"
  }
}

/// Decode `raw`, resolving the century against today's UTC date.
pub fn decode(raw: &str) -> Result<DecodedIdentity> {
  decode_at(raw, Utc::now().date_naive())
}

/// Decode `raw`, resolving the century against `today`.
///
/// A two-digit year greater than today's two-digit year belongs to the 1900s;
/// anything else belongs to the 2000s. A birth year is therefore never placed
/// after the current year.
pub fn decode_at(raw: &str, today: NaiveDate) -> Result<DecodedIdentity> {
  let id_number = IdNumber::parse(raw)?;

  let yy = id_number.year_of_century();
  let current_yy = today.year().rem_euclid(100) as u32;
  let century = if yy > current_yy { 1900 } else { 2000 };

  let birth_date =
    NaiveDate::from_ymd_opt(century + yy as i32, id_number.month(), id_number.day())
      .ok_or_else(|| Error::InvalidFormat(raw.to_owned()))?;

  Ok(DecodedIdentity {
    gender: Gender::from_sequence(id_number.sequence()),
    is_citizen: id_number.citizenship_digit() == 0,
    birth_date,
    id_number,
  })
}
