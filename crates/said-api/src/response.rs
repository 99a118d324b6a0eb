//! JSON bodies returned by the `/validate` endpoints.

use chrono::NaiveDate;
use said_core::{
  DecodedIdentity, Gender,
  holiday::HolidayRecord,
  insight::{BirthInsights, BirthSymbols, ChineseZodiac, WesternZodiac},
  store::{IdSearch, StoredHoliday},
};
use serde::Serialize;

// ─── POST /validate ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
  pub id_info:                  IdInfo,
  pub birth_insights:           InsightsBody,
  /// Holidays stored against this identity number.
  pub holidays:                 Vec<HolidayBody>,
  pub holidays_around_birthday: Vec<HolidayBody>,
  pub last_birthday:            BirthdayBody,
  pub next_birthday:            BirthdayBody,
  pub search_count:             i64,
  pub special_messages:         Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IdInfo {
  pub date_of_birth:  NaiveDate,
  pub gender:         Gender,
  pub citizen_status: &'static str,
  pub age:            i32,
}

impl IdInfo {
  pub fn new(decoded: &DecodedIdentity, insights: &BirthInsights) -> Self {
    Self {
      date_of_birth:  decoded.birth_date(),
      gender:         decoded.gender(),
      citizen_status: decoded.citizen_status(),
      age:            insights.age.years,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct InsightsBody {
  pub day_of_week:        &'static str,
  pub zodiac:             ZodiacBody,
  pub birth_symbols:      &'static BirthSymbols,
  pub numerology:         NumerologyBody,
  pub birthday_countdown: CountdownBody,
  pub shared_birthdays:   &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ZodiacBody {
  pub western: WesternZodiac,
  pub chinese: ChineseZodiac,
}

#[derive(Debug, Serialize)]
pub struct NumerologyBody {
  pub life_path_number: u8,
  pub meaning:          &'static str,
}

#[derive(Debug, Serialize)]
pub struct CountdownBody {
  pub days_remaining: i64,
  pub is_today:       bool,
}

impl From<&BirthInsights> for InsightsBody {
  fn from(insights: &BirthInsights) -> Self {
    Self {
      day_of_week:        insights.day.day_of_week,
      zodiac:             ZodiacBody {
        western: insights.western_zodiac,
        chinese: insights.chinese_zodiac,
      },
      birth_symbols:      insights.symbols,
      numerology:         NumerologyBody {
        life_path_number: insights.life_path.number,
        meaning:          insights.life_path.meaning,
      },
      birthday_countdown: CountdownBody {
        days_remaining: insights.age.days_to_next_birthday,
        is_today:       insights.age.is_birthday_today,
      },
      shared_birthdays:   insights.day.famous_birthdays,
    }
  }
}

/// A holiday in list form: no classification.
#[derive(Debug, Serialize)]
pub struct HolidayBody {
  pub name:        String,
  pub description: Option<String>,
  pub date:        NaiveDate,
}

impl From<HolidayRecord> for HolidayBody {
  fn from(h: HolidayRecord) -> Self {
    Self { name: h.name, description: h.description, date: h.date }
  }
}

impl From<StoredHoliday> for HolidayBody {
  fn from(h: StoredHoliday) -> Self { h.record.into() }
}

#[derive(Debug, Serialize)]
pub struct BirthdayBody {
  pub date:    NaiveDate,
  /// The holiday falling on this birthday, if any.
  pub holiday: Option<HolidayRecord>,
}

// ─── GET /validate/{id_number} ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SearchSummary {
  pub id_number:     String,
  pub date_of_birth: NaiveDate,
  pub gender:        Gender,
  pub citizen:       bool,
  pub search_count:  i64,
  pub holidays:      Vec<StoredHoliday>,
}

impl SearchSummary {
  pub fn new(search: IdSearch, holidays: Vec<StoredHoliday>) -> Self {
    Self {
      id_number: search.id_number,
      date_of_birth: search.date_of_birth,
      gender: search.gender,
      citizen: search.citizen,
      search_count: search.search_count,
      holidays,
    }
  }
}
