//! Derived facts about a birth date.
//!
//! Every function here is total over valid calendar dates: once an identity
//! number has decoded, nothing downstream can fail. Lookup tables with no
//! entry for a key resolve to an empty result.

pub mod age;
pub mod birthday;
pub mod numerology;
pub mod symbols;
pub mod zodiac;

use chrono::NaiveDate;
use serde::Serialize;

pub use age::{AgeFacts, birthday_anniversaries, calculate_age};
pub use birthday::{BirthDayInfo, birth_day_info};
pub use numerology::{LifePath, life_path};
pub use symbols::{BirthFlower, BirthStone, BirthSymbols, birth_symbols};
pub use zodiac::{ChineseZodiac, WesternZodiac, chinese_zodiac, western_zodiac};

/// All insights for one birth date, as of `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthInsights {
  pub age:            AgeFacts,
  pub western_zodiac: WesternZodiac,
  pub chinese_zodiac: ChineseZodiac,
  pub life_path:      LifePath,
  pub day:            BirthDayInfo,
  pub symbols:        &'static BirthSymbols,
}

impl BirthInsights {
  pub fn compute(birth: NaiveDate, today: NaiveDate) -> Self {
    use chrono::Datelike as _;

    Self {
      age:            calculate_age(birth, today),
      western_zodiac: western_zodiac(birth),
      chinese_zodiac: chinese_zodiac(birth.year()),
      life_path:      life_path(birth),
      day:            birth_day_info(birth),
      symbols:        birth_symbols(birth),
    }
  }

  /// Friendly one-liners shown alongside the insights.
  ///
  /// The birth-symbol message is always present; the birthday greeting and
  /// the shared-birthday message only when they apply.
  pub fn special_messages(&self) -> Vec<String> {
    let mut messages = Vec::new();

    if self.age.is_birthday_today {
      messages.push("🎉 Happy Birthday! 🎂".to_owned());
    }

    if !self.day.famous_birthdays.is_empty() {
      messages.push(format!(
        "You share your birthday with {}! 🌟",
        self.day.famous_birthdays.join(", ")
      ));
    }

    messages.push(format!(
      "Your birth stone is the {} 💎 and your birth flower is the {} 🌸",
      self.symbols.stone.name, self.symbols.flower.name
    ));

    messages
  }
}
