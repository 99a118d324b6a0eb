//! Birth stones and birth flowers, keyed by birth month.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthStone {
  pub name:    &'static str,
  pub meaning: &'static str,
  pub color:   &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthFlower {
  pub name:    &'static str,
  pub meaning: &'static str,
  pub colors:  &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthSymbols {
  pub stone:  BirthStone,
  pub flower: BirthFlower,
}

const fn month(
  stone: (&'static str, &'static str, &'static str),
  flower: (&'static str, &'static str, &'static [&'static str]),
) -> BirthSymbols {
  BirthSymbols {
    stone:  BirthStone { name: stone.0, meaning: stone.1, color: stone.2 },
    flower: BirthFlower { name: flower.0, meaning: flower.1, colors: flower.2 },
  }
}

/// Indexed by `month - 1`.
static BY_MONTH: [BirthSymbols; 12] = [
  month(
    ("Garnet", "Represents faith, love and constancy", "Deep Red"),
    ("Carnation", "Love, fascination, and distinction", &["Pink", "Red", "White"]),
  ),
  month(
    ("Amethyst", "Brings peace, tranquility and protection", "Purple"),
    ("Violet", "Modesty, virtue, and faithfulness", &["Purple", "White"]),
  ),
  month(
    ("Aquamarine", "Brings courage, calmness and protection", "Blue-Green"),
    ("Daffodil", "Rebirth, new beginnings, and eternal life", &["Yellow", "White"]),
  ),
  month(
    ("Diamond", "Represents innocence, love and fidelity", "Clear"),
    ("Daisy", "Innocence, purity, and true love", &["White", "Yellow"]),
  ),
  month(
    ("Emerald", "Symbolizes love, rebirth and wisdom", "Green"),
    ("Lily of the Valley", "Return of happiness, humility, and sweetness", &["White"]),
  ),
  month(
    ("Pearl", "Represents purity, integrity and love", "White"),
    ("Rose", "Love, gratitude, and appreciation", &["Red", "Pink", "White"]),
  ),
  month(
    ("Ruby", "Brings love, success and integrity", "Red"),
    ("Larkspur", "Strong bonds of love and an open heart", &["Purple", "Pink", "White"]),
  ),
  month(
    ("Peridot", "Brings good fortune, peace and success", "Light Green"),
    (
      "Gladiolus",
      "Strength of character, moral integrity",
      &["Red", "Pink", "Purple", "White"],
    ),
  ),
  month(
    ("Sapphire", "Represents wisdom, virtue and good fortune", "Blue"),
    ("Aster", "Love, faith, and wisdom", &["Purple", "White"]),
  ),
  month(
    ("Opal", "Brings hope, creativity and innocence", "Multicolor"),
    ("Marigold", "Creativity, passion, and sacred offering", &["Orange", "Yellow"]),
  ),
  month(
    ("Topaz", "Symbolizes love, affection and purpose", "Yellow"),
    ("Chrysanthemum", "Joy, optimism, and long life", &["Red", "Yellow", "White"]),
  ),
  month(
    ("Turquoise", "Brings prosperity, success and happiness", "Blue-Green"),
    ("Narcissus", "Hope, wealth, and good fortune", &["White", "Yellow"]),
  ),
];

/// Look up a month number. `None` outside `1..=12`.
pub fn by_month(month: u32) -> Option<&'static BirthSymbols> {
  let index = usize::try_from(month).ok()?.checked_sub(1)?;
  BY_MONTH.get(index)
}

pub fn birth_symbols(date: NaiveDate) -> &'static BirthSymbols {
  &BY_MONTH[date.month0() as usize]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn june_is_pearl_and_rose() {
    let june = by_month(6).unwrap();
    assert_eq!(june.stone.name, "Pearl");
    assert_eq!(june.flower.name, "Rose");
    assert_eq!(june.flower.colors, &["Red", "Pink", "White"]);
  }

  #[test]
  fn every_month_is_present() {
    for m in 1..=12 {
      let symbols = by_month(m).unwrap();
      assert!(!symbols.stone.name.is_empty());
      assert!(!symbols.flower.colors.is_empty());
    }
    assert!(by_month(0).is_none());
    assert!(by_month(13).is_none());
  }

  #[test]
  fn date_lookup_uses_the_month() {
    let date = NaiveDate::from_ymd_opt(1985, 12, 25).unwrap();
    assert_eq!(birth_symbols(date).stone.name, "Turquoise");
    assert_eq!(birth_symbols(date), by_month(12).unwrap());
  }
}
