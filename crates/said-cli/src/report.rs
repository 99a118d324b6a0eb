//! Offline decode report, rendered as text or JSON.

use std::fmt::{self, Write as _};

use chrono::NaiveDate;
use said_core::{DecodedIdentity, insight::BirthInsights};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
  #[serde(flatten)]
  pub identity:         DecodedIdentity,
  pub citizen_status:   &'static str,
  pub insights:         BirthInsights,
  pub special_messages: Vec<String>,
}

impl Report {
  pub fn new(identity: DecodedIdentity, today: NaiveDate) -> Self {
    let insights = BirthInsights::compute(identity.birth_date(), today);
    Self {
      citizen_status: identity.citizen_status(),
      special_messages: insights.special_messages(),
      identity,
      insights,
    }
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let id = &self.identity;
    let ins = &self.insights;

    writeln!(f, "ID number      {}", id.id_number())?;
    writeln!(f, "Date of birth  {} ({})", id.birth_date(), ins.day.day_of_week)?;
    writeln!(f, "Age            {}", ins.age.years)?;
    writeln!(f, "Gender         {}", id.gender())?;
    writeln!(f, "Status         {}", self.citizen_status)?;
    writeln!(f)?;
    writeln!(f, "Zodiac         {} / {}", ins.western_zodiac, ins.chinese_zodiac)?;
    writeln!(f, "Life path      {} ({})", ins.life_path.number, ins.life_path.meaning)?;
    writeln!(f, "Birth stone    {}", ins.symbols.stone.name)?;
    writeln!(f, "Birth flower   {}", ins.symbols.flower.name)?;

    let mut countdown = String::new();
    if ins.age.is_birthday_today {
      countdown.push_str("today");
    } else {
      write!(countdown, "{} days ({})", ins.age.days_to_next_birthday, ins.age.next_birthday)?;
    }
    writeln!(f, "Next birthday  {countdown}")?;

    if !self.special_messages.is_empty() {
      writeln!(f)?;
      for message in &self.special_messages {
        writeln!(f, "{message}")?;
      }
    }
    Ok(())
  }
}
