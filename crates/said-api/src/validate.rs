//! Handlers for the `/validate` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/validate` | Form body `id_number=<13 digits>`; full insight response |
//! | `GET`  | `/validate/{id_number}` | Legacy summary of the stored search |
//!
//! Both record the lookup, incrementing the search count. An identity number
//! that fails validation or decoding is a `400`.

use axum::{
  Form, Json,
  extract::{Path, State},
};
use chrono::Utc;
use said_core::{
  holiday::{HolidayRecord, HolidaySource, holidays_around_birthday, is_public_holiday},
  id_number::{decode, decode_at},
  insight::{BirthInsights, birthday_anniversaries},
  store::{NewIdSearch, SearchStore},
};
use serde::Deserialize;

use crate::{
  AppState,
  error::ApiError,
  response::{BirthdayBody, IdInfo, SearchSummary, ValidationResponse},
};

// ─── Submit ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ValidateForm {
  pub id_number: String,
}

/// `POST /validate` — form body `id_number=<13 digits>`
pub async fn submit<S, H>(
  State(state): State<AppState<S, H>>,
  Form(form): Form<ValidateForm>,
) -> Result<Json<ValidationResponse>, ApiError>
where
  S: SearchStore + 'static,
  H: HolidaySource + 'static,
{
  let today = Utc::now().date_naive();
  let decoded = decode_at(&form.id_number, today)?;
  let insights = BirthInsights::compute(decoded.birth_date(), today);
  let (last_birthday, next_birthday) = birthday_anniversaries(decoded.birth_date(), today);

  let source = state.holidays.as_ref();
  let country = state.settings.country.as_str();
  let policy = state.settings.holiday_failures;

  let last_result = is_public_holiday(source, last_birthday, country).await;
  let next_result = is_public_holiday(source, next_birthday, country).await;
  let birthday_holidays_fetched = last_result.is_ok() && next_result.is_ok();
  let last_holiday = policy.apply(last_result).map_err(ApiError::holidays)?;
  let next_holiday = policy.apply(next_result).map_err(ApiError::holidays)?;

  let around = policy
    .apply(holidays_around_birthday(source, decoded.birth_date(), country).await)
    .map_err(ApiError::holidays)?;

  let search = state
    .store
    .record_search(NewIdSearch::from(&decoded))
    .await
    .map_err(ApiError::store)?;

  // Keep the previously stored holidays when the provider could not be asked.
  let stored = if birthday_holidays_fetched {
    let on_birthdays: Vec<HolidayRecord> =
      last_holiday.iter().chain(next_holiday.iter()).cloned().collect();
    state
      .store
      .replace_holidays(search.id, on_birthdays)
      .await
      .map_err(ApiError::store)?
  } else {
    state
      .store
      .holidays_for(search.id)
      .await
      .map_err(ApiError::store)?
  };

  tracing::info!(
    id_search_id = search.id,
    search_count = search.search_count,
    "validated id number"
  );

  Ok(Json(ValidationResponse {
    id_info:                  IdInfo::new(&decoded, &insights),
    birth_insights:           (&insights).into(),
    holidays:                 stored.into_iter().map(Into::into).collect(),
    holidays_around_birthday: around.into_iter().map(Into::into).collect(),
    last_birthday:            BirthdayBody { date: last_birthday, holiday: last_holiday },
    next_birthday:            BirthdayBody { date: next_birthday, holiday: next_holiday },
    search_count:             search.search_count,
    special_messages:         insights.special_messages(),
  }))
}

// ─── Legacy lookup ────────────────────────────────────────────────────────────

/// `GET /validate/{id_number}`
pub async fn lookup<S, H>(
  State(state): State<AppState<S, H>>,
  Path(id_number): Path<String>,
) -> Result<Json<SearchSummary>, ApiError>
where
  S: SearchStore + 'static,
  H: HolidaySource + 'static,
{
  let decoded = decode(&id_number)?;

  let search = state
    .store
    .record_search(NewIdSearch::from(&decoded))
    .await
    .map_err(ApiError::store)?;
  let holidays = state
    .store
    .holidays_for(search.id)
    .await
    .map_err(ApiError::store)?;

  tracing::info!(
    id_search_id = search.id,
    search_count = search.search_count,
    "looked up id number"
  );
  Ok(Json(SearchSummary::new(search, holidays)))
}
