//! [`SqliteStore`] — the SQLite implementation of [`SearchStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use said_core::{
  holiday::HolidayRecord,
  store::{IdSearch, NewIdSearch, SearchStore, StoredHoliday},
};

use crate::{
  Error, Result,
  encode::{RawHoliday, RawIdSearch, encode_date, encode_dt, encode_gender},
  schema::SCHEMA,
};

pub(crate) const SELECT_SEARCH: &str = "SELECT id, id_number, date_of_birth, gender, citizen,
        search_count, created_at, updated_at
   FROM id_searches";

pub(crate) const SELECT_HOLIDAY: &str = "SELECT id, id_search_id, name, description, date, type,
        created_at
   FROM holidays";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A search-history store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SearchStore impl ────────────────────────────────────────────────────────

impl SearchStore for SqliteStore {
  type Error = Error;

  async fn find_by_id_number(&self, id_number: &str) -> Result<Option<IdSearch>> {
    let id_number = id_number.to_owned();

    let raw: Option<RawIdSearch> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("{SELECT_SEARCH} WHERE id_number = ?1"),
            rusqlite::params![id_number],
            RawIdSearch::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawIdSearch::into_search).transpose()
  }

  async fn record_search(&self, search: NewIdSearch) -> Result<IdSearch> {
    let now_str    = encode_dt(Utc::now());
    let dob_str    = encode_date(search.date_of_birth);
    let gender_str = encode_gender(search.gender).to_owned();
    let id_number  = search.id_number;
    let citizen    = search.citizen;

    let raw: RawIdSearch = self
      .conn
      .call(move |conn| {
        // A repeat lookup keeps the originally decoded fields and only bumps
        // the counter.
        conn.execute(
          "INSERT INTO id_searches (
             id_number, date_of_birth, gender, citizen, search_count, created_at
           ) VALUES (?1, ?2, ?3, ?4, 1, ?5)
           ON CONFLICT (id_number) DO UPDATE SET
             search_count = search_count + 1,
             updated_at   = excluded.created_at",
          rusqlite::params![id_number, dob_str, gender_str, citizen, now_str],
        )?;

        Ok(conn.query_row(
          &format!("{SELECT_SEARCH} WHERE id_number = ?1"),
          rusqlite::params![id_number],
          RawIdSearch::from_row,
        )?)
      })
      .await?;

    let search = raw.into_search()?;
    tracing::debug!(
      id_search_id = search.id,
      search_count = search.search_count,
      "recorded id search"
    );
    Ok(search)
  }

  async fn replace_holidays(
    &self,
    id_search_id: i64,
    holidays: Vec<HolidayRecord>,
  ) -> Result<Vec<StoredHoliday>> {
    let created_at = Utc::now();
    let created_at_str = encode_dt(created_at);

    let inserted: Option<Vec<(i64, HolidayRecord)>> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists = tx
          .query_row(
            "SELECT 1 FROM id_searches WHERE id = ?1",
            rusqlite::params![id_search_id],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        if !exists {
          return Ok(None);
        }

        tx.execute(
          "DELETE FROM holidays WHERE id_search_id = ?1",
          rusqlite::params![id_search_id],
        )?;

        let mut inserted = Vec::with_capacity(holidays.len());
        for holiday in holidays {
          tx.execute(
            "INSERT INTO holidays (
               id_search_id, name, description, date, type, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
              id_search_id,
              holiday.name,
              holiday.description,
              encode_date(holiday.date),
              holiday.kind,
              created_at_str,
            ],
          )?;
          inserted.push((tx.last_insert_rowid(), holiday));
        }

        tx.commit()?;
        Ok(Some(inserted))
      })
      .await?;

    let inserted = inserted.ok_or(Error::SearchNotFound(id_search_id))?;
    Ok(
      inserted
        .into_iter()
        .map(|(id, record)| StoredHoliday { id, id_search_id, record, created_at })
        .collect(),
    )
  }

  async fn holidays_for(&self, id_search_id: i64) -> Result<Vec<StoredHoliday>> {
    let raws: Vec<RawHoliday> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "{SELECT_HOLIDAY} WHERE id_search_id = ?1 ORDER BY date, id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![id_search_id], RawHoliday::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawHoliday::into_holiday).collect()
  }
}
