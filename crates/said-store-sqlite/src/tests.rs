//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use said_core::{
  Gender,
  holiday::HolidayRecord,
  id_number::decode_at,
  store::{NewIdSearch, SearchStore},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_search(id_number: &str) -> NewIdSearch {
  let decoded = decode_at(id_number, date(2024, 6, 15)).unwrap();
  NewIdSearch::from(&decoded)
}

fn holiday(y: i32, m: u32, d: u32, name: &str) -> HolidayRecord {
  HolidayRecord {
    name:        name.into(),
    description: Some(format!("{name} description")),
    date:        date(y, m, d),
    kind:        Some("National holiday".into()),
  }
}

// ─── Searches ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn first_search_inserts_with_count_one() {
  let s = store().await;

  let search = s.record_search(new_search("8001015009087")).await.unwrap();
  assert_eq!(search.id_number, "8001015009087");
  assert_eq!(search.date_of_birth, date(1980, 1, 1));
  assert_eq!(search.gender, Gender::Male);
  assert!(search.citizen);
  assert_eq!(search.search_count, 1);
  assert!(search.updated_at.is_none());
}

#[tokio::test]
async fn repeat_searches_increment_the_count() {
  let s = store().await;

  let first = s.record_search(new_search("8001015009087")).await.unwrap();
  s.record_search(new_search("8001015009087")).await.unwrap();
  let third = s.record_search(new_search("8001015009087")).await.unwrap();

  assert_eq!(third.id, first.id);
  assert_eq!(third.search_count, 3);
  assert_eq!(third.created_at, first.created_at);
  assert!(third.updated_at.is_some());
}

#[tokio::test]
async fn distinct_numbers_get_distinct_rows() {
  let s = store().await;

  let a = s.record_search(new_search("8001015009087")).await.unwrap();
  let b = s.record_search(new_search("0101010000186")).await.unwrap();
  assert_ne!(a.id, b.id);
  assert_eq!(b.search_count, 1);
  assert!(!b.citizen);
}

#[tokio::test]
async fn find_by_id_number() {
  let s = store().await;
  assert!(s.find_by_id_number("8001015009087").await.unwrap().is_none());

  let recorded = s.record_search(new_search("8001015009087")).await.unwrap();
  let found = s.find_by_id_number("8001015009087").await.unwrap().unwrap();
  assert_eq!(found, recorded);
}

// ─── Holidays ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_and_list_holidays() {
  let s = store().await;
  let search = s.record_search(new_search("8001015009087")).await.unwrap();

  let stored = s
    .replace_holidays(search.id, vec![
      holiday(2025, 1, 1, "New Year's Day"),
      holiday(2024, 1, 1, "New Year's Day"),
    ])
    .await
    .unwrap();
  assert_eq!(stored.len(), 2);
  assert!(stored.iter().all(|h| h.id_search_id == search.id));

  let listed = s.holidays_for(search.id).await.unwrap();
  let dates: Vec<_> = listed.iter().map(|h| h.record.date).collect();
  assert_eq!(dates, vec![date(2024, 1, 1), date(2025, 1, 1)]);
  assert_eq!(listed[0].record.kind.as_deref(), Some("National holiday"));
  assert_eq!(
    listed[0].record.description.as_deref(),
    Some("New Year's Day description")
  );
}

#[tokio::test]
async fn replacing_discards_previous_holidays() {
  let s = store().await;
  let search = s.record_search(new_search("8001015009087")).await.unwrap();

  s.replace_holidays(search.id, vec![holiday(2024, 1, 1, "Old")])
    .await
    .unwrap();
  s.replace_holidays(search.id, vec![holiday(2025, 1, 1, "New")])
    .await
    .unwrap();

  let listed = s.holidays_for(search.id).await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].record.name, "New");

  s.replace_holidays(search.id, vec![]).await.unwrap();
  assert!(s.holidays_for(search.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn holidays_are_scoped_to_their_search() {
  let s = store().await;
  let a = s.record_search(new_search("8001015009087")).await.unwrap();
  let b = s.record_search(new_search("0101010000186")).await.unwrap();

  s.replace_holidays(a.id, vec![holiday(2024, 1, 1, "A")]).await.unwrap();
  assert!(s.holidays_for(b.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn replacing_holidays_of_missing_search_fails() {
  let s = store().await;
  let err = s
    .replace_holidays(42, vec![holiday(2024, 1, 1, "Orphan")])
    .await
    .unwrap_err();
  assert!(matches!(err, Error::SearchNotFound(42)));
}
