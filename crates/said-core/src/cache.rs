//! Time-bounded caching of holiday lookups.
//!
//! The cache is an explicit value injected into the component that needs it,
//! not process-wide state. [`CachedSource`] wraps any [`HolidaySource`] and
//! memoises successful fetches under a typed [`HolidayKey`].

use std::{
  collections::HashMap,
  hash::Hash,
  sync::{
    PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
  },
  time::{Duration, Instant},
};

use crate::holiday::{HolidayRecord, HolidaySource};

/// Holiday data changes rarely; a day is long enough to spare the provider
/// and short enough to pick up corrections.
pub const DEFAULT_HOLIDAY_TTL: Duration = Duration::from_secs(24 * 60 * 60);

// ─── Trait ───────────────────────────────────────────────────────────────────

/// A key-value store whose entries expire individually.
pub trait Cache<K, V>: Send + Sync {
  /// The live value under `key`. Expired entries read as absent.
  fn get(&self, key: &K) -> Option<V>;

  /// Store `value` under `key` for `ttl`, replacing any previous entry.
  fn set(&self, key: K, value: V, ttl: Duration);

  fn remove(&self, key: &K);

  fn clear(&self);
}

// ─── In-memory implementation ────────────────────────────────────────────────

#[derive(Debug)]
struct Entry<V> {
  value:      V,
  expires_at: Instant,
}

impl<V> Entry<V> {
  fn is_expired(&self, now: Instant) -> bool { now >= self.expires_at }
}

/// Hit/miss counters and current size of a [`MemoryCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
  pub hits:   u64,
  pub misses: u64,
  pub size:   usize,
}

/// A [`Cache`] backed by a `HashMap` behind an `RwLock`.
///
/// Expired entries are dropped lazily: on the read that finds them, and in a
/// sweep on every write. Size is bounded by the number of live keys.
#[derive(Debug)]
pub struct MemoryCache<K, V> {
  entries: RwLock<HashMap<K, Entry<V>>>,
  hits:    AtomicU64,
  misses:  AtomicU64,
}

impl<K, V> Default for MemoryCache<K, V> {
  fn default() -> Self {
    Self {
      entries: RwLock::new(HashMap::new()),
      hits:    AtomicU64::new(0),
      misses:  AtomicU64::new(0),
    }
  }
}

impl<K, V> MemoryCache<K, V> {
  pub fn new() -> Self { Self::default() }

  pub fn stats(&self) -> CacheStats {
    CacheStats {
      hits:   self.hits.load(Ordering::Relaxed),
      misses: self.misses.load(Ordering::Relaxed),
      size:   self.entries.read().unwrap_or_else(PoisonError::into_inner).len(),
    }
  }
}

impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
  K: Hash + Eq + Send + Sync,
  V: Clone + Send + Sync,
{
  fn get(&self, key: &K) -> Option<V> {
    let now = Instant::now();
    {
      let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
      match entries.get(key) {
        Some(entry) if !entry.is_expired(now) => {
          self.hits.fetch_add(1, Ordering::Relaxed);
          return Some(entry.value.clone());
        }
        Some(_) => {}
        None => {
          self.misses.fetch_add(1, Ordering::Relaxed);
          return None;
        }
      }
    }

    // Expired: drop it, unless another writer refreshed it in the meantime.
    let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
    if entries.get(key).is_some_and(|e| e.is_expired(now)) {
      entries.remove(key);
    }
    self.misses.fetch_add(1, Ordering::Relaxed);
    None
  }

  fn set(&self, key: K, value: V, ttl: Duration) {
    let now = Instant::now();
    let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
    entries.retain(|_, e| !e.is_expired(now));
    entries.insert(key, Entry { value, expires_at: now + ttl });
  }

  fn remove(&self, key: &K) {
    self
      .entries
      .write()
      .unwrap_or_else(PoisonError::into_inner)
      .remove(key);
  }

  fn clear(&self) {
    self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
  }
}

// ─── Cached holiday source ───────────────────────────────────────────────────

/// Cache key for one provider fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HolidayKey {
  pub year:    i32,
  pub country: String,
}

impl HolidayKey {
  pub fn new(year: i32, country: &str) -> Self {
    Self { year, country: country.to_ascii_uppercase() }
  }
}

pub type HolidayCache = MemoryCache<HolidayKey, Vec<HolidayRecord>>;

/// A [`HolidaySource`] that answers repeat fetches from a cache.
///
/// Only successful fetches are cached; a failure is returned as-is and the
/// next call tries the provider again.
#[derive(Debug)]
pub struct CachedSource<S, C = HolidayCache> {
  inner: S,
  cache: C,
  ttl:   Duration,
}

impl<S> CachedSource<S> {
  pub fn new(inner: S, ttl: Duration) -> Self {
    Self::with_cache(inner, HolidayCache::new(), ttl)
  }
}

impl<S, C> CachedSource<S, C> {
  pub fn with_cache(inner: S, cache: C, ttl: Duration) -> Self {
    Self { inner, cache, ttl }
  }

  pub fn cache(&self) -> &C { &self.cache }

  pub fn inner(&self) -> &S { &self.inner }
}

impl<S, C> HolidaySource for CachedSource<S, C>
where
  S: HolidaySource,
  C: Cache<HolidayKey, Vec<HolidayRecord>>,
{
  type Error = S::Error;

  async fn fetch_holidays(
    &self,
    year: i32,
    country: &str,
  ) -> Result<Vec<HolidayRecord>, S::Error> {
    let key = HolidayKey::new(year, country);
    if let Some(holidays) = self.cache.get(&key) {
      tracing::debug!(year, country = %key.country, "holiday cache hit");
      return Ok(holidays);
    }

    tracing::debug!(year, country = %key.country, "holiday cache miss");
    let holidays = self.inner.fetch_holidays(year, country).await?;
    self.cache.set(key, holidays.clone(), self.ttl);
    Ok(holidays)
  }
}
