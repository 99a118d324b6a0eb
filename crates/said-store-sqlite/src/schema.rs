//! SQL schema for the search-history store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per distinct identity number.
CREATE TABLE IF NOT EXISTS id_searches (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    id_number     TEXT    NOT NULL UNIQUE CHECK (length(id_number) = 13),
    date_of_birth TEXT    NOT NULL,   -- ISO 8601 date
    gender        TEXT    NOT NULL,   -- 'male' | 'female'
    citizen       INTEGER NOT NULL,   -- 0 | 1
    search_count  INTEGER NOT NULL DEFAULT 1,
    created_at    TEXT    NOT NULL,   -- RFC 3339 UTC
    updated_at    TEXT
);

CREATE TABLE IF NOT EXISTS holidays (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    id_search_id INTEGER NOT NULL REFERENCES id_searches(id) ON DELETE CASCADE,
    name         TEXT    NOT NULL,
    description  TEXT,
    date         TEXT    NOT NULL,    -- ISO 8601 date
    type         TEXT,
    created_at   TEXT    NOT NULL
);

CREATE INDEX IF NOT EXISTS holidays_id_search_idx ON holidays(id_search_id);

PRAGMA user_version = 1;
";
