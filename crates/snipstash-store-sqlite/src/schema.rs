//! SQL schema for the Snipstash SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Rows are inserted on first write for a user and never updated or deleted.
CREATE TABLE IF NOT EXISTS users (
    user_id TEXT PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS snippets (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id       TEXT NOT NULL REFERENCES users(user_id),
    snippet_name  TEXT NOT NULL,
    language      TEXT NOT NULL,
    code_content  TEXT NOT NULL,
    created_at    TEXT NOT NULL,   -- ISO 8601 UTC; set on insert only
    updated_at    TEXT NOT NULL,   -- ISO 8601 UTC; refreshed on every write
    UNIQUE (user_id, snippet_name)
);

CREATE INDEX IF NOT EXISTS snippets_user_idx ON snippets(user_id);

PRAGMA user_version = 1;
";
