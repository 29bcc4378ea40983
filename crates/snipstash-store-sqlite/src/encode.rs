//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use snipstash_core::snippet::{Snippet, SnippetSummary};

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// Column values of a `snippets` row as read by `rusqlite`.
pub struct RawSnippet {
  pub id:           i64,
  pub user_id:      String,
  pub snippet_name: String,
  pub language:     String,
  pub code_content: String,
  pub created_at:   String,
  pub updated_at:   String,
}

impl RawSnippet {
  /// Column list matching [`RawSnippet::from_row`].
  pub const COLUMNS: &'static str =
    "id, user_id, snippet_name, language, code_content, created_at, updated_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      user_id:      row.get(1)?,
      snippet_name: row.get(2)?,
      language:     row.get(3)?,
      code_content: row.get(4)?,
      created_at:   row.get(5)?,
      updated_at:   row.get(6)?,
    })
  }

  pub fn into_snippet(self) -> Result<Snippet> {
    Ok(Snippet {
      id:           self.id,
      user_id:      self.user_id,
      snippet_name: self.snippet_name,
      language:     self.language,
      code_content: self.code_content,
      created_at:   decode_dt(&self.created_at)?,
      updated_at:   decode_dt(&self.updated_at)?,
    })
  }
}

/// The summary projection of a `snippets` row.
pub struct RawSummary {
  pub snippet_name: String,
  pub language:     String,
  pub updated_at:   String,
}

impl RawSummary {
  pub const COLUMNS: &'static str = "snippet_name, language, updated_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      snippet_name: row.get(0)?,
      language:     row.get(1)?,
      updated_at:   row.get(2)?,
    })
  }

  pub fn into_summary(self) -> Result<SnippetSummary> {
    Ok(SnippetSummary {
      snippet_name: self.snippet_name,
      language:     self.language,
      updated_at:   decode_dt(&self.updated_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dt_roundtrip_keeps_subsecond_precision() {
    let now = Utc::now();
    assert_eq!(decode_dt(&encode_dt(now)).unwrap(), now);
  }

  #[test]
  fn decode_dt_rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
