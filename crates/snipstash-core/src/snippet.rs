//! Snippets — named blocks of source text owned by a user.
//!
//! A snippet is addressed by the pair `(user_id, snippet_name)`. Writing to an
//! existing pair overwrites the language and content in place; there is no
//! history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Input ───────────────────────────────────────────────────────────────────

/// Input to [`SnippetStore::upsert_snippet`](crate::store::SnippetStore::upsert_snippet).
///
/// Timestamps and the surrogate id are assigned by the store. Any string is a
/// valid key, including empty and whitespace-only names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
  pub user_id:      String,
  pub snippet_name: String,
  /// Free-form label such as `python` or `Rust 2024`; never validated.
  pub language:     String,
  pub code_content: String,
}

impl NewSnippet {
  pub fn new(
    user_id: impl Into<String>,
    snippet_name: impl Into<String>,
    language: impl Into<String>,
    code_content: impl Into<String>,
  ) -> Self {
    Self {
      user_id:      user_id.into(),
      snippet_name: snippet_name.into(),
      language:     language.into(),
      code_content: code_content.into(),
    }
  }
}

// ─── Stored record ───────────────────────────────────────────────────────────

/// A persisted snippet.
///
/// The surrogate `id` and owning `user_id` are internal and are not part of
/// the serialised form; the owner is always implied by the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
  #[serde(skip)]
  pub id:           i64,
  #[serde(skip)]
  pub user_id:      String,
  pub snippet_name: String,
  pub language:     String,
  pub code_content: String,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   DateTime<Utc>,
}

/// The listing projection of a snippet, without its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetSummary {
  pub snippet_name: String,
  pub language:     String,
  pub updated_at:   DateTime<Utc>,
}

/// Case-insensitive substring match used by language filtering.
pub fn language_matches(language: &str, needle: &str) -> bool {
  language.to_lowercase().contains(&needle.to_lowercase())
}
