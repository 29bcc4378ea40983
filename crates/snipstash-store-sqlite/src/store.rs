//! [`SqliteStore`] — the SQLite implementation of [`SnippetStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use snipstash_core::{
  snippet::{language_matches, NewSnippet, Snippet, SnippetSummary},
  store::SnippetStore,
  user::User,
};

use crate::{
  encode::{encode_dt, RawSnippet, RawSummary},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A snippet store backed by a single SQLite file.
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

  /// Summaries for every snippet owned by `user_id`, ordered by name.
  async fn summaries(&self, user_id: &str) -> Result<Vec<SnippetSummary>> {
    let user_id = user_id.to_owned();

    let raws: Vec<RawSummary> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM snippets WHERE user_id = ?1 ORDER BY snippet_name",
          RawSummary::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![user_id], RawSummary::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSummary::into_summary).collect()
  }
}

// ─── SnippetStore impl ───────────────────────────────────────────────────────

impl SnippetStore for SqliteStore {
  type Error = Error;

  async fn upsert_snippet(&self, input: NewSnippet) -> Result<Snippet> {
    tracing::debug!(
      user_id = %input.user_id,
      snippet_name = %input.snippet_name,
      "upserting snippet"
    );

    let raw: RawSnippet = self
      .conn
      .call(move |conn| {
        // Stamped on the connection thread so timestamps follow write order.
        let now_str = encode_dt(Utc::now());
        let tx = conn.transaction()?;

        // Get-or-create the owner in one statement.
        tx.execute(
          "INSERT INTO users (user_id) VALUES (?1)
           ON CONFLICT (user_id) DO NOTHING",
          rusqlite::params![input.user_id],
        )?;

        let sql = format!(
          "INSERT INTO snippets (
             user_id, snippet_name, language, code_content, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?5)
           ON CONFLICT (user_id, snippet_name) DO UPDATE SET
             language     = excluded.language,
             code_content = excluded.code_content,
             updated_at   = excluded.updated_at
           RETURNING {}",
          RawSnippet::COLUMNS
        );
        let raw = tx.query_row(
          &sql,
          rusqlite::params![
            input.user_id,
            input.snippet_name,
            input.language,
            input.code_content,
            now_str,
          ],
          RawSnippet::from_row,
        )?;

        tx.commit()?;
        Ok(raw)
      })
      .await?;

    raw.into_snippet()
  }

  async fn get_snippet(&self, user_id: &str, snippet_name: &str) -> Result<Option<Snippet>> {
    let user_id      = user_id.to_owned();
    let snippet_name = snippet_name.to_owned();

    let raw: Option<RawSnippet> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM snippets WHERE user_id = ?1 AND snippet_name = ?2",
          RawSnippet::COLUMNS
        );
        Ok(
          conn
            .query_row(
              &sql,
              rusqlite::params![user_id, snippet_name],
              RawSnippet::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSnippet::into_snippet).transpose()
  }

  async fn list_snippets(&self, user_id: &str) -> Result<Vec<SnippetSummary>> {
    self.summaries(user_id).await
  }

  async fn snippets_by_language(
    &self,
    user_id:  &str,
    language: &str,
  ) -> Result<Vec<SnippetSummary>> {
    // SQLite's LIKE and lower() only fold ASCII, so the match runs here.
    let mut summaries = self.summaries(user_id).await?;
    summaries.retain(|s| language_matches(&s.language, language));
    Ok(summaries)
  }

  async fn delete_snippet(&self, user_id: &str, snippet_name: &str) -> Result<bool> {
    let user_id      = user_id.to_owned();
    let snippet_name = snippet_name.to_owned();

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM snippets WHERE user_id = ?1 AND snippet_name = ?2",
          rusqlite::params![user_id, snippet_name],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }

  async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
    let user_id = user_id.to_owned();

    let found: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT user_id FROM users WHERE user_id = ?1",
              rusqlite::params![user_id],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(found.map(|user_id| User { user_id }))
  }
}
