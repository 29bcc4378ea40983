//! The `SnippetStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `snipstash-store-sqlite`).
//! Higher layers (`snipstash-api`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  snippet::{NewSnippet, Snippet, SnippetSummary},
  user::User,
};

/// Abstraction over a snippet store backend.
///
/// Snippets are keyed by `(user_id, snippet_name)`. Every operation is a
/// single read or write against the backend; concurrent writers to the same
/// key resolve last-write-wins.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait SnippetStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the snippet, or overwrite `language` and `code_content` of the
  /// existing one with the same key.
  ///
  /// The owning user is created if it does not exist yet. `created_at` is set
  /// only on first insert; `updated_at` is refreshed on every call.
  fn upsert_snippet(
    &self,
    input: NewSnippet,
  ) -> impl Future<Output = Result<Snippet, Self::Error>> + Send + '_;

  /// Exact-match lookup. Returns `None` if the key is absent.
  fn get_snippet<'a>(
    &'a self,
    user_id: &'a str,
    snippet_name: &'a str,
  ) -> impl Future<Output = Result<Option<Snippet>, Self::Error>> + Send + 'a;

  /// Summaries of every snippet owned by `user_id`, ordered by name.
  /// An unknown user yields an empty list.
  fn list_snippets<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Vec<SnippetSummary>, Self::Error>> + Send + 'a;

  /// Summaries of the user's snippets whose language contains `language`,
  /// compared case-insensitively.
  fn snippets_by_language<'a>(
    &'a self,
    user_id: &'a str,
    language: &'a str,
  ) -> impl Future<Output = Result<Vec<SnippetSummary>, Self::Error>> + Send + 'a;

  /// Remove a snippet. Returns `false` if nothing matched.
  fn delete_snippet<'a>(
    &'a self,
    user_id: &'a str,
    snippet_name: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Retrieve a user record. Returns `None` if no snippet was ever written
  /// for it.
  fn get_user<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;
}
