//! Handlers for `/users/{user_id}/snippets` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/users/:user_id/snippets` | Body: [`UpsertBody`]; creates or overwrites |
//! | `GET`    | `/users/:user_id/snippets` | Summaries, ordered by name |
//! | `GET`    | `/users/:user_id/snippets/:name` | 404 if not found |
//! | `DELETE` | `/users/:user_id/snippets/:name` | 404 if not found |
//! | `GET`    | `/users/:user_id/snippets/language/:language` | Case-insensitive substring |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use snipstash_core::{
  snippet::{NewSnippet, Snippet, SnippetSummary},
  store::SnippetStore,
};

use crate::error::ApiError;

// ─── Upsert ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /users/:user_id/snippets`.
#[derive(Debug, Deserialize)]
pub struct UpsertBody {
  pub snippet_name: String,
  pub language:     String,
  pub code_content: String,
}

/// `POST /users/:user_id/snippets` — returns the stored [`Snippet`].
pub async fn upsert<S>(
  State(store): State<Arc<S>>,
  Path(user_id): Path<String>,
  Json(body): Json<UpsertBody>,
) -> Result<Json<Snippet>, ApiError>
where
  S: SnippetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = NewSnippet::new(user_id, body.snippet_name, body.language, body.code_content);
  let snippet = store.upsert_snippet(input).await.map_err(ApiError::store)?;
  Ok(Json(snippet))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/:user_id/snippets/:name`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path((user_id, snippet_name)): Path<(String, String)>,
) -> Result<Json<Snippet>, ApiError>
where
  S: SnippetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let snippet = store
    .get_snippet(&user_id, &snippet_name)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| snipstash_core::Error::snippet_not_found(&user_id, &snippet_name))?;
  Ok(Json(snippet))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users/:user_id/snippets`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Path(user_id): Path<String>,
) -> Result<Json<Vec<SnippetSummary>>, ApiError>
where
  S: SnippetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let summaries = store.list_snippets(&user_id).await.map_err(ApiError::store)?;
  Ok(Json(summaries))
}

// ─── Filter by language ───────────────────────────────────────────────────────

/// `GET /users/:user_id/snippets/language/:language`
pub async fn by_language<S>(
  State(store): State<Arc<S>>,
  Path((user_id, language)): Path<(String, String)>,
) -> Result<Json<Vec<SnippetSummary>>, ApiError>
where
  S: SnippetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let summaries = store
    .snippets_by_language(&user_id, &language)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(summaries))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// Confirmation body returned by a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
  pub message: String,
}

/// `DELETE /users/:user_id/snippets/:name`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path((user_id, snippet_name)): Path<(String, String)>,
) -> Result<Json<Deleted>, ApiError>
where
  S: SnippetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let removed = store
    .delete_snippet(&user_id, &snippet_name)
    .await
    .map_err(ApiError::store)?;

  if !removed {
    return Err(snipstash_core::Error::snippet_not_found(&user_id, &snippet_name).into());
  }

  tracing::info!(%user_id, %snippet_name, "snippet deleted");
  Ok(Json(Deleted {
    message: format!("Snippet '{snippet_name}' deleted successfully"),
  }))
}
