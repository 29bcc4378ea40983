//! JSON REST API for Snipstash.
//!
//! Exposes an axum [`Router`] backed by any [`snipstash_core::store::SnippetStore`].
//! Tracing layers and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = snipstash_api::api_router(Arc::new(store));
//! ```

pub mod error;
pub mod snippets;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use snipstash_core::store::SnippetStore;

pub use error::ApiError;

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
  pub message: String,
  pub version: String,
}

/// `GET /`
pub async fn root() -> Json<ServiceInfo> {
  Json(ServiceInfo {
    message: "Code Snippets Manager API".to_owned(),
    version: env!("CARGO_PKG_VERSION").to_owned(),
  })
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SnippetStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(root))
    .route(
      "/users/{user_id}/snippets",
      get(snippets::list::<S>).post(snippets::upsert::<S>),
    )
    .route(
      "/users/{user_id}/snippets/{snippet_name}",
      get(snippets::get_one::<S>).delete(snippets::delete_one::<S>),
    )
    .route(
      "/users/{user_id}/snippets/language/{language}",
      get(snippets::by_language::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
