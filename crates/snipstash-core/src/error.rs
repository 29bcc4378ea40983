//! Error types for `snipstash-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("snippet '{snippet_name}' not found for user '{user_id}'")]
  SnippetNotFound {
    user_id:      String,
    snippet_name: String,
  },
}

impl Error {
  pub fn snippet_not_found(user_id: &str, snippet_name: &str) -> Self {
    Self::SnippetNotFound {
      user_id:      user_id.to_owned(),
      snippet_name: snippet_name.to_owned(),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
