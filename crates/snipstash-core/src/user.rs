//! User — the owner key that scopes snippets.

use serde::{Deserialize, Serialize};

/// A user record. Created implicitly by the first snippet write that names
/// it, and never removed, even once all of its snippets are deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub user_id: String,
}
