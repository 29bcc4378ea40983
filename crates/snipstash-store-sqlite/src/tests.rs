//! Integration tests for `SqliteStore` against an in-memory database.

use snipstash_core::{snippet::NewSnippet, store::SnippetStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn snippet(user: &str, name: &str, language: &str, code: &str) -> NewSnippet {
  NewSnippet::new(user, name, language, code)
}

// ─── Upsert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_new_snippet_creates_one_row() {
  let s = store().await;

  let created = s
    .upsert_snippet(snippet("a", "hello_world", "python", "print(1)"))
    .await
    .unwrap();
  assert_eq!(created.user_id, "a");
  assert_eq!(created.snippet_name, "hello_world");
  assert_eq!(created.created_at, created.updated_at);

  let all = s.list_snippets("a").await.unwrap();
  assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn upsert_existing_snippet_updates_in_place() {
  let s = store().await;

  let first = s
    .upsert_snippet(snippet("a", "hello_world", "python", "print(1)"))
    .await
    .unwrap();
  let second = s
    .upsert_snippet(snippet("a", "hello_world", "python3", "print(2)"))
    .await
    .unwrap();

  assert_eq!(second.id, first.id);
  assert_eq!(second.created_at, first.created_at);
  assert!(second.updated_at >= first.updated_at);
  assert_eq!(second.language, "python3");
  assert_eq!(second.code_content, "print(2)");

  let all = s.list_snippets("a").await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].language, "python3");
}

#[tokio::test]
async fn updated_at_never_decreases_over_repeated_upserts() {
  let s = store().await;

  let mut last = s
    .upsert_snippet(snippet("a", "counter", "rust", "0"))
    .await
    .unwrap();
  let created_at = last.created_at;

  for i in 1..5 {
    let next = s
      .upsert_snippet(snippet("a", "counter", "rust", &i.to_string()))
      .await
      .unwrap();
    assert!(next.updated_at >= last.updated_at);
    assert_eq!(next.created_at, created_at);
    last = next;
  }
}

#[tokio::test]
async fn whitespace_and_empty_names_are_ordinary_keys() {
  let s = store().await;
  s.upsert_snippet(snippet("a", " ", "", "space"))
    .await
    .unwrap();
  s.upsert_snippet(snippet("a", "", "", "empty"))
    .await
    .unwrap();

  assert_eq!(s.get_snippet("a", " ").await.unwrap().unwrap().code_content, "space");
  assert_eq!(s.get_snippet("a", "").await.unwrap().unwrap().code_content, "empty");
  assert_eq!(s.list_snippets("a").await.unwrap().len(), 2);
}

#[tokio::test]
async fn concurrent_upserts_keep_timestamps_ordered() {
  let s = store().await;
  let mut set = tokio::task::JoinSet::new();

  for i in 0..16 {
    let s = s.clone();
    set.spawn(async move {
      s.upsert_snippet(snippet("a", "contended", "rust", &i.to_string()))
        .await
    });
  }

  let mut written = Vec::new();
  while let Some(joined) = set.join_next().await {
    written.push(joined.unwrap().unwrap());
  }

  // Every write hit the same row and saw the same creation time.
  let created_at = written[0].created_at;
  assert!(written.iter().all(|w| w.id == written[0].id));
  assert!(written.iter().all(|w| w.created_at == created_at));
  assert!(written.iter().all(|w| w.updated_at >= w.created_at));

  let last_write = written.iter().map(|w| w.updated_at).max().unwrap();
  let stored = s.get_snippet("a", "contended").await.unwrap().unwrap();
  assert_eq!(stored.created_at, created_at);
  assert_eq!(stored.updated_at, last_write);
  assert_eq!(s.list_snippets("a").await.unwrap().len(), 1);
}

#[tokio::test]
async fn same_name_under_different_users_is_independent() {
  let s = store().await;
  s.upsert_snippet(snippet("a", "shared", "python", "a"))
    .await
    .unwrap();
  s.upsert_snippet(snippet("b", "shared", "java", "b"))
    .await
    .unwrap();

  let a = s.get_snippet("a", "shared").await.unwrap().unwrap();
  let b = s.get_snippet("b", "shared").await.unwrap().unwrap();
  assert_eq!(a.code_content, "a");
  assert_eq!(b.code_content, "b");
}

// ─── Get ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_identical_content() {
  let s = store().await;
  let code = "def hello():\n    print('Hello, World!')\n\n\ttab\u{1F600}";

  s.upsert_snippet(snippet("a", "hello", "Python", code))
    .await
    .unwrap();

  let fetched = s.get_snippet("a", "hello").await.unwrap().unwrap();
  assert_eq!(fetched.code_content, code);
  assert_eq!(fetched.language, "Python");
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_snippet("a", "nope").await.unwrap().is_none());
}

// ─── List & filter ───────────────────────────────────────────────────────────

#[tokio::test]
async fn list_for_unknown_user_is_empty() {
  let s = store().await;
  assert!(s.list_snippets("ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_scoped_and_ordered_by_name() {
  let s = store().await;
  s.upsert_snippet(snippet("a", "zeta", "sql", "SELECT 1"))
    .await
    .unwrap();
  s.upsert_snippet(snippet("a", "alpha", "python", "pass"))
    .await
    .unwrap();
  s.upsert_snippet(snippet("b", "beta", "java", "class B {}"))
    .await
    .unwrap();

  let names: Vec<_> = s
    .list_snippets("a")
    .await
    .unwrap()
    .into_iter()
    .map(|s| s.snippet_name)
    .collect();
  assert_eq!(names, ["alpha", "zeta"]);
}

#[tokio::test]
async fn language_filter_is_case_insensitive_substring() {
  let s = store().await;
  s.upsert_snippet(snippet("a", "one", "Python", "1"))
    .await
    .unwrap();
  s.upsert_snippet(snippet("a", "two", "python3", "2"))
    .await
    .unwrap();
  s.upsert_snippet(snippet("a", "three", "javascript", "3"))
    .await
    .unwrap();
  s.upsert_snippet(snippet("b", "four", "python", "4"))
    .await
    .unwrap();

  let hits = s.snippets_by_language("a", "python").await.unwrap();
  let names: Vec<_> = hits.iter().map(|s| s.snippet_name.as_str()).collect();
  assert_eq!(names, ["one", "two"]);

  let none = s.snippets_by_language("a", "rust").await.unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn language_filter_treats_wildcards_literally() {
  let s = store().await;
  s.upsert_snippet(snippet("a", "one", "python", "1"))
    .await
    .unwrap();

  assert!(s.snippets_by_language("a", "%").await.unwrap().is_empty());
  assert!(s.snippets_by_language("a", "py_hon").await.unwrap().is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_returns_none() {
  let s = store().await;
  s.upsert_snippet(snippet("a", "hello_world", "python", "print(1)"))
    .await
    .unwrap();

  assert!(s.delete_snippet("a", "hello_world").await.unwrap());
  assert!(s.get_snippet("a", "hello_world").await.unwrap().is_none());
  assert!(s.list_snippets("a").await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_returns_false() {
  let s = store().await;
  assert!(!s.delete_snippet("a", "nope").await.unwrap());
}

#[tokio::test]
async fn recreate_after_delete_gets_fresh_created_at() {
  let s = store().await;
  let first = s
    .upsert_snippet(snippet("a", "x", "go", "1"))
    .await
    .unwrap();
  s.delete_snippet("a", "x").await.unwrap();
  let again = s
    .upsert_snippet(snippet("a", "x", "go", "2"))
    .await
    .unwrap();

  assert_ne!(again.id, first.id);
  assert!(again.created_at >= first.created_at);
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn user_created_implicitly_and_kept_after_delete() {
  let s = store().await;
  assert!(s.get_user("a").await.unwrap().is_none());

  s.upsert_snippet(snippet("a", "only", "c", "int main;"))
    .await
    .unwrap();
  assert_eq!(s.get_user("a").await.unwrap().unwrap().user_id, "a");

  s.delete_snippet("a", "only").await.unwrap();
  assert!(s.get_user("a").await.unwrap().is_some());
}

#[tokio::test]
async fn reads_do_not_create_users() {
  let s = store().await;
  s.list_snippets("reader").await.unwrap();
  s.get_snippet("reader", "x").await.unwrap();
  assert!(s.get_user("reader").await.unwrap().is_none());
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn file_store_survives_reopen() {
  let path = std::env::temp_dir().join(format!(
    "snipstash-reopen-{}-{}.db",
    std::process::id(),
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
  ));

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.upsert_snippet(snippet("a", "kept", "rust", "fn main() {}"))
      .await
      .unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  let kept = s.get_snippet("a", "kept").await.unwrap().unwrap();
  assert_eq!(kept.code_content, "fn main() {}");

  drop(s);
  let _ = std::fs::remove_file(&path);
}
