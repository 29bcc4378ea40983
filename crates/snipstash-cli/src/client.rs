//! Async HTTP client wrapping the snipstash JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Method, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use snipstash_core::snippet::{Snippet, SnippetSummary};

/// Async HTTP client for the snipstash JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: Url,
}

#[derive(Serialize)]
struct UpsertBody<'a> {
  snippet_name: &'a str,
  language:     &'a str,
  code_content: &'a str,
}

impl ApiClient {
  pub fn new(base_url: &str) -> Result<Self> {
    let base_url = Url::parse(base_url)
      .with_context(|| format!("invalid base URL {base_url:?}"))?;
    if base_url.cannot_be_a_base() {
      return Err(anyhow!("base URL {base_url} cannot carry a path"));
    }
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url })
  }

  /// Join percent-encoded `segments` onto the base URL.
  pub fn url(&self, segments: &[&str]) -> Url {
    let mut url = self.base_url.clone();
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    url
  }

  pub fn snippets_url(&self, user_id: &str, rest: &[&str]) -> Url {
    let mut segments = vec!["users", user_id, "snippets"];
    segments.extend_from_slice(rest);
    self.url(&segments)
  }

  async fn decode<T: DeserializeOwned>(resp: reqwest::Response, what: &str) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(anyhow!("{what} → {status}: {body}"));
    }
    resp.json().await.with_context(|| format!("deserialising {what}"))
  }

  /// Send a request and return the status with the body as JSON, whatever the
  /// status. Non-JSON bodies come back as a JSON string.
  pub async fn exchange(
    &self,
    method: Method,
    url: Url,
    body: Option<&Value>,
  ) -> Result<(StatusCode, Value)> {
    let label = format!("{method} {}", url.path());
    let mut req = self.client.request(method, url);
    if let Some(body) = body {
      req = req.json(body);
    }
    let resp = req.send().await.with_context(|| format!("{label} failed"))?;
    let status = resp.status();
    let text = resp
      .text()
      .await
      .with_context(|| format!("reading {label} body"))?;
    let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
    Ok((status, value))
  }

  // ── Service ───────────────────────────────────────────────────────────────

  /// `GET /`
  pub async fn health(&self) -> Result<Value> {
    let resp = self
      .client
      .get(self.url(&[]))
      .send()
      .await
      .context("GET / failed")?;
    Self::decode(resp, "GET /").await
  }

  // ── Snippets ──────────────────────────────────────────────────────────────

  /// `POST /users/:user_id/snippets`
  pub async fn upsert(
    &self,
    user_id: &str,
    snippet_name: &str,
    language: &str,
    code_content: &str,
  ) -> Result<Snippet> {
    tracing::debug!(user_id, snippet_name, "upserting snippet");
    let resp = self
      .client
      .post(self.snippets_url(user_id, &[]))
      .json(&UpsertBody { snippet_name, language, code_content })
      .send()
      .await
      .context("POST /snippets failed")?;
    Self::decode(resp, "POST /snippets").await
  }

  /// `GET /users/:user_id/snippets/:name` — `None` on 404.
  pub async fn get(&self, user_id: &str, snippet_name: &str) -> Result<Option<Snippet>> {
    let resp = self
      .client
      .get(self.snippets_url(user_id, &[snippet_name]))
      .send()
      .await
      .context("GET /snippets/:name failed")?;
    if resp.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    Self::decode(resp, "GET /snippets/:name").await.map(Some)
  }

  /// `GET /users/:user_id/snippets`
  pub async fn list(&self, user_id: &str) -> Result<Vec<SnippetSummary>> {
    let resp = self
      .client
      .get(self.snippets_url(user_id, &[]))
      .send()
      .await
      .context("GET /snippets failed")?;
    Self::decode(resp, "GET /snippets").await
  }

  /// `GET /users/:user_id/snippets/language/:language`
  pub async fn by_language(&self, user_id: &str, language: &str) -> Result<Vec<SnippetSummary>> {
    let resp = self
      .client
      .get(self.snippets_url(user_id, &["language", language]))
      .send()
      .await
      .context("GET /snippets/language failed")?;
    Self::decode(resp, "GET /snippets/language").await
  }

  /// `DELETE /users/:user_id/snippets/:name` — returns the confirmation
  /// message, or `None` on 404.
  pub async fn delete(&self, user_id: &str, snippet_name: &str) -> Result<Option<String>> {
    let resp = self
      .client
      .delete(self.snippets_url(user_id, &[snippet_name]))
      .send()
      .await
      .context("DELETE /snippets/:name failed")?;
    if resp.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    let body: Value = Self::decode(resp, "DELETE /snippets/:name").await?;
    Ok(Some(body["message"].as_str().unwrap_or_default().to_owned()))
  }
}
