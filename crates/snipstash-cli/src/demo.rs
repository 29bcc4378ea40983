//! `snipstash demo` — a scripted walk through every endpoint.
//!
//! Runs against a live server and prints each step with its HTTP status.
//! Two users are touched: `john_doe` and `jane_smith`.

use anyhow::{Result, anyhow};
use reqwest::{Method, StatusCode, Url};
use serde_json::{Value, json};

use crate::client::ApiClient;

const USER: &str = "john_doe";
const OTHER_USER: &str = "jane_smith";

struct Seed {
  name:     &'static str,
  language: &'static str,
  code:     &'static str,
}

const SEEDS: &[Seed] = &[
  Seed {
    name:     "hello_world",
    language: "python",
    code:     "def hello():\n    print('Hello, World!')\n\nhello()",
  },
  Seed {
    name:     "fetch_data",
    language: "javascript",
    code:     "async function fetchData(url) {\n    const response = await fetch(url);\n    return response.json();\n}",
  },
  Seed {
    name:     "user_query",
    language: "sql",
    code:     "SELECT u.id, u.name, COUNT(s.id) as snippet_count\nFROM users u\nLEFT JOIN snippets s ON u.id = s.user_id\nGROUP BY u.id, u.name;",
  },
  Seed {
    name:     "fibonacci",
    language: "python",
    code:     "def fibonacci(n):\n    if n <= 1:\n        return n\n    return fibonacci(n-1) + fibonacci(n-2)\n\nprint(fibonacci(10))",
  },
];

/// Format one step: operation, status, and either the response or the error
/// body.
pub fn render(operation: &str, status: StatusCode, body: &Value) -> String {
  let rule = "=".repeat(50);
  let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
  let outcome = if status.is_success() {
    format!("Response: {pretty}")
  } else {
    format!("Error: {pretty}")
  };
  format!(
    "\n{rule}\nOperation: {operation}\nStatus Code: {}\n{outcome}\n{rule}",
    status.as_u16()
  )
}

async fn step(
  client: &ApiClient,
  operation: &str,
  method: Method,
  url: Url,
  body: Option<Value>,
) -> Result<StatusCode> {
  let (status, value) = client.exchange(method, url, body.as_ref()).await?;
  println!("{}", render(operation, status, &value));
  Ok(status)
}

fn snippet_body(name: &str, language: &str, code: &str) -> Value {
  json!({ "snippet_name": name, "language": language, "code_content": code })
}

pub async fn run(client: &ApiClient) -> Result<()> {
  let status = step(client, "Service", Method::GET, client.url(&[]), None).await?;
  if status != StatusCode::OK {
    return Err(anyhow!("server is not responding properly ({status})"));
  }

  for seed in SEEDS {
    step(
      client,
      &format!("Create {} ({})", seed.name, seed.language),
      Method::POST,
      client.snippets_url(USER, &[]),
      Some(snippet_body(seed.name, seed.language, seed.code)),
    )
    .await?;
  }

  step(client, "List all snippets", Method::GET, client.snippets_url(USER, &[]), None).await?;
  step(
    client,
    "Get hello_world",
    Method::GET,
    client.snippets_url(USER, &["hello_world"]),
    None,
  )
  .await?;

  step(
    client,
    "Update hello_world",
    Method::POST,
    client.snippets_url(USER, &[]),
    Some(snippet_body(
      "hello_world",
      "python",
      "def hello(name='World'):\n    print(f'Hello, {name}!')\n\nhello('snipstash')\nhello()",
    )),
  )
  .await?;

  step(
    client,
    "Python snippets",
    Method::GET,
    client.snippets_url(USER, &["language", "python"]),
    None,
  )
  .await?;

  step(
    client,
    "Create hello_java for second user",
    Method::POST,
    client.snippets_url(OTHER_USER, &[]),
    Some(snippet_body(
      "hello_java",
      "java",
      "public class HelloWorld {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, Java!\");\n    }\n}",
    )),
  )
  .await?;
  step(
    client,
    "List second user's snippets",
    Method::GET,
    client.snippets_url(OTHER_USER, &[]),
    None,
  )
  .await?;

  step(
    client,
    "Get nonexistent (expect 404)",
    Method::GET,
    client.snippets_url(USER, &["nonexistent"]),
    None,
  )
  .await?;

  step(
    client,
    "Delete fibonacci",
    Method::DELETE,
    client.snippets_url(USER, &["fibonacci"]),
    None,
  )
  .await?;
  step(client, "List after delete", Method::GET, client.snippets_url(USER, &[]), None).await?;

  println!("\nDemo complete.");
  Ok(())
}
