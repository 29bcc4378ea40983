//! `snipstash` — command-line client for the snipstash server.
//!
//! # Usage
//!
//! ```
//! snipstash --url http://localhost:8000 list john_doe
//! snipstash put john_doe hello_world --language python --file hello.py
//! snipstash demo
//! ```

mod client;
mod demo;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:8000";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "snipstash", version, about = "Client for the snipstash snippet server")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the snipstash server (default: http://localhost:8000).
  #[arg(long, env = "SNIPSTASH_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Show the service banner and version.
  Health,
  /// Create or overwrite a snippet.
  Put {
    user_id:      String,
    snippet_name: String,
    #[arg(short, long)]
    language:     String,
    /// Read the snippet body from this file.
    #[arg(short, long, conflicts_with = "code", required_unless_present = "code")]
    file:         Option<PathBuf>,
    /// Snippet body given inline.
    #[arg(long)]
    code:         Option<String>,
  },
  /// Print one snippet.
  Get { user_id: String, snippet_name: String },
  /// List a user's snippets.
  List { user_id: String },
  /// List a user's snippets whose language contains the given text.
  Lang { user_id: String, language: String },
  /// Delete a snippet.
  Delete { user_id: String, snippet_name: String },
  /// Walk through every endpoint with sample data.
  Demo,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

fn print_json(value: &impl Serialize) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag overrides config file, which overrides the default.
  let base_url = args
    .url
    .filter(|u| !u.is_empty())
    .or_else(|| Some(file_cfg.url).filter(|u| !u.is_empty()))
    .unwrap_or_else(|| DEFAULT_URL.to_owned());

  let client = ApiClient::new(&base_url)?;

  match args.command {
    Command::Health => print_json(&client.health().await?)?,
    Command::Put { user_id, snippet_name, language, file, code } => {
      let code = match (file, code) {
        (Some(path), _) => std::fs::read_to_string(&path)
          .with_context(|| format!("reading snippet file {}", path.display()))?,
        (None, Some(code)) => code,
        (None, None) => return Err(anyhow!("either --file or --code is required")),
      };
      print_json(&client.upsert(&user_id, &snippet_name, &language, &code).await?)?;
    }
    Command::Get { user_id, snippet_name } => {
      let snippet = client
        .get(&user_id, &snippet_name)
        .await?
        .ok_or_else(|| anyhow!("snippet '{snippet_name}' not found for user '{user_id}'"))?;
      print_json(&snippet)?;
    }
    Command::List { user_id } => print_json(&client.list(&user_id).await?)?,
    Command::Lang { user_id, language } => {
      print_json(&client.by_language(&user_id, &language).await?)?;
    }
    Command::Delete { user_id, snippet_name } => {
      let message = client
        .delete(&user_id, &snippet_name)
        .await?
        .ok_or_else(|| anyhow!("snippet '{snippet_name}' not found for user '{user_id}'"))?;
      println!("{message}");
    }
    Command::Demo => demo::run(&client).await?,
  }

  Ok(())
}
