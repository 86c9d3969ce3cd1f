//! WordPress Markdown Export: One-Shot Post Export to Static-Site Markdown
//!
//! This application reads every published post from a WordPress MySQL database,
//! transforms each one into a Markdown document with YAML front matter, and
//! writes the documents into an output directory for consumption by a
//! static-site generator. It is a batch tool: connect, query, transform, write,
//! exit.
//!
//! ## Purpose
//! The goal is a faithful content export: posts with their author, category,
//! tag, and SEO metadata become standalone `<date>-<slug>.md` files, classified
//! as article, podcast, or video from their category terms.
//!
//! ## Design Overview
//! - **Querying**: Loads posts and per-post taxonomy terms using the `query` module.
//! - **Transforming**: Classifies terms and builds front matter using the `transform` module.
//! - **Exporting**: Clears the output directory and writes files via the `export` module.
//!
//! ## Dependencies
//! - **`sqlx`**: For asynchronous MySQL access with a bounded connection pool.
//! - **`tokio`**: For the asynchronous runtime driving queries and file writes.
//! - **`log` and `env_logger`**: For structured logging instead of `println!`.
//! - **`clap`**: For parsing command-line arguments to configure the application.
//! - **`dotenv`**: For loading environment variables from a `.env` file.
//! - **`chrono`**: Handles the publish-date handling for file names and front matter.
//! - **`unicode-normalization`**: Folds accented author names for URL-safe slugs.
//!
//! ## Usage
//! 1. Ensure the WordPress database is reachable (read-only access suffices).
//! 2. Configure the application using either a `.env` file or command-line arguments:
//!    - **Using a `.env` file**: Create a `.env` file in the project root with:
//!      ```env
//!      DB_HOST=localhost
//!      DB_PORT=3306
//!      DB_USER=root
//!      DB_PASSWORD=secret
//!      DB_DATABASE=wordpress
//!      DB_TABLE_PREFIX=wp_
//!      OUTPUT_DIR=posts
//!      ```
//!    - **Using CLI arguments**: Pass arguments when running the application:
//!    ```sh
//!    cargo run -- --db-host localhost --db-user root --db-password secret --db-database wordpress
//!    ```
//! 3. Logs are controlled by the `RUST_LOG` environment variable:
//!    ```sh
//!    export RUST_LOG=info
//!    cargo run
//!    ```
//!
//! ## Notes
//! - The output directory is fully purged before each run.
//! - The process exits zero only when every post was exported; any per-post
//!   failure is logged, summarized, and turns the exit code non-zero.

use anyhow::{bail, Context, Result as AnyhowResult};
use clap::Parser;
use dotenv::dotenv;
use log::{error, info};
use std::path::PathBuf;
use wp_markdown_export::export::{clear_output_dir, export_posts};
use wp_markdown_export::query::{fetch_published_posts, DbConfig};

/// Command-line arguments for configuring the WordPress Markdown export.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Database host.
  #[clap(long, env = "DB_HOST", default_value = "localhost")]
  db_host: String,

  /// Database port.
  #[clap(long, env = "DB_PORT", default_value_t = 3306)]
  db_port: u16,

  /// Database user.
  #[clap(long, env = "DB_USER", default_value = "root")]
  db_user: String,

  /// Database password.
  #[clap(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
  db_password: String,

  /// Database name.
  #[clap(long, env = "DB_DATABASE", default_value = "wordpress")]
  db_database: String,

  /// WordPress table-name prefix, restricted to `[A-Za-z0-9_]`.
  #[clap(long, env = "DB_TABLE_PREFIX", default_value = "wp_")]
  table_prefix: String,

  /// Directory the Markdown files are written into (purged before the run).
  #[clap(long, env = "OUTPUT_DIR", default_value = "posts")]
  output_dir: PathBuf,

  /// Maximum number of posts processed concurrently.
  #[clap(long, env = "CONCURRENCY", default_value_t = 8)]
  concurrency: usize,
}

/// Orchestrates the export: clear output, bulk query, per-post pipeline, summary.
///
/// This function:
/// 1. Loads configuration from environment variables or command-line arguments.
/// 2. Clears the output directory (fatal if that fails).
/// 3. Runs the bulk published-posts query (fatal if that fails).
/// 4. Exports every post with bounded concurrency, isolating per-post failures.
/// 5. Logs a final summary and fails if any post could not be exported.
///
/// # Returns
/// - `Ok(())` if every post was written successfully.
/// - `Err(anyhow::Error)` if a fatal step or any per-post pipeline failed,
///   yielding a non-zero exit code.
#[tokio::main]
async fn main() -> AnyhowResult<()> {
  // Initialize logging
  env_logger::init();

  // Load environment variables from .env file (if present)
  dotenv().ok();

  // Parse command-line arguments
  let args = Args::parse();
  info!(
    "Starting WordPress Markdown export to {}",
    args.output_dir.display()
  );

  let config = DbConfig::new(
    args.db_host,
    args.db_port,
    args.db_user,
    args.db_password,
    args.db_database,
    args.table_prefix,
  )?;

  // The output directory must be empty before any write begins.
  clear_output_dir(&args.output_dir).await?;

  // Pool sizing also caps in-flight database connections during fan-out.
  let pool = config
    .connect(args.concurrency as u32)
    .await
    .context("Failed to connect to the WordPress database")?;

  let posts = fetch_published_posts(&pool, &config.table_prefix).await?;
  if posts.is_empty() {
    info!("No published posts found; nothing to export");
    return Ok(());
  }

  let summary = export_posts(
    &pool,
    &config.table_prefix,
    posts,
    &args.output_dir,
    args.concurrency,
  )
  .await;

  if !summary.is_success() {
    for failure in &summary.failed {
      error!(
        "Post {} ({}) was not exported: {}",
        failure.id, failure.title, failure.reason
      );
    }
    bail!(
      "Export finished with {} written and {} failed post(s)",
      summary.written,
      summary.failed.len()
    );
  }

  info!("Export finished: {} post(s) written", summary.written);
  Ok(())
}
