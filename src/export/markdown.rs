use crate::query::{fetch_terms_for_post, PublishedPost};
use crate::transform::{build_document, classify_terms, RenderedDocument};
use anyhow::{Context, Result as AnyhowResult};
use futures::future::join_all;
use log::{error, info};
use sqlx::mysql::MySqlPool;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// Outcome of an export run: how many files were written and which posts failed.
#[derive(Debug)]
pub struct ExportSummary {
  /// Number of documents written to disk.
  pub written: usize,
  /// Posts whose per-post pipeline failed, with the failure reason.
  pub failed: Vec<FailedPost>,
}

impl ExportSummary {
  /// Returns `true` when every post was exported.
  pub fn is_success(&self) -> bool {
    self.failed.is_empty()
  }
}

/// One post that could not be exported.
#[derive(Debug)]
pub struct FailedPost {
  /// Identifier of the post.
  pub id: u64,
  /// Title of the post, for the run summary.
  pub title: String,
  /// Rendered error chain.
  pub reason: String,
}

/// Clears the output directory before a run.
///
/// Removes the directory tree if it exists and recreates it empty. The removal
/// is destructive and non-recoverable; a failure here is fatal so old and new
/// output never mix.
///
/// # Arguments
///
/// * `dir` - The output directory (e.g., "posts").
///
/// # Returns
///
/// * `Ok(())` - The directory exists and is empty.
/// * `Err(anyhow::Error)` - Removal or creation failed.
pub async fn clear_output_dir(dir: &Path) -> AnyhowResult<()> {
  match tokio::fs::remove_dir_all(dir).await {
    Ok(()) => {}
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
    Err(e) => {
      return Err(e).context(format!(
        "Failed to clear output directory {}",
        dir.display()
      ))
    }
  }
  tokio::fs::create_dir_all(dir)
    .await
    .context(format!("Failed to create output directory {}", dir.display()))?;
  info!("Cleared output directory {}", dir.display());
  Ok(())
}

/// Writes one rendered document into the output directory.
///
/// Plain write, no atomic rename and no partial-write protection. If two posts
/// resolve to the same file name the last write wins.
///
/// # Arguments
///
/// * `dir` - The output directory.
/// * `doc` - The rendered document.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path that was written.
/// * `Err(anyhow::Error)` - The write failed (permissions, disk full).
pub async fn write_document(dir: &Path, doc: &RenderedDocument) -> AnyhowResult<PathBuf> {
  let path = dir.join(&doc.file_name);
  tokio::fs::write(&path, &doc.content)
    .await
    .context(format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Runs the per-post pipeline for every post and aggregates the outcome.
///
/// For each post this fetches its terms, classifies them, builds the document,
/// and writes the file. The tasks run concurrently, gated by a semaphore so at
/// most `concurrency` posts are in flight at once; the database pool bounds
/// connections independently. A failing post is logged and recorded in the
/// summary without stopping the rest of the batch. There is no ordering among
/// per-post tasks and no cancellation once they are launched.
///
/// # Arguments
///
/// * `pool` - Open MySQL connection pool, shared across tasks.
/// * `table_prefix` - Validated WordPress table prefix.
/// * `posts` - The full bulk-query result set.
/// * `output_dir` - Cleared output directory.
/// * `concurrency` - Maximum number of posts processed at once.
///
/// # Returns
///
/// An [`ExportSummary`] with the written count and the failed posts.
pub async fn export_posts(
  pool: &MySqlPool,
  table_prefix: &str,
  posts: Vec<PublishedPost>,
  output_dir: &Path,
  concurrency: usize,
) -> ExportSummary {
  let semaphore = Arc::new(Semaphore::new(concurrency));
  let identities: Vec<(u64, String)> = posts.iter().map(|p| (p.id, p.title.clone())).collect();

  let tasks: Vec<JoinHandle<AnyhowResult<()>>> = posts
    .into_iter()
    .map(|post| {
      let pool = pool.clone();
      let prefix = table_prefix.to_string();
      let output_dir = output_dir.to_path_buf();
      let semaphore = Arc::clone(&semaphore);

      let permit = semaphore.acquire_owned();
      tokio::spawn(async move {
        let _permit = permit.await.context("Failed to acquire semaphore")?;
        export_single_post(&pool, &prefix, &post, &output_dir).await
      })
    })
    .collect();

  let results = join_all(tasks).await;
  let mut written = 0;
  let mut failed = Vec::new();

  for ((id, title), result) in identities.into_iter().zip(results) {
    match result {
      Ok(Ok(())) => written += 1,
      Ok(Err(e)) => {
        error!("Failed to export post {} ({}): {:?}", id, title, e);
        failed.push(FailedPost {
          id,
          title,
          reason: format!("{:#}", e),
        });
      }
      Err(e) => {
        error!("Export task for post {} ({}) panicked: {:?}", id, title, e);
        failed.push(FailedPost {
          id,
          title,
          reason: e.to_string(),
        });
      }
    }
  }

  info!(
    "Exported {} post(s) successfully, {} failure(s)",
    written,
    failed.len()
  );
  ExportSummary { written, failed }
}

/// Exports a single post: term fetch, classify, build, write.
async fn export_single_post(
  pool: &MySqlPool,
  table_prefix: &str,
  post: &PublishedPost,
  output_dir: &Path,
) -> AnyhowResult<()> {
  let terms = fetch_terms_for_post(pool, table_prefix, post.id).await?;
  let classification =
    classify_terms(&terms).context(format!("Cannot classify post {}", post.id))?;
  let doc = build_document(post, &classification);
  let path = write_document(output_dir, &doc).await?;
  info!("Wrote {}", path.display());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn doc(name: &str, content: &str) -> RenderedDocument {
    RenderedDocument {
      file_name: name.to_string(),
      content: content.to_string(),
    }
  }

  /// Tests that clearing creates a missing output directory.
  #[tokio::test]
  async fn test_clear_output_dir_creates_missing() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("posts");

    clear_output_dir(&out).await.unwrap();

    assert!(out.is_dir());
  }

  /// Tests that clearing removes prior contents.
  #[tokio::test]
  async fn test_clear_output_dir_removes_previous_run() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("posts");
    clear_output_dir(&out).await.unwrap();
    let stale = out.join("2001-01-01-old.md");
    tokio::fs::write(&stale, "old").await.unwrap();

    clear_output_dir(&out).await.unwrap();

    assert!(out.is_dir());
    assert!(!stale.exists());
  }

  /// Tests that a document lands at the path derived from its file name.
  #[tokio::test]
  async fn test_write_document() {
    let tmp = tempdir().unwrap();
    let written = write_document(tmp.path(), &doc("2023-05-01-hello-world.md", "body"))
      .await
      .unwrap();

    assert_eq!(written, tmp.path().join("2023-05-01-hello-world.md"));
    let content = tokio::fs::read_to_string(&written).await.unwrap();
    assert_eq!(content, "body");
  }

  /// Tests the collision policy: a second write to the same path wins.
  #[tokio::test]
  async fn test_write_document_last_write_wins() {
    let tmp = tempdir().unwrap();
    let name = "2023-05-01-hello-world.md";

    write_document(tmp.path(), &doc(name, "first")).await.unwrap();
    let path = write_document(tmp.path(), &doc(name, "second")).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(content, "second");
  }
}
