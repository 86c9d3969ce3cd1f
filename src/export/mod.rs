//! Tools for emitting rendered posts as Markdown files on disk.
//!
//! This module owns the output directory: it clears prior contents before a
//! run, writes one `<date>-<slug>.md` file per post, and drives the per-post
//! pipeline (term fetch, classify, build, write) with bounded concurrency.
//! Failures of individual posts are collected into a run summary instead of
//! aborting the batch.
//!
//! ## Usage
//!
//! Call [`clear_output_dir`] before the bulk query, then [`export_posts`] with
//! the full post list; inspect the returned [`ExportSummary`] for failures.
//!
//! ## Submodules
//!
//! - **markdown**: Contains the file emitter and the fan-out loop.

mod markdown;

pub use markdown::{clear_output_dir, export_posts, write_document, ExportSummary, FailedPost};
