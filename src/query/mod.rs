//! # Reading Posts and Terms from a WordPress Database
//!
//! This module provides read-only access to the source WordPress MySQL
//! database. It issues two fixed queries: a bulk query that loads every
//! publishable post together with its author and Yoast SEO metadata, and a
//! per-post query that loads the taxonomy terms (categories and tags) for one
//! post identifier.
//!
//! All connection state lives in an explicit [`DbConfig`]; the table prefix is
//! validated there because it is interpolated into identifier positions of the
//! query text. Every value parameter is bound, never interpolated.
//!
//! ## Usage
//!
//! The entry points are `fetch_published_posts` for the bulk query and
//! `fetch_terms_for_post` for the per-post term join.
//!
//! ## Submodules
//!
//! - **wordpress**: Contains the query text and row mapping.
//! - **types**: Defines the configuration and row data structures.

mod types;
mod wordpress;

pub use types::{DbConfig, PostTerm, PublishedPost, Taxonomy};
pub use wordpress::{fetch_published_posts, fetch_terms_for_post};
