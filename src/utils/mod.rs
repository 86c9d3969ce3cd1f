//! # Utility Functions for the Export Pipeline
//!
//! This module provides general text helpers used throughout the application:
//! author-slug derivation, quote escaping for front matter, and body-markup
//! normalization.
//!
//! ## Submodules
//!
//! - **text**: Contains the pure string functions shared by the transform stages.

mod text;

pub use text::{author_slug, escape_single_quotes, normalize_body};
