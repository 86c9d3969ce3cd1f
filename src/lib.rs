//! WordPress Markdown Export Library
//!
//! This library provides functionality to read published posts from a
//! WordPress database, transform them into Markdown documents with YAML
//! front matter, and emit one file per post for a static-site generator.
//!

pub mod export;
pub mod query;
pub mod transform;
pub mod utils;
