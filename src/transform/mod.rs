//! # Transforming Posts into Renderable Markdown Documents
//!
//! This module holds the pure per-post transformation: classifying a post's
//! taxonomy terms into a primary category and a coarse content-type label, and
//! assembling the YAML front-matter block plus normalized body into a
//! [`RenderedDocument`] ready for the file emitter. No stage here performs I/O.
//!
//! ## Usage
//!
//! Feed the term sequence from the query layer to `classify_terms`, then pass
//! the post and the resulting [`Classification`] to `build_document`.
//!
//! ## Submodules
//!
//! - **classify**: Contains the term partitioning and content-type rules.
//! - **front_matter**: Contains the front-matter rendering.
//! - **types**: Defines the classification and document data structures.

mod classify;
mod front_matter;
mod types;

pub use classify::classify_terms;
pub use front_matter::build_document;
pub use types::{Classification, ContentType, RenderedDocument};
