use std::fmt::Debug;

/// Coarse content-type label of a post, derived from its category terms.
///
/// This is a closed three-way classification; extending it means widening the
/// reserved-name tables in the classifier, not adding variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// A regular written post.
    Article,
    /// An audio episode, recognized by its reserved category names.
    Podcast,
    /// A video post, recognized by its reserved category name.
    Video,
}

impl ContentType {
    /// Returns the literal emitted into the `content_type` front-matter field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Podcast => "podcast",
            ContentType::Video => "video",
        }
    }
}

/// Result of classifying a post's term sequence.
#[derive(Debug, Clone)]
pub struct Classification {
    /// The first category term in query order.
    pub primary_category: String,
    /// All category term names, in query order.
    pub categories: Vec<String>,
    /// All tag term names, in query order.
    pub tags: Vec<String>,
    /// The derived content-type label.
    pub content_type: ContentType,
}

/// The rendered output artifact for one post.
///
/// Holds the complete file content (front-matter block plus body) and the file
/// name derived deterministically from the post's publish date and slug. Each
/// document corresponds to exactly one post and one output path.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Target file name, `<YYYY-MM-DD>-<slug>.md`.
    pub file_name: String,
    /// Front matter and body, ready to write verbatim.
    pub content: String,
}
