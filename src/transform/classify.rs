use super::types::{Classification, ContentType};
use crate::query::{PostTerm, Taxonomy};
use anyhow::{anyhow, Result as AnyhowResult};

/// Category names that mark a post as an audio episode.
const PODCAST_CATEGORIES: [&str; 2] = ["Podcast", "Podcasty"];

/// Category name that marks a post as a video.
const VIDEO_CATEGORY: &str = "Wideo";

/// Classifies a post's term sequence into a primary category and content type.
///
/// The terms are partitioned by taxonomy kind; tags are carried through for
/// rendering only and never influence classification. The primary category is
/// the first category term in the sequence as returned by the term join (no
/// explicit sort). The content type is decided in priority order:
///
/// 1. Primary category named `Podcast` or `Podcasty` → [`ContentType::Podcast`].
/// 2. Otherwise, any category named `Wideo` → [`ContentType::Video`].
/// 3. Otherwise → [`ContentType::Article`].
///
/// A post with zero category terms is rejected with a clear error rather than
/// defaulted; the orchestrator isolates the failure to that post.
///
/// # Arguments
///
/// * `terms` - The full term sequence for one post, in query order.
///
/// # Returns
///
/// * `Ok(Classification)` - Primary category, category/tag lists, content type.
/// * `Err(anyhow::Error)` - The post has no category term.
///
/// # Examples
///
/// ```rust
/// use wp_markdown_export::query::{PostTerm, Taxonomy};
/// use wp_markdown_export::transform::{classify_terms, ContentType};
///
/// let terms = vec![PostTerm {
///     post_id: 7,
///     taxonomy: Taxonomy::Category,
///     name: "News".to_string(),
/// }];
/// let classification = classify_terms(&terms).unwrap();
/// assert_eq!(classification.primary_category, "News");
/// assert_eq!(classification.content_type, ContentType::Article);
/// ```
pub fn classify_terms(terms: &[PostTerm]) -> AnyhowResult<Classification> {
    let categories: Vec<String> = terms
        .iter()
        .filter(|t| t.taxonomy == Taxonomy::Category)
        .map(|t| t.name.clone())
        .collect();
    let tags: Vec<String> = terms
        .iter()
        .filter(|t| t.taxonomy == Taxonomy::Tag)
        .map(|t| t.name.clone())
        .collect();

    let primary_category = categories
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("Post has no category term"))?;

    let content_type = if PODCAST_CATEGORIES.contains(&primary_category.as_str()) {
        ContentType::Podcast
    } else if categories.iter().any(|c| c == VIDEO_CATEGORY) {
        ContentType::Video
    } else {
        ContentType::Article
    };

    Ok(Classification {
        primary_category,
        categories,
        tags,
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> PostTerm {
        PostTerm {
            post_id: 1,
            taxonomy: Taxonomy::Category,
            name: name.to_string(),
        }
    }

    fn tag(name: &str) -> PostTerm {
        PostTerm {
            post_id: 1,
            taxonomy: Taxonomy::Tag,
            name: name.to_string(),
        }
    }

    /// Tests that an ordinary category yields an article.
    #[test]
    fn test_classify_article() {
        let terms = vec![category("News"), tag("Launch")];
        let c = classify_terms(&terms).unwrap();
        assert_eq!(c.primary_category, "News");
        assert_eq!(c.content_type, ContentType::Article);
        assert_eq!(c.categories, vec!["News"]);
        assert_eq!(c.tags, vec!["Launch"]);
    }

    /// Tests that both reserved audio names yield a podcast.
    #[test]
    fn test_classify_podcast() {
        for name in ["Podcast", "Podcasty"] {
            let terms = vec![category(name)];
            let c = classify_terms(&terms).unwrap();
            assert_eq!(c.content_type, ContentType::Podcast);
        }
    }

    /// Tests that the video category is recognized in any position.
    #[test]
    fn test_classify_video_any_position() {
        let terms = vec![category("News"), category("Wideo")];
        let c = classify_terms(&terms).unwrap();
        assert_eq!(c.primary_category, "News");
        assert_eq!(c.content_type, ContentType::Video);
    }

    /// Tests that the podcast check takes precedence over the video check.
    #[test]
    fn test_classify_podcast_before_video() {
        let terms = vec![category("Podcast"), category("Wideo")];
        let c = classify_terms(&terms).unwrap();
        assert_eq!(c.content_type, ContentType::Podcast);
    }

    /// Tests that the first category in query order is primary.
    #[test]
    fn test_primary_category_is_first_in_order() {
        let terms = vec![tag("Launch"), category("Second"), category("Third")];
        let c = classify_terms(&terms).unwrap();
        assert_eq!(c.primary_category, "Second");
    }

    /// Tests that a post with no category term is rejected.
    #[test]
    fn test_classify_no_category_fails() {
        let no_terms: Vec<PostTerm> = Vec::new();
        assert!(classify_terms(&no_terms).is_err());

        let only_tags = vec![tag("Launch")];
        let err = classify_terms(&only_tags).unwrap_err();
        assert!(err.to_string().contains("no category"));
    }
}
