use super::types::{Classification, RenderedDocument};
use crate::query::PublishedPost;
use crate::utils::{author_slug, escape_single_quotes, normalize_body};
use std::fmt::Write;

/// Builds the rendered Markdown document for one post.
///
/// Pure function, no I/O. Derives the short date from the post's GMT publish
/// timestamp, slugs the author display name, escapes single quotes in the
/// title, author, and SEO fields, normalizes the body markup, and emits the
/// front-matter block followed by a blank line and the body.
///
/// The `author` field uses the composed form from the extended source variant:
/// a quoted Markdown link `[Display Name](/autor/<author-slug>/)`. Absent SEO
/// fields are emitted as empty quoted strings rather than omitted.
///
/// # Arguments
///
/// * `post` - The post row from the bulk query.
/// * `classification` - Primary category, term lists, and content type.
///
/// # Returns
///
/// A [`RenderedDocument`] whose file name is `<YYYY-MM-DD>-<slug>.md`,
/// deterministic for a given post.
pub fn build_document(post: &PublishedPost, classification: &Classification) -> RenderedDocument {
    let date_short = post.published_at.format("%Y-%m-%d").to_string();
    let slugged_author = author_slug(&post.author_display_name);

    let title = escape_single_quotes(&post.title);
    let author = escape_single_quotes(&post.author_display_name);
    let seo_description = escape_single_quotes(post.seo_description.as_deref().unwrap_or(""));
    let seo_title = escape_single_quotes(post.seo_title.as_deref().unwrap_or(""));
    let seo_keyword = escape_single_quotes(post.seo_keyword.as_deref().unwrap_or(""));

    let mut front = String::new();
    // Writing to a String cannot fail, so the fmt results are ignored.
    let _ = writeln!(front, "---");
    let _ = writeln!(front, "title: '{}'", title);
    let _ = writeln!(front, "url: {}", post.slug);
    let _ = writeln!(front, "date: {}", date_short);
    let _ = writeln!(front, "author: '[{}](/autor/{}/)'", author, slugged_author);
    let _ = writeln!(front, "category: '{}'", classification.primary_category);
    let _ = writeln!(front, "categories:{}", block_sequence(&classification.categories));
    let _ = writeln!(front, "tags:{}", block_sequence(&classification.tags));
    let _ = writeln!(front, "focus_keyword: '{}'", seo_keyword);
    let _ = writeln!(front, "seo_title: '{}'", seo_title);
    let _ = writeln!(front, "seo_description: '{}'", seo_description);
    let _ = writeln!(front, "draft: false");
    let _ = writeln!(front, "content_type: '{}'", classification.content_type.as_str());
    let _ = writeln!(front, "---");

    let content = format!("{}\n{}", front, normalize_body(&post.body));

    RenderedDocument {
        file_name: format!("{}-{}.md", date_short, post.slug),
        content,
    }
}

/// Renders a YAML block sequence, one `  - name` line per item.
///
/// An empty list renders as nothing, leaving the key alone on its line.
fn block_sequence(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\n  - {}", item))
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::types::ContentType;
    use chrono::NaiveDate;

    fn sample_post() -> PublishedPost {
        PublishedPost {
            id: 42,
            title: "Hello World".to_string(),
            slug: "hello-world".to_string(),
            published_at: NaiveDate::from_ymd_opt(2023, 5, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            body: "<p>Hi</p>".to_string(),
            author_display_name: "Jane Doe".to_string(),
            author_nicename: "jane-doe".to_string(),
            seo_description: None,
            seo_title: None,
            seo_keyword: None,
        }
    }

    fn sample_classification() -> Classification {
        Classification {
            primary_category: "News".to_string(),
            categories: vec!["News".to_string()],
            tags: vec!["Launch".to_string()],
            content_type: ContentType::Article,
        }
    }

    /// Tests the full end-to-end document for a representative post.
    #[test]
    fn test_build_document_end_to_end() {
        let doc = build_document(&sample_post(), &sample_classification());

        assert_eq!(doc.file_name, "2023-05-01-hello-world.md");
        assert!(doc.content.starts_with("---\n"));
        assert!(doc.content.contains("title: 'Hello World'\n"));
        assert!(doc.content.contains("url: hello-world\n"));
        assert!(doc.content.contains("date: 2023-05-01\n"));
        assert!(doc.content.contains("author: '[Jane Doe](/autor/jane-doe/)'\n"));
        assert!(doc.content.contains("category: 'News'\n"));
        assert!(doc.content.contains("categories:\n  - News\n"));
        assert!(doc.content.contains("tags:\n  - Launch\n"));
        assert!(doc.content.contains("focus_keyword: ''\n"));
        assert!(doc.content.contains("seo_title: ''\n"));
        assert!(doc.content.contains("seo_description: ''\n"));
        assert!(doc.content.contains("draft: false\n"));
        assert!(doc.content.contains("content_type: 'article'\n"));
        assert!(doc.content.ends_with("---\n\n<p>Hi</p>"));
    }

    /// Tests single-quote escaping in the title and SEO fields.
    #[test]
    fn test_build_document_escapes_quotes() {
        let mut post = sample_post();
        post.title = "O'Brien's Tips".to_string();
        post.seo_description = Some("Don't miss".to_string());

        let doc = build_document(&post, &sample_classification());

        assert!(doc.content.contains("title: 'O\\'Brien\\'s Tips'"));
        assert!(doc.content.contains("seo_description: 'Don\\'t miss'"));
    }

    /// Tests that the author display name is slugged for the link target.
    #[test]
    fn test_build_document_author_link() {
        let mut post = sample_post();
        post.author_display_name = "Zoë & Bécquer".to_string();

        let doc = build_document(&post, &sample_classification());

        assert!(doc
            .content
            .contains("author: '[Zoë & Bécquer](/autor/zoe-and-becquer/)'"));
    }

    /// Tests that every `alignleft` token in the body is rewritten.
    #[test]
    fn test_build_document_normalizes_body_everywhere() {
        let mut post = sample_post();
        post.body = "alignleft one alignleft two alignleft".to_string();

        let doc = build_document(&post, &sample_classification());

        assert!(!doc.content.contains("alignleft"));
        assert_eq!(doc.content.matches("align-left").count(), 3);
    }

    /// Tests that empty tag lists leave the key alone on its line.
    #[test]
    fn test_build_document_empty_tags() {
        let mut classification = sample_classification();
        classification.tags.clear();

        let doc = build_document(&sample_post(), &classification);

        assert!(doc.content.contains("tags:\nfocus_keyword:"));
    }

    /// Tests that multiple categories each render as a sequence item.
    #[test]
    fn test_build_document_multiple_categories() {
        let mut classification = sample_classification();
        classification.categories.push("Tech".to_string());

        let doc = build_document(&sample_post(), &classification);

        assert!(doc.content.contains("categories:\n  - News\n  - Tech\n"));
    }

    /// Tests that the file path is stable across repeated builds.
    #[test]
    fn test_build_document_deterministic_path() {
        let post = sample_post();
        let classification = sample_classification();

        let first = build_document(&post, &classification);
        let second = build_document(&post, &classification);

        assert_eq!(first.file_name, second.file_name);
        assert_eq!(first.content, second.content);
    }
}
