use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derives a URL-safe slug from an author display name.
///
/// The derivation applies, in order: NFKD decomposition with combining marks
/// stripped (reducing accented characters to their base Latin letters),
/// lower-casing, whitespace replaced by hyphens, `&` replaced by the literal
/// `-and-`, removal of every character outside `[a-z0-9-]`, collapsing of
/// repeated hyphens, and trimming of leading/trailing hyphens. The function is
/// deterministic, idempotent, and has no locale dependency beyond Unicode
/// normalization.
///
/// # Arguments
///
/// * `name` - The author display name (e.g., "Zoë & Bécquer").
///
/// # Returns
///
/// A slug string containing only `[a-z0-9-]`.
///
/// # Examples
///
/// ```rust
/// use wp_markdown_export::utils::author_slug;
///
/// assert_eq!(author_slug("Zoë & Bécquer"), "zoe-and-becquer");
/// assert_eq!(author_slug("Jane Doe"), "jane-doe");
/// ```
pub fn author_slug(name: &str) -> String {
    let folded: String = name.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    let mut raw = String::with_capacity(folded.len());
    for c in folded.to_lowercase().chars() {
        if c.is_whitespace() {
            raw.push('-');
        } else if c == '&' {
            raw.push_str("-and-");
        } else {
            raw.push(c);
        }
    }

    let mut slug = String::with_capacity(raw.len());
    let mut prev_hyphen = false;
    for c in raw.chars() {
        match c {
            'a'..='z' | '0'..='9' => {
                slug.push(c);
                prev_hyphen = false;
            }
            '-' => {
                if !prev_hyphen {
                    slug.push('-');
                }
                prev_hyphen = true;
            }
            _ => {}
        }
    }

    slug.trim_matches('-').to_string()
}

/// Escapes single-quote characters for embedding in a quoted YAML scalar.
///
/// Each `'` is prefixed with a backslash, so a title like `O'Brien's Tips`
/// becomes `O\'Brien\'s Tips`. Applied to titles, author-derived text, and
/// SEO fields before they are rendered into front matter.
///
/// # Arguments
///
/// * `text` - The raw text that will be placed inside a quoted scalar.
///
/// # Returns
///
/// The text with every single quote escaped.
pub fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "\\'")
}

/// Normalizes known markup artifacts in a post body.
///
/// Replaces every occurrence of the literal token `alignleft` with
/// `align-left`. This is the only substitution in the table; nothing else in
/// the body is touched.
///
/// # Arguments
///
/// * `body` - The raw post body, possibly containing embedded markup.
///
/// # Returns
///
/// The body with all artifact tokens rewritten.
pub fn normalize_body(body: &str) -> String {
    body.replace("alignleft", "align-left")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests accent folding and the `&` replacement in slug derivation.
    #[test]
    fn test_author_slug_accents_and_ampersand() {
        assert_eq!(author_slug("Zoë & Bécquer"), "zoe-and-becquer");
    }

    /// Tests that slug derivation is idempotent.
    #[test]
    fn test_author_slug_idempotent() {
        let once = author_slug("Zoë & Bécquer");
        let twice = author_slug(&once);
        assert_eq!(once, twice);

        let once = author_slug("  Łukasz   Żółty!  ");
        assert_eq!(once, author_slug(&once));
    }

    /// Tests whitespace collapsing and trimming of leading/trailing hyphens.
    #[test]
    fn test_author_slug_whitespace_and_trim() {
        assert_eq!(author_slug("  Jane   Doe  "), "jane-doe");
        assert_eq!(author_slug("---"), "");
        assert_eq!(author_slug(""), "");
    }

    /// Tests that characters outside `[a-z0-9-]` are stripped.
    #[test]
    fn test_author_slug_strips_punctuation() {
        assert_eq!(author_slug("J. R. R. Tolkien"), "j-r-r-tolkien");
        assert_eq!(author_slug("O'Brien"), "obrien");
    }

    /// Tests single-quote escaping in titles.
    #[test]
    fn test_escape_single_quotes() {
        assert_eq!(escape_single_quotes("O'Brien's Tips"), "O\\'Brien\\'s Tips");
        assert_eq!(escape_single_quotes("no quotes"), "no quotes");
    }

    /// Tests that the body substitution applies to every occurrence.
    #[test]
    fn test_normalize_body_all_occurrences() {
        let body = "<img class=\"alignleft\"> text <img class=\"alignleft\">";
        assert_eq!(
            normalize_body(body),
            "<img class=\"align-left\"> text <img class=\"align-left\">"
        );
    }
}
