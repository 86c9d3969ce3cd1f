use super::types::{PostTerm, PublishedPost, Taxonomy};
use anyhow::{Context, Result as AnyhowResult};
use log::{debug, info};
use sqlx::mysql::MySqlPool;
use sqlx::Row;

/// Fetches every publishable post with author and SEO metadata.
///
/// Runs the bulk query: posts filtered server-side to
/// `post_status = 'publish' AND post_type = 'post'`, ordered by publish date
/// descending, LEFT JOINed with the users table for the author's names and
/// with the postmeta table for the three Yoast SEO keys. The whole result set
/// is loaded into memory at once; there is no pagination and no retry.
///
/// # Arguments
///
/// * `pool` - Open MySQL connection pool.
/// * `table_prefix` - Validated WordPress table prefix (e.g., "wp_").
///
/// # Returns
///
/// * `Ok(Vec<PublishedPost>)` - All published posts, most recent first.
/// * `Err(anyhow::Error)` - The query failed (connection or SQL error).
pub async fn fetch_published_posts(
    pool: &MySqlPool,
    table_prefix: &str,
) -> AnyhowResult<Vec<PublishedPost>> {
    let sql = format!(
        "SELECT
            p.ID AS id,
            p.post_title AS title,
            p.post_name AS slug,
            p.post_date_gmt AS published_at,
            p.post_content AS body,
            u.display_name AS author_display_name,
            u.user_nicename AS author_nicename,
            md.meta_value AS seo_description,
            mt.meta_value AS seo_title,
            mk.meta_value AS seo_keyword
        FROM {prefix}posts p
            LEFT JOIN {prefix}users u ON u.ID = p.post_author
            LEFT JOIN {prefix}postmeta md
                ON md.post_id = p.ID AND md.meta_key = '_yoast_wpseo_metadesc'
            LEFT JOIN {prefix}postmeta mt
                ON mt.post_id = p.ID AND mt.meta_key = '_yoast_wpseo_title'
            LEFT JOIN {prefix}postmeta mk
                ON mk.post_id = p.ID AND mk.meta_key = '_yoast_wpseo_focuskw'
        WHERE
            p.post_status = 'publish'
            AND p.post_type = 'post'
        ORDER BY p.post_date DESC",
        prefix = table_prefix
    );

    let rows = sqlx::query(&sql)
        .fetch_all(pool)
        .await
        .context("Failed to run the published-posts query")?;

    let mut posts = Vec::with_capacity(rows.len());
    for row in rows {
        posts.push(PublishedPost {
            id: row.try_get("id").context("Missing post id")?,
            title: row.try_get("title").context("Missing post title")?,
            slug: row.try_get("slug").context("Missing post slug")?,
            published_at: row
                .try_get("published_at")
                .context("Missing publish timestamp")?,
            body: row.try_get("body").context("Missing post body")?,
            author_display_name: row
                .try_get("author_display_name")
                .context("Missing author display name")?,
            author_nicename: row
                .try_get("author_nicename")
                .context("Missing author nicename")?,
            seo_description: row.try_get("seo_description")?,
            seo_title: row.try_get("seo_title")?,
            seo_keyword: row.try_get("seo_keyword")?,
        });
    }

    info!("Fetched {} published post(s)", posts.len());
    Ok(posts)
}

/// Fetches the taxonomy terms attached to a single post.
///
/// Joins the term_relationships, term_taxonomy, and terms tables for the given
/// post identifier. Terms in taxonomies other than `category` / `post_tag`
/// are skipped at row-mapping time. A post with no terms yields an empty
/// vector, which is valid input to the downstream stages.
///
/// # Arguments
///
/// * `pool` - Open MySQL connection pool.
/// * `table_prefix` - Validated WordPress table prefix.
/// * `post_id` - Identifier of the post, bound as a query parameter.
///
/// # Returns
///
/// * `Ok(Vec<PostTerm>)` - The post's category and tag terms in join order.
/// * `Err(anyhow::Error)` - The query failed.
pub async fn fetch_terms_for_post(
    pool: &MySqlPool,
    table_prefix: &str,
    post_id: u64,
) -> AnyhowResult<Vec<PostTerm>> {
    let sql = format!(
        "SELECT
            r.object_id AS post_id,
            t.taxonomy AS taxonomy,
            wt.name AS name
        FROM {prefix}term_relationships r
            JOIN {prefix}term_taxonomy t ON t.term_taxonomy_id = r.term_taxonomy_id
            JOIN {prefix}terms wt ON wt.term_id = t.term_id
        WHERE r.object_id = ?",
        prefix = table_prefix
    );

    let rows = sqlx::query(&sql)
        .bind(post_id)
        .fetch_all(pool)
        .await
        .context(format!("Failed to fetch terms for post {}", post_id))?;

    let mut terms = Vec::with_capacity(rows.len());
    for row in rows {
        let raw_taxonomy: String = row.try_get("taxonomy").context("Missing taxonomy")?;
        let Some(taxonomy) = Taxonomy::from_wordpress(&raw_taxonomy) else {
            debug!("Skipping term in unhandled taxonomy {:?}", raw_taxonomy);
            continue;
        };
        terms.push(PostTerm {
            post_id: row.try_get("post_id").context("Missing term post id")?,
            taxonomy,
            name: row.try_get("name").context("Missing term name")?,
        });
    }

    Ok(terms)
}
