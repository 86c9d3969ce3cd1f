use anyhow::{anyhow, Result as AnyhowResult};
use chrono::NaiveDateTime;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::fmt::Debug;

/// Connection settings for the source WordPress database.
///
/// All connection state is carried explicitly in this struct; there are no
/// process-wide singletons. The table prefix is validated on construction
/// because it is interpolated into identifier positions of the query text,
/// where bound parameters cannot be used.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database host (e.g., "localhost").
    pub host: String,
    /// Database port (WordPress default is 3306).
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Database password, may be empty.
    pub password: String,
    /// Database name (e.g., "wordpress").
    pub database: String,
    /// Table-name prefix (e.g., "wp_"), restricted to `[A-Za-z0-9_]`.
    pub table_prefix: String,
}

impl DbConfig {
    /// Builds a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `host`, `port`, `user`, `password`, `database` - Standard MySQL
    ///   connection parameters.
    /// * `table_prefix` - WordPress table prefix, interpolated into query text.
    ///
    /// # Returns
    ///
    /// * `Ok(DbConfig)` - The configuration.
    /// * `Err(anyhow::Error)` - The prefix contains characters outside `[A-Za-z0-9_]`.
    pub fn new(
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
        table_prefix: String,
    ) -> AnyhowResult<Self> {
        if table_prefix.is_empty()
            || !table_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(anyhow!(
                "Invalid table prefix {:?}: only [A-Za-z0-9_] is allowed",
                table_prefix
            ));
        }
        Ok(Self {
            host,
            port,
            user,
            password,
            database,
            table_prefix,
        })
    }

    /// Opens a MySQL connection pool for this configuration.
    ///
    /// The pool size caps the number of simultaneous database connections, so
    /// per-post fan-out can never exceed the database's connection limit.
    ///
    /// # Arguments
    ///
    /// * `max_connections` - Upper bound on pooled connections.
    ///
    /// # Returns
    ///
    /// * `Ok(MySqlPool)` - A ready connection pool.
    /// * `Err(anyhow::Error)` - The database is unreachable or credentials are invalid.
    pub async fn connect(&self, max_connections: u32) -> AnyhowResult<MySqlPool> {
        let url = format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        );
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(&url)
            .await?;
        Ok(pool)
    }
}

/// Represents one publishable post from the bulk query.
///
/// Carries the post row joined with its author's names and the optional Yoast
/// SEO metadata. Read once per run, transformed, and discarded after the file
/// write; never written back to the database.
#[derive(Debug, Clone)]
pub struct PublishedPost {
    /// Numeric post identifier (`wp_posts.ID`).
    pub id: u64,
    /// Post title, may contain single quotes that need escaping.
    pub title: String,
    /// URL slug (`wp_posts.post_name`).
    pub slug: String,
    /// Publish timestamp from the GMT column, interpreted as UTC.
    pub published_at: NaiveDateTime,
    /// Post body, may contain embedded markup.
    pub body: String,
    /// Author display name (`wp_users.display_name`).
    pub author_display_name: String,
    /// Author slug-friendly nickname (`wp_users.user_nicename`).
    pub author_nicename: String,
    /// Yoast meta description, absent when never set.
    pub seo_description: Option<String>,
    /// Yoast meta title, absent when never set.
    pub seo_title: Option<String>,
    /// Yoast focus keyword, absent when never set.
    pub seo_keyword: Option<String>,
}

/// Taxonomy kind of a term attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    /// A `category` term.
    Category,
    /// A `post_tag` term.
    Tag,
}

impl Taxonomy {
    /// Maps a WordPress taxonomy string to a kind.
    ///
    /// # Arguments
    ///
    /// * `raw` - The `term_taxonomy.taxonomy` column value.
    ///
    /// # Returns
    ///
    /// `Some(Taxonomy)` for `category` / `post_tag`, `None` for any other
    /// taxonomy (e.g., `nav_menu`), which the exporter ignores.
    pub fn from_wordpress(raw: &str) -> Option<Self> {
        match raw {
            "category" => Some(Taxonomy::Category),
            "post_tag" => Some(Taxonomy::Tag),
            _ => None,
        }
    }
}

/// Represents one taxonomy term attached to a post.
///
/// Multiple terms share a post identifier (Post 1—* Term); the join happens at
/// query time, not as an in-memory graph.
#[derive(Debug, Clone)]
pub struct PostTerm {
    /// Identifier of the owning post.
    pub post_id: u64,
    /// Taxonomy kind the term belongs to.
    pub taxonomy: Taxonomy,
    /// Term display name (e.g., "News").
    pub name: String,
}
