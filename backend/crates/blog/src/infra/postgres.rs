//! PostgreSQL Repository Implementations
//!
//! Every mutation is a single SQL statement (INSERT ... RETURNING,
//! UPDATE/DELETE with rows_affected), so each operation commits
//! atomically; a failure can never leave a half-written row.

use sqlx::PgPool;

use kernel::id::{PostId, UserId};

use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{ImageUrl, PostTitle};
use crate::error::{BlogError, BlogResult};

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &NewPost) -> BlogResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (
                title,
                subtitle,
                body,
                img_url,
                date,
                author_id
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id,
                title,
                subtitle,
                body,
                img_url,
                date,
                author_id
            "#,
        )
        .bind(post.content.title.as_str())
        .bind(&post.content.subtitle)
        .bind(&post.content.body)
        .bind(post.content.img_url.as_str())
        .bind(&post.date)
        .bind(post.author_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(row.into_post())
    }

    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                subtitle,
                body,
                img_url,
                date,
                author_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn list_all(&self) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                subtitle,
                body,
                img_url,
                date,
                author_id
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_post()).collect())
    }

    async fn find_by_author(&self, author_id: UserId) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                subtitle,
                body,
                img_url,
                date,
                author_id
            FROM posts
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_post()).collect())
    }

    async fn update(&self, post_id: PostId, update: &PostUpdate) -> BlogResult<Option<Post>> {
        // id and date are never touched; the author only changes when
        // explicitly supplied (COALESCE keeps the stored value otherwise)
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts SET
                title = $2,
                subtitle = $3,
                body = $4,
                img_url = $5,
                author_id = COALESCE($6, author_id)
            WHERE id = $1
            RETURNING
                id,
                title,
                subtitle,
                body,
                img_url,
                date,
                author_id
            "#,
        )
        .bind(post_id.value())
        .bind(update.content.title.as_str())
        .bind(&update.content.subtitle)
        .bind(&update.content.body)
        .bind(update.content.img_url.as_str())
        .bind(update.author_id.map(|id| id.value()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn delete(&self, post_id: PostId) -> BlogResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

/// Map a unique-index violation on the title column to `DuplicateTitle`
fn map_unique_violation(err: sqlx::Error) -> BlogError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            return BlogError::DuplicateTitle;
        }
    }
    BlogError::Database(err)
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    subtitle: String,
    body: String,
    img_url: String,
    date: String,
    author_id: i64,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from_db(self.id),
            title: PostTitle::from_db(self.title),
            subtitle: self.subtitle,
            body: self.body,
            img_url: ImageUrl::from_db(self.img_url),
            date: self.date,
            author_id: UserId::from_db(self.author_id),
        }
    }
}
