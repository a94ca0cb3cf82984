//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use quill_core::entities::Post;
use quill_core::query::{Page, PostQuery};
use quill_core::traits::{PostRepository, RepoResult};
use quill_core::value_objects::Snowflake;

use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

const POST_COLUMNS: &str = "id, owner_id, title, content, category, views, likes, created_at, \
                            updated_at";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards in a user-supplied search term so `%` and `_`
/// match literally. Postgres treats backslash as the default escape.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Append the WHERE clause for a post listing. Filter values are always
/// bound parameters; only allow-listed sort columns are interpolated.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &PostQuery) {
    builder.push(" WHERE TRUE");
    if let Some(search) = &query.search {
        builder.push(" AND title ILIKE ");
        builder.push_bind(format!("%{}%", escape_like(search)));
    }
    if let Some(category) = query.category {
        builder.push(" AND category = ");
        builder.push_bind(category.as_str());
    }
    if let Some(owner_id) = query.owner_id {
        builder.push(" AND owner_id = ");
        builder.push_bind(owner_id.into_inner());
    }
    if let Some(from) = query.range.from {
        builder.push(" AND created_at >= ");
        builder.push_bind(from);
    }
    if let Some(to) = query.range.to {
        builder.push(" AND created_at <= ");
        builder.push_bind(to);
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Post::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &PostQuery) -> RepoResult<Page<Post>> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        push_filters(&mut count_builder, query);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut builder = QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        push_filters(&mut builder, query);
        builder.push(format!(
            " ORDER BY {} {}, id DESC LIMIT ",
            query.sort.as_column(),
            query.direction.as_sql()
        ));
        builder.push_bind(query.page.limit);
        builder.push(" OFFSET ");
        builder.push_bind(query.page.offset());

        let models: Vec<PostModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let items = models
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total, query.page))
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, owner_id, title, content, category, views, likes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.owner_id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.category.as_str())
        .bind(post.views)
        .bind(post.likes)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = $2, content = $3, category = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(post.id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.category.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM posts WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts SET views = views + 1 WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }
}
