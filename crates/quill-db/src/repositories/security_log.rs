//! PostgreSQL implementation of SecurityLogRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use quill_core::entities::SecurityLogEntry;
use quill_core::query::{Page, SecurityLogQuery};
use quill_core::traits::{RepoResult, SecurityLogRepository};
use quill_core::value_objects::Snowflake;

use crate::models::SecurityLogModel;

use super::error::map_db_error;

const LOG_COLUMNS: &str = "id, event_type, ip, endpoint, user_id, details, created_at";

/// PostgreSQL implementation of SecurityLogRepository
#[derive(Clone)]
pub struct PgSecurityLogRepository {
    pool: PgPool,
}

impl PgSecurityLogRepository {
    /// Create a new PgSecurityLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &SecurityLogQuery) {
    builder.push(" WHERE TRUE");
    if let Some(event_type) = query.event_type {
        builder.push(" AND event_type = ");
        builder.push_bind(event_type.as_str());
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
impl SecurityLogRepository for PgSecurityLogRepository {
    #[instrument(skip(self, entry))]
    async fn append(&self, entry: &SecurityLogEntry) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO security_logs (id, event_type, ip, endpoint, user_id, details, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(entry.id.into_inner())
        .bind(entry.event_type.as_str())
        .bind(&entry.ip)
        .bind(&entry.endpoint)
        .bind(entry.user_id.map(Snowflake::into_inner))
        .bind(&entry.details)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &SecurityLogQuery) -> RepoResult<Page<SecurityLogEntry>> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM security_logs");
        push_filters(&mut count_builder, query);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut builder = QueryBuilder::new(format!("SELECT {LOG_COLUMNS} FROM security_logs"));
        push_filters(&mut builder, query);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(query.page.limit);
        builder.push(" OFFSET ");
        builder.push_bind(query.page.offset());

        let models: Vec<SecurityLogModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let items = models
            .into_iter()
            .map(SecurityLogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total, query.page))
    }
}
