//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use quill_core::entities::{Report, ReportStatus};
use quill_core::query::{Page, ReportQuery};
use quill_core::traits::{RepoResult, ReportRepository};
use quill_core::value_objects::Snowflake;

use crate::models::ReportModel;

use super::error::map_db_error;

const REPORT_COLUMNS: &str = "id, reporter_id, target_type, target_id, reason, description, \
                              status, action_taken, review_notes, reviewer_id, created_at, \
                              updated_at";

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ReportQuery) {
    builder.push(" WHERE TRUE");
    if let Some(status) = query.status {
        builder.push(" AND status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(target_type) = query.target_type {
        builder.push(" AND target_type = ");
        builder.push_bind(target_type.as_str());
    }
    if let Some(reason) = query.reason {
        builder.push(" AND reason = ");
        builder.push_bind(reason.as_str());
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
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Report>> {
        let result = sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Report::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &ReportQuery) -> RepoResult<Page<Report>> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM reports");
        push_filters(&mut count_builder, query);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut builder = QueryBuilder::new(format!("SELECT {REPORT_COLUMNS} FROM reports"));
        push_filters(&mut builder, query);
        builder.push(format!(
            " ORDER BY {} {}, id DESC LIMIT ",
            query.sort.as_column(),
            query.direction.as_sql()
        ));
        builder.push_bind(query.page.limit);
        builder.push(" OFFSET ");
        builder.push_bind(query.page.offset());

        let models: Vec<ReportModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let items = models
            .into_iter()
            .map(Report::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total, query.page))
    }

    #[instrument(skip(self))]
    async fn create(&self, report: &Report) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reports (id, reporter_id, target_type, target_id, reason, description,
                                 status, action_taken, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(report.id.into_inner())
        .bind(report.reporter_id.into_inner())
        .bind(report.target_type.as_str())
        .bind(report.target_id.into_inner())
        .bind(report.reason.as_str())
        .bind(&report.description)
        .bind(report.status.as_str())
        .bind(report.action_taken.as_str())
        .bind(report.created_at)
        .bind(report.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn transition(&self, report: &Report, expected: ReportStatus) -> RepoResult<bool> {
        // Guarded by the expected prior status. Zero rows means the report
        // moved concurrently and nothing was written.
        let result = sqlx::query(
            r"
            UPDATE reports
            SET status = $2, action_taken = $3, review_notes = $4, reviewer_id = $5,
                updated_at = $6
            WHERE id = $1 AND status = $7
            ",
        )
        .bind(report.id.into_inner())
        .bind(report.status.as_str())
        .bind(report.action_taken.as_str())
        .bind(&report.review_notes)
        .bind(report.reviewer_id.map(Snowflake::into_inner))
        .bind(report.updated_at)
        .bind(expected.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReportRepository>();
    }
}
