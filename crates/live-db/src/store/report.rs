//! Spam report queries

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::{NewReport, Report};
use live_core::traits::{ReportQueries, RepoResult};

use crate::models::ReportModel;

use super::{map_db_error, PgTx};

#[async_trait]
impl ReportQueries for PgTx {
    #[instrument(skip(self))]
    async fn all_reports(&mut self) -> RepoResult<Vec<Report>> {
        let rows = sqlx::query_as::<_, ReportModel>(
            r#"
            SELECT id, user_id, livestream_id, livecomment_id, created_at
            FROM livecomment_reports
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert_report(&mut self, report: NewReport) -> RepoResult<Report> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO livecomment_reports (user_id, livestream_id, livecomment_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(report.user_id)
        .bind(report.livestream_id)
        .bind(report.livecomment_id)
        .bind(report.created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(report.into_report(id))
    }
}
