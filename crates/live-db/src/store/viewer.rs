//! Viewer history queries

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::ViewerHistoryEntry;
use live_core::traits::{RepoResult, ViewerHistoryQueries};

use crate::models::ViewerHistoryModel;

use super::{map_db_error, PgTx};

#[async_trait]
impl ViewerHistoryQueries for PgTx {
    #[instrument(skip(self))]
    async fn all_viewer_history(&mut self) -> RepoResult<Vec<ViewerHistoryEntry>> {
        let rows = sqlx::query_as::<_, ViewerHistoryModel>(
            r#"
            SELECT user_id, livestream_id, created_at
            FROM livestream_viewers_history
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ViewerHistoryEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_viewers(&mut self, livestream_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM livestream_viewers_history WHERE livestream_id = $1",
        )
        .bind(livestream_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn insert_viewer_history(&mut self, entry: &ViewerHistoryEntry) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO livestream_viewers_history (user_id, livestream_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(entry.user_id)
        .bind(entry.livestream_id)
        .bind(entry.created_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
