//! Livestream queries

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::Livestream;
use live_core::traits::{LivestreamQueries, RepoResult};

use crate::models::LivestreamModel;

use super::{map_db_error, PgTx};

#[async_trait]
impl LivestreamQueries for PgTx {
    #[instrument(skip(self))]
    async fn all_livestreams(&mut self) -> RepoResult<Vec<Livestream>> {
        let rows = sqlx::query_as::<_, LivestreamModel>(
            r#"
            SELECT id, user_id, title, description, start_at, end_at
            FROM livestreams
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Livestream::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_livestream(&mut self, id: i64) -> RepoResult<Option<Livestream>> {
        let row = sqlx::query_as::<_, LivestreamModel>(
            r#"
            SELECT id, user_id, title, description, start_at, end_at
            FROM livestreams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Livestream::from))
    }

    #[instrument(skip(self))]
    async fn livestreams_by_owner(&mut self, user_id: i64) -> RepoResult<Vec<Livestream>> {
        let rows = sqlx::query_as::<_, LivestreamModel>(
            r#"
            SELECT id, user_id, title, description, start_at, end_at
            FROM livestreams
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Livestream::from).collect())
    }
}
