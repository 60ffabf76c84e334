//! Tag queries

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::{LivestreamTag, Tag};
use live_core::traits::{RepoResult, TagQueries};

use crate::models::{LivestreamTagModel, TagModel};

use super::{map_db_error, PgTx};

#[async_trait]
impl TagQueries for PgTx {
    #[instrument(skip(self))]
    async fn all_tags(&mut self) -> RepoResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagModel>("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn all_livestream_tags(&mut self) -> RepoResult<Vec<LivestreamTag>> {
        let rows = sqlx::query_as::<_, LivestreamTagModel>(
            "SELECT livestream_id, tag_id FROM livestream_tags ORDER BY id",
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LivestreamTag::from).collect())
    }

    #[instrument(skip(self))]
    async fn tag_ids_for_livestream(&mut self, livestream_id: i64) -> RepoResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>(
            "SELECT tag_id FROM livestream_tags WHERE livestream_id = $1 ORDER BY id",
        )
        .bind(livestream_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)
    }
}
