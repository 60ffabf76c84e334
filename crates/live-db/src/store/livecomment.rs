//! Live comment queries

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::{LiveComment, NewLiveComment};
use live_core::traits::{LiveCommentQueries, RepoResult};

use crate::models::LiveCommentModel;

use super::{map_db_error, PgTx};

#[async_trait]
impl LiveCommentQueries for PgTx {
    #[instrument(skip(self))]
    async fn all_livecomments(&mut self) -> RepoResult<Vec<LiveComment>> {
        let rows = sqlx::query_as::<_, LiveCommentModel>(
            r#"
            SELECT id, user_id, livestream_id, comment, tip, created_at
            FROM livecomments
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LiveComment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_livecomment(&mut self, id: i64) -> RepoResult<Option<LiveComment>> {
        let row = sqlx::query_as::<_, LiveCommentModel>(
            r#"
            SELECT id, user_id, livestream_id, comment, tip, created_at
            FROM livecomments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(LiveComment::from))
    }

    #[instrument(skip(self))]
    async fn livecomments_for_livestream(
        &mut self,
        livestream_id: i64,
    ) -> RepoResult<Vec<LiveComment>> {
        let rows = sqlx::query_as::<_, LiveCommentModel>(
            r#"
            SELECT id, user_id, livestream_id, comment, tip, created_at
            FROM livecomments
            WHERE livestream_id = $1
            ORDER BY id
            "#,
        )
        .bind(livestream_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LiveComment::from).collect())
    }

    #[instrument(skip(self, comment), fields(livestream_id = comment.livestream_id))]
    async fn insert_livecomment(&mut self, comment: NewLiveComment) -> RepoResult<LiveComment> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO livecomments (user_id, livestream_id, comment, tip, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(comment.user_id)
        .bind(comment.livestream_id)
        .bind(&comment.comment)
        .bind(comment.tip)
        .bind(comment.created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(comment.into_livecomment(id))
    }

    #[instrument(skip(self))]
    async fn max_tip(&mut self, livestream_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(MAX(tip), 0) FROM livecomments WHERE livestream_id = $1",
        )
        .bind(livestream_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn sum_tips(&mut self, livestream_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(tip), 0)::BIGINT FROM livecomments WHERE livestream_id = $1",
        )
        .bind(livestream_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn sum_tips_received(&mut self, user_id: i64) -> RepoResult<i64> {
        // SUM(BIGINT) is NUMERIC in PostgreSQL
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(lc.tip), 0)::BIGINT
            FROM livestreams l
            INNER JOIN livecomments lc ON lc.livestream_id = l.id
            WHERE l.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)
    }
}
