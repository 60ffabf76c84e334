//! Reaction queries

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::{NewReaction, Reaction};
use live_core::traits::{ReactionQueries, RepoResult};

use crate::models::ReactionModel;

use super::{map_db_error, PgTx};

#[async_trait]
impl ReactionQueries for PgTx {
    #[instrument(skip(self))]
    async fn all_reactions(&mut self) -> RepoResult<Vec<Reaction>> {
        let rows = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, emoji_name, user_id, livestream_id, created_at
            FROM reactions
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self, reaction), fields(livestream_id = reaction.livestream_id))]
    async fn insert_reaction(&mut self, reaction: NewReaction) -> RepoResult<Reaction> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO reactions (user_id, livestream_id, emoji_name, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(reaction.user_id)
        .bind(reaction.livestream_id)
        .bind(&reaction.emoji_name)
        .bind(reaction.created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(reaction.into_reaction(id))
    }

    #[instrument(skip(self))]
    async fn recent_reactions(
        &mut self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Reaction>> {
        // LIMIT NULL means no limit
        let rows = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, emoji_name, user_id, livestream_id, created_at
            FROM reactions
            WHERE livestream_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(livestream_id)
        .bind(limit)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_reactions(&mut self, livestream_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reactions WHERE livestream_id = $1")
            .bind(livestream_id)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_reactions_received(&mut self, user_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM livestreams l
            INNER JOIN reactions r ON r.livestream_id = l.id
            WHERE l.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn favorite_emoji(&mut self, user_id: i64) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT r.emoji_name
            FROM livestreams l
            INNER JOIN reactions r ON r.livestream_id = l.id
            WHERE l.user_id = $1
            GROUP BY r.emoji_name
            ORDER BY COUNT(*) DESC, r.emoji_name COLLATE "C" DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)
    }
}
