//! User queries

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::User;
use live_core::traits::{RepoResult, UserQueries};

use crate::models::UserModel;

use super::{map_db_error, PgTx};

#[async_trait]
impl UserQueries for PgTx {
    #[instrument(skip(self))]
    async fn all_users(&mut self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            "SELECT id, name, display_name, description FROM users ORDER BY id",
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_user(&mut self, id: i64) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserModel>(
            "SELECT id, name, display_name, description FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_user_by_name(&mut self, name: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserModel>(
            "SELECT id, name, display_name, description FROM users WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(User::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_users_by_ids(&mut self, ids: &[i64]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, display_name, description
            FROM users
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
