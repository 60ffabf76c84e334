//! PostgreSQL implementation of the primary store ports
//!
//! [`PgTx`] owns one SQLx transaction. Each query group lives in its own file as an
//! `impl XQueries for PgTx` block.

mod error;
mod livecomment;
mod livestream;
mod reaction;
mod report;
mod tag;
mod user;
mod viewer;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use live_core::traits::{PrimaryStore, PrimaryTx, RepoResult};

pub use error::map_db_error;

/// PostgreSQL-backed primary store
#[derive(Clone)]
pub struct PgPrimaryStore {
    pool: PgPool,
}

impl PgPrimaryStore {
    /// Create a new PgPrimaryStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for health checks and schema setup
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PrimaryStore for PgPrimaryStore {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn PrimaryTx>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgTx { tx }))
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

/// An open PostgreSQL transaction. Dropping it without commit rolls back.
pub struct PgTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl PrimaryTx for PgTx {
    #[instrument(skip(self))]
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)
    }
}
