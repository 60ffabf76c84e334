//! Connection pool management

mod postgres;

pub use postgres::{apply_schema, create_pool, DatabaseConfig};
pub use sqlx::PgPool;
