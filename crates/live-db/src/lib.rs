//! # live-db
//!
//! Primary store implementing the `live-core` store ports with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema application
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - [`PgPrimaryStore`]: one SQLx transaction per [`live_core::PrimaryTx`]
//! - [`MemoryPrimaryStore`]: an in-process double with the same query semantics, used by
//!   service and HTTP tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use live_db::{create_pool, DatabaseConfig, PgPrimaryStore};
//! use live_core::PrimaryStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     let store = PgPrimaryStore::new(pool);
//!
//!     let mut tx = store.begin().await?;
//!     let streams = tx.all_livestreams().await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod store;

// Re-export commonly used types
pub use memory::MemoryPrimaryStore;
pub use pool::{apply_schema, create_pool, DatabaseConfig, PgPool};
pub use store::{PgPrimaryStore, PgTx};
