//! # live-core
//!
//! Domain layer for the livestreaming backend: entities, domain errors, and the two
//! ports every other crate plugs into.
//!
//! - [`PrimaryStore`] / [`PrimaryTx`]: the transactional relational store of record
//! - [`CacheStore`]: the key/value + sorted-set store holding derived aggregates
//!
//! This crate has zero dependencies on infrastructure (database, Redis, web framework).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    LiveComment, Livestream, LivestreamTag, NewLiveComment, NewReaction, NewReport, Reaction,
    Report, Tag, User, ViewerHistoryEntry,
};
pub use error::DomainError;
pub use traits::{
    CacheStore, LiveCommentQueries, LivestreamQueries, PrimaryStore, PrimaryTx, ReactionQueries,
    RepoResult, ReportQueries, TagQueries, UserQueries, ViewerHistoryQueries,
};
