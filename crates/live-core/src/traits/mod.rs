//! Ports - interfaces the domain needs from infrastructure

mod cache;
mod primary;

pub use cache::CacheStore;
pub use primary::{
    LiveCommentQueries, LivestreamQueries, PrimaryStore, PrimaryTx, ReactionQueries, RepoResult,
    ReportQueries, TagQueries, UserQueries, ViewerHistoryQueries,
};
