//! Business logic services
//!
//! This module contains the service layer: cache maintenance (bootstrap and write-path
//! updates), ranking, statistics, and the request use cases built on top of them.

pub mod bootstrap;
pub mod context;
mod detail;
pub mod error;
pub mod livestream;
pub mod ranking;
pub mod reaction;
pub mod statistics;
pub mod tag;
pub mod updater;

// Re-export all services for convenience
pub use bootstrap::{BootstrapReport, CacheBootstrapper};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use livestream::LivestreamService;
pub use ranking::{
    scan_rank, LeaderboardRanking, RankEntry, RankSubject, RankingStrategy, RecomputedScanRanking,
};
pub use reaction::ReactionService;
pub use statistics::StatisticsService;
pub use tag::TagService;
pub use updater::WritePathUpdater;
