//! # live-service
//!
//! Application layer: the cache bootstrapper, the write-path updater, both ranking
//! strategies, the statistics aggregator, and the reaction, tag, and livestream use cases
//! that sit on top of them. DTOs for every JSON shape live in [`dto`].

pub mod dto;
pub mod services;

pub use services::{
    BootstrapReport, CacheBootstrapper, LeaderboardRanking, LivestreamService, RankSubject,
    RankingStrategy, ReactionService, RecomputedScanRanking, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StatisticsService, TagService,
    WritePathUpdater,
};
