//! Statistics aggregator
//!
//! Per-livestream statistics read counters from the cache and the max tip from the
//! primary store. Per-user statistics come entirely from live primary store queries.

use live_core::error::DomainError;
use live_core::traits::{
    LiveCommentQueries, LivestreamQueries, ReactionQueries, UserQueries, ViewerHistoryQueries,
};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::ranking::{LeaderboardRanking, RankSubject, RankingStrategy, RecomputedScanRanking};
use crate::dto::{LivestreamStatisticsResponse, UserStatisticsResponse};

/// Statistics service
pub struct StatisticsService<'a> {
    ctx: &'a ServiceContext,
    livestream_ranking: Box<dyn RankingStrategy + 'a>,
    user_ranking: Box<dyn RankingStrategy + 'a>,
}

impl<'a> StatisticsService<'a> {
    /// Leaderboard ranking for livestreams, recomputed scan for users
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            livestream_ranking: Box::new(LeaderboardRanking::new(ctx.cache().clone())),
            user_ranking: Box::new(RecomputedScanRanking::new()),
        }
    }

    pub fn with_strategies(
        ctx: &'a ServiceContext,
        livestream_ranking: Box<dyn RankingStrategy + 'a>,
        user_ranking: Box<dyn RankingStrategy + 'a>,
    ) -> Self {
        Self {
            ctx,
            livestream_ranking,
            user_ranking,
        }
    }

    #[instrument(skip(self))]
    pub async fn livestream_statistics(
        &self,
        livestream_id: i64,
    ) -> ServiceResult<LivestreamStatisticsResponse> {
        let cache = self.ctx.cache();
        let mut tx = self.ctx.primary().begin().await?;

        tx.find_livestream(livestream_id)
            .await?
            .ok_or(DomainError::LivestreamNotFound(livestream_id))?;

        let rank = self
            .livestream_ranking
            .rank(tx.as_mut(), RankSubject::Livestream(livestream_id))
            .await?;
        let viewers_count = cache.viewers(livestream_id).await?;
        let max_tip = tx.max_tip(livestream_id).await?;
        let total_reactions = cache.livestream_reactions(livestream_id).await?;
        let total_reports = cache.reports(livestream_id).await?;

        tx.commit().await?;

        Ok(LivestreamStatisticsResponse {
            rank,
            viewers_count,
            total_reactions,
            total_reports,
            max_tip,
        })
    }

    #[instrument(skip(self))]
    pub async fn user_statistics(&self, username: &str) -> ServiceResult<UserStatisticsResponse> {
        let mut tx = self.ctx.primary().begin().await?;

        let user = tx
            .find_user_by_name(username)
            .await?
            .ok_or_else(|| DomainError::UsernameNotFound(username.to_string()))?;

        let rank = self
            .user_ranking
            .rank(
                tx.as_mut(),
                RankSubject::User {
                    id: user.id,
                    name: &user.name,
                },
            )
            .await?;

        let total_reactions = tx.count_reactions_received(user.id).await?;

        let mut total_livecomments = 0;
        let mut total_tip = 0;
        let mut viewers_count = 0;
        for livestream in tx.livestreams_by_owner(user.id).await? {
            let comments = tx.livecomments_for_livestream(livestream.id).await?;
            total_livecomments += comments.len() as i64;
            total_tip += comments.iter().map(|c| c.tip).sum::<i64>();
            viewers_count += tx.count_viewers(livestream.id).await?;
        }

        let favorite_emoji = tx.favorite_emoji(user.id).await?.unwrap_or_default();

        tx.commit().await?;

        info!(user_id = user.id, rank, "User statistics computed");

        Ok(UserStatisticsResponse {
            rank,
            viewers_count,
            total_reactions,
            total_livecomments,
            total_tip,
            favorite_emoji,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use live_cache::MemoryCacheStore;
    use live_common::JwtService;
    use live_db::MemoryPrimaryStore;

    use crate::services::{CacheBootstrapper, ServiceError};

    fn context(primary: &Arc<MemoryPrimaryStore>) -> ServiceContext {
        ServiceContext::new(
            primary.clone(),
            Arc::new(MemoryCacheStore::new()),
            Arc::new(JwtService::new("secret", 60)),
        )
    }

    #[tokio::test]
    async fn test_empty_livestream_defaults_to_zero() {
        let primary = Arc::new(MemoryPrimaryStore::new());
        let owner = primary.add_user("alice");
        let livestream = primary.add_livestream(owner.id, "quiet");
        let ctx = context(&primary);
        CacheBootstrapper::new(&ctx).run().await.unwrap();

        let stats = StatisticsService::new(&ctx)
            .livestream_statistics(livestream.id)
            .await
            .unwrap();

        assert_eq!(
            stats,
            LivestreamStatisticsResponse {
                rank: 1,
                viewers_count: 0,
                total_reactions: 0,
                total_reports: 0,
                max_tip: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_livestream_statistics_reads_cache_and_max_tip() {
        let primary = Arc::new(MemoryPrimaryStore::new());
        let alice = primary.add_user("alice");
        let bob = primary.add_user("bob");
        let first = primary.add_livestream(alice.id, "a");
        let second = primary.add_livestream(bob.id, "b");
        primary.add_reaction(bob.id, second.id, "fire");
        primary.add_viewer(bob.id, first.id);
        let comment = primary.add_livecomment(bob.id, first.id, "gg", 40);
        primary.add_livecomment(bob.id, first.id, "gg", 90);
        primary.add_report(alice.id, first.id, comment.id);
        let ctx = context(&primary);
        CacheBootstrapper::new(&ctx).run().await.unwrap();

        let stats = StatisticsService::new(&ctx)
            .livestream_statistics(first.id)
            .await
            .unwrap();

        assert_eq!(stats.rank, 2);
        assert_eq!(stats.viewers_count, 1);
        assert_eq!(stats.total_reactions, 0);
        assert_eq!(stats.total_reports, 1);
        assert_eq!(stats.max_tip, 90);
    }

    #[tokio::test]
    async fn test_unknown_livestream_is_not_found() {
        let primary = Arc::new(MemoryPrimaryStore::new());
        let ctx = context(&primary);

        let err = StatisticsService::new(&ctx)
            .livestream_statistics(42)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::LivestreamNotFound(42))
        ));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_user_statistics_from_live_queries() {
        let primary = Arc::new(MemoryPrimaryStore::new());
        let alice = primary.add_user("alice");
        let bob = primary.add_user("bob");
        let first = primary.add_livestream(alice.id, "a");
        let second = primary.add_livestream(alice.id, "b");
        primary.add_reaction(bob.id, first.id, "fire");
        primary.add_reaction(bob.id, second.id, "heart");
        primary.add_reaction(bob.id, second.id, "heart");
        primary.add_livecomment(bob.id, first.id, "hi", 10);
        primary.add_livecomment(bob.id, second.id, "hey", 0);
        primary.add_viewer(bob.id, first.id);
        primary.add_viewer(bob.id, second.id);
        let ctx = context(&primary);

        let stats = StatisticsService::new(&ctx)
            .user_statistics("alice")
            .await
            .unwrap();

        assert_eq!(
            stats,
            UserStatisticsResponse {
                rank: 1,
                viewers_count: 2,
                total_reactions: 3,
                total_livecomments: 2,
                total_tip: 10,
                favorite_emoji: "heart".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_user_without_reactions_has_empty_favorite() {
        let primary = Arc::new(MemoryPrimaryStore::new());
        primary.add_user("alice");
        let ctx = context(&primary);

        let stats = StatisticsService::new(&ctx)
            .user_statistics("alice")
            .await
            .unwrap();
        assert_eq!(stats.favorite_emoji, "");
        assert_eq!(stats.total_reactions, 0);
    }

    #[tokio::test]
    async fn test_unknown_username_is_not_found() {
        let primary = Arc::new(MemoryPrimaryStore::new());
        let ctx = context(&primary);

        let err = StatisticsService::new(&ctx)
            .user_statistics("nobody")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_USER");
    }

    #[tokio::test]
    async fn test_strategies_can_be_swapped() {
        let primary = Arc::new(MemoryPrimaryStore::new());
        let alice = primary.add_user("alice");
        let bob = primary.add_user("bob");
        let livestream = primary.add_livestream(alice.id, "a");
        primary.add_livestream(bob.id, "b");
        primary.add_reaction(bob.id, livestream.id, "fire");
        let ctx = context(&primary);
        CacheBootstrapper::new(&ctx).run().await.unwrap();

        let service = StatisticsService::with_strategies(
            &ctx,
            Box::new(RecomputedScanRanking::new()),
            Box::new(LeaderboardRanking::new(ctx.cache().clone())),
        );

        assert_eq!(service.livestream_statistics(livestream.id).await.unwrap().rank, 1);
        assert_eq!(service.user_statistics("bob").await.unwrap().rank, 2);
    }
}
