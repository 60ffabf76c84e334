//! Write-path updater
//!
//! Applies the cache-side effects of a mutation that has already committed to the
//! primary store. Each step is an independent increment or write; there is no
//! cross-key atomicity, and a full bootstrap is the only repair for drift.

use live_cache::{DerivedCache, Leaderboard};
use live_core::entities::{LiveComment, Livestream, Reaction, Report};
use tracing::{debug, instrument};

use super::error::ServiceResult;

/// Cache updates issued after a primary store commit
pub struct WritePathUpdater<'a> {
    cache: &'a DerivedCache,
}

impl<'a> WritePathUpdater<'a> {
    pub fn new(cache: &'a DerivedCache) -> Self {
        Self { cache }
    }

    /// Counters and leaderboards for a new reaction.
    ///
    /// The owner lookup runs before any increment, so a missing owner leaves every
    /// key untouched and fails with `CacheKeyMissing`.
    #[instrument(skip(self, reaction), fields(reaction_id = reaction.id, livestream_id = reaction.livestream_id))]
    pub async fn reaction_posted(&self, reaction: &Reaction) -> ServiceResult<()> {
        let livestream_id = reaction.livestream_id;
        let owner_id = self.cache.livestream_owner(livestream_id).await?;

        self.cache.incr_livestream_reactions(livestream_id).await?;
        self.cache.incr_user_reactions(owner_id).await?;
        self.cache
            .leaderboard_incr(Leaderboard::Livestreams, livestream_id, 1)
            .await?;
        self.cache
            .leaderboard_incr(Leaderboard::Users, owner_id, 1)
            .await?;

        debug!(owner_id, "Reaction counters updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn viewer_entered(&self, livestream_id: i64) -> ServiceResult<()> {
        self.cache.incr_viewers(livestream_id).await?;
        Ok(())
    }

    #[instrument(skip(self, comment), fields(livecomment_id = comment.id))]
    pub async fn livecomment_posted(&self, comment: &LiveComment) -> ServiceResult<()> {
        self.cache
            .set_tip(comment.livestream_id, comment.id, comment.tip)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, report), fields(report_id = report.id))]
    pub async fn report_filed(&self, report: &Report) -> ServiceResult<()> {
        self.cache.incr_reports(report.livestream_id).await?;
        Ok(())
    }

    /// Hook for the reservation flow once a new livestream has committed.
    ///
    /// The tag index is replaced rather than appended to, and leaderboards are incremented
    /// by zero, so a repeated call leaves the cache as a single call would.
    #[instrument(skip(self, livestream, tag_ids), fields(livestream_id = livestream.id))]
    pub async fn livestream_created(&self, livestream: &Livestream, tag_ids: &[i64]) -> ServiceResult<()> {
        self.cache
            .store_livestream_owners(&[(livestream.id, livestream.user_id)])
            .await?;
        self.cache
            .set_livestream_tags(livestream.id, tag_ids)
            .await?;
        self.cache
            .leaderboard_incr(Leaderboard::Livestreams, livestream.id, 0)
            .await?;
        self.cache
            .leaderboard_incr(Leaderboard::Users, livestream.user_id, 0)
            .await?;
        Ok(())
    }
}
