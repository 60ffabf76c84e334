//! Ranking resolver
//!
//! Two strategies answer the same question with different sources and tie-breaks:
//!
//! - [`LeaderboardRanking`] reads the cached sorted sets. Equal scores rank the
//!   larger id first, following the sorted set's reverse member order.
//! - [`RecomputedScanRanking`] ignores the cache and recomputes every score from the
//!   primary store on each call. Equal scores rank the larger key first, which for
//!   users is the lexicographically larger name.
//!
//! Per-livestream statistics use the leaderboard and per-user statistics use the scan.
//! The two are kept apart because their outputs differ on ties.

use async_trait::async_trait;
use live_cache::{DerivedCache, Leaderboard};
use live_core::traits::{LiveCommentQueries, LivestreamQueries, PrimaryTx, ReactionQueries, UserQueries};
use tracing::instrument;

use super::error::{ServiceError, ServiceResult};

/// What is being ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankSubject<'a> {
    Livestream(i64),
    User { id: i64, name: &'a str },
}

/// Resolves a 1-based rank, where 1 is the best
#[async_trait]
pub trait RankingStrategy: Send + Sync {
    async fn rank(&self, tx: &mut dyn PrimaryTx, subject: RankSubject<'_>) -> ServiceResult<i64>;
}

// ============================================================================
// Leaderboard-backed
// ============================================================================

/// Rank from the cached reaction leaderboards
#[derive(Debug, Clone)]
pub struct LeaderboardRanking {
    cache: DerivedCache,
}

impl LeaderboardRanking {
    pub fn new(cache: DerivedCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl RankingStrategy for LeaderboardRanking {
    #[instrument(skip(self, _tx))]
    async fn rank(&self, _tx: &mut dyn PrimaryTx, subject: RankSubject<'_>) -> ServiceResult<i64> {
        let (board, id) = match subject {
            RankSubject::Livestream(id) => (Leaderboard::Livestreams, id),
            RankSubject::User { id, .. } => (Leaderboard::Users, id),
        };
        Ok(self.cache.leaderboard_rank(board, id).await?)
    }
}

// ============================================================================
// Recomputed scan
// ============================================================================

/// One scored candidate in a recomputed ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry<K> {
    pub key: K,
    pub score: i64,
}

/// Sort ascending by `(score, key)` and count from the best end down to `target`.
///
/// Returns `None` when `target` is not among the entries.
pub fn scan_rank<K: Ord>(mut entries: Vec<RankEntry<K>>, target: &K) -> Option<i64> {
    entries.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.key.cmp(&b.key)));

    let mut rank = 1;
    for entry in entries.iter().rev() {
        if &entry.key == target {
            return Some(rank);
        }
        rank += 1;
    }
    None
}

/// Rank recomputed from live aggregates over every candidate.
///
/// A user's score is the reactions received on their livestreams plus the tips
/// received on them; a livestream's score is its reactions plus its tips. Livestream
/// statistics rank through the leaderboard, so the livestream scan exists to compare the
/// two strategies. Cost grows with the number of candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecomputedScanRanking;

impl RecomputedScanRanking {
    pub fn new() -> Self {
        Self
    }

    async fn user_entries(tx: &mut dyn PrimaryTx) -> ServiceResult<Vec<RankEntry<String>>> {
        let mut entries = Vec::new();
        for user in tx.all_users().await? {
            let reactions = tx.count_reactions_received(user.id).await?;
            let tips = tx.sum_tips_received(user.id).await?;
            entries.push(RankEntry {
                key: user.name,
                score: reactions + tips,
            });
        }
        Ok(entries)
    }

    async fn livestream_entries(tx: &mut dyn PrimaryTx) -> ServiceResult<Vec<RankEntry<i64>>> {
        let mut entries = Vec::new();
        for livestream in tx.all_livestreams().await? {
            let reactions = tx.count_reactions(livestream.id).await?;
            let tips = tx.sum_tips(livestream.id).await?;
            entries.push(RankEntry {
                key: livestream.id,
                score: reactions + tips,
            });
        }
        Ok(entries)
    }
}

#[async_trait]
impl RankingStrategy for RecomputedScanRanking {
    #[instrument(skip(self, tx))]
    async fn rank(&self, tx: &mut dyn PrimaryTx, subject: RankSubject<'_>) -> ServiceResult<i64> {
        let rank = match subject {
            RankSubject::User { name, .. } => {
                let entries = Self::user_entries(tx).await?;
                scan_rank(entries, &name.to_string())
            }
            RankSubject::Livestream(id) => {
                let entries = Self::livestream_entries(tx).await?;
                scan_rank(entries, &id)
            }
        };

        rank.ok_or_else(|| ServiceError::internal(format!("{subject:?} missing from ranking scan")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use live_cache::MemoryCacheStore;
    use live_core::traits::PrimaryStore;
    use live_db::MemoryPrimaryStore;

    fn user(u: &live_core::User) -> RankSubject<'_> {
        RankSubject::User {
            id: u.id,
            name: &u.name,
        }
    }

    fn entry(key: &str, score: i64) -> RankEntry<String> {
        RankEntry {
            key: key.to_string(),
            score,
        }
    }

    #[test]
    fn test_scan_rank_orders_by_score() {
        let entries = vec![entry("a", 1), entry("b", 5), entry("c", 3)];
        assert_eq!(scan_rank(entries.clone(), &"b".to_string()), Some(1));
        assert_eq!(scan_rank(entries.clone(), &"c".to_string()), Some(2));
        assert_eq!(scan_rank(entries, &"a".to_string()), Some(3));
    }

    #[test]
    fn test_scan_rank_ties_favor_larger_name() {
        let entries = vec![entry("alice", 4), entry("bob", 4), entry("carol", 1)];
        assert_eq!(scan_rank(entries.clone(), &"bob".to_string()), Some(1));
        assert_eq!(scan_rank(entries, &"alice".to_string()), Some(2));
    }

    #[test]
    fn test_scan_rank_missing_target() {
        assert_eq!(scan_rank(vec![entry("a", 1)], &"z".to_string()), None);
        assert_eq!(scan_rank(Vec::<RankEntry<String>>::new(), &"a".to_string()), None);
    }

    #[tokio::test]
    async fn test_leaderboard_ties_favor_larger_id() {
        let cache = DerivedCache::new(Arc::new(MemoryCacheStore::new()));
        for id in [3, 12] {
            cache.leaderboard_incr(Leaderboard::Livestreams, id, 2).await.unwrap();
        }
        cache.leaderboard_incr(Leaderboard::Livestreams, 1, 9).await.unwrap();

        let primary = MemoryPrimaryStore::new();
        let mut tx = primary.begin().await.unwrap();
        let ranking = LeaderboardRanking::new(cache);

        for (id, expected) in [(1, 1), (12, 2), (3, 3)] {
            let rank = ranking
                .rank(tx.as_mut(), RankSubject::Livestream(id))
                .await
                .unwrap();
            assert_eq!(rank, expected, "livestream {id}");
        }
    }

    #[tokio::test]
    async fn test_leaderboard_missing_member_is_internal() {
        let cache = DerivedCache::new(Arc::new(MemoryCacheStore::new()));
        let primary = MemoryPrimaryStore::new();
        let mut tx = primary.begin().await.unwrap();

        let err = LeaderboardRanking::new(cache)
            .rank(tx.as_mut(), RankSubject::Livestream(5))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_recomputed_scan_counts_reactions_and_tips() {
        let primary = MemoryPrimaryStore::new();
        let alice = primary.add_user("alice");
        let bob = primary.add_user("bob");
        let carol = primary.add_user("carol");
        let alice_stream = primary.add_livestream(alice.id, "a");
        let bob_stream = primary.add_livestream(bob.id, "b");
        primary.add_reaction(carol.id, alice_stream.id, "fire");
        primary.add_reaction(carol.id, alice_stream.id, "fire");
        primary.add_livecomment(carol.id, bob_stream.id, "tip", 1);
        primary.add_reaction(carol.id, bob_stream.id, "fire");

        let mut tx = primary.begin().await.unwrap();
        let ranking = RecomputedScanRanking::new();

        // alice and bob both score 2; bob wins the tie by name
        assert_eq!(ranking.rank(tx.as_mut(), user(&bob)).await.unwrap(), 1);
        assert_eq!(ranking.rank(tx.as_mut(), user(&alice)).await.unwrap(), 2);
        assert_eq!(ranking.rank(tx.as_mut(), user(&carol)).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_recomputed_scan_ranks_livestreams_by_reactions_and_tips() {
        let primary = MemoryPrimaryStore::new();
        let owner = primary.add_user("owner");
        let fan = primary.add_user("fan");
        let quiet = primary.add_livestream(owner.id, "quiet");
        let tipped = primary.add_livestream(owner.id, "tipped");
        let busy = primary.add_livestream(owner.id, "busy");
        primary.add_livecomment(fan.id, tipped.id, "tip", 2);
        primary.add_reaction(fan.id, busy.id, "fire");
        primary.add_reaction(fan.id, busy.id, "fire");
        primary.add_reaction(fan.id, busy.id, "fire");

        let mut tx = primary.begin().await.unwrap();
        let ranking = RecomputedScanRanking::new();

        let mut ranks = Vec::new();
        for id in [busy.id, tipped.id, quiet.id] {
            ranks.push(
                ranking
                    .rank(tx.as_mut(), RankSubject::Livestream(id))
                    .await
                    .unwrap(),
            );
        }
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_recomputed_scan_unknown_user_is_internal() {
        let primary = MemoryPrimaryStore::new();
        primary.add_user("alice");
        let mut tx = primary.begin().await.unwrap();

        let err = RecomputedScanRanking::new()
            .rank(tx.as_mut(), RankSubject::User { id: 9, name: "ghost" })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
    }
}
