//! Typed facade over a [`CacheStore`] for the derived structures
//!
//! Applies the cache-miss rules in one place: counters and lists read as zero/empty when
//! absent, while the livestream → owner lookup and leaderboard ranks must exist and
//! surface [`DomainError::CacheKeyMissing`] otherwise.

use std::sync::Arc;

use live_core::entities::Tag;
use live_core::error::DomainError;
use live_core::traits::{CacheStore, RepoResult};

use crate::keys::{self, Leaderboard};

/// Shared handle to the derived cache
#[derive(Clone)]
pub struct DerivedCache {
    store: Arc<dyn CacheStore>,
}

impl std::fmt::Debug for DerivedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedCache").finish_non_exhaustive()
    }
}

impl DerivedCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    pub async fn flush(&self) -> RepoResult<()> {
        self.store.flush_all().await
    }

    async fn counter(&self, key: &str) -> RepoResult<i64> {
        match self.store.get(key).await? {
            Some(value) => keys::decode_int(key, &value),
            None => Ok(0),
        }
    }

    // =========================================================================
    // Tag catalog
    // =========================================================================

    /// Write both point lookups and the catalog list.
    /// Entries are LPUSHed in the given order, so reading the list back yields them reversed.
    pub async fn store_tag_catalog(&self, tags: &[Tag]) -> RepoResult<()> {
        let by_id: Vec<(String, String)> = tags
            .iter()
            .map(|t| (keys::tag_id_to_name_key(t.id), t.name.clone()))
            .collect();
        let by_name: Vec<(String, String)> = tags
            .iter()
            .map(|t| (keys::tag_name_to_id_key(&t.name), t.id.to_string()))
            .collect();
        let entries: Vec<String> = tags.iter().map(keys::encode_tag_entry).collect();

        self.store.mset(&by_id).await?;
        self.store.mset(&by_name).await?;
        self.store.lpush(keys::TAGS_KEY, &entries).await
    }

    pub async fn tags(&self) -> RepoResult<Vec<Tag>> {
        self.store
            .lrange_all(keys::TAGS_KEY)
            .await?
            .iter()
            .map(|entry| keys::decode_tag_entry(entry))
            .collect()
    }

    pub async fn tag_name(&self, tag_id: i64) -> RepoResult<Option<String>> {
        self.store.get(&keys::tag_id_to_name_key(tag_id)).await
    }

    pub async fn tag_id(&self, name: &str) -> RepoResult<Option<i64>> {
        let key = keys::tag_name_to_id_key(name);
        match self.store.get(&key).await? {
            Some(value) => keys::decode_int(&key, &value).map(Some),
            None => Ok(None),
        }
    }

    // =========================================================================
    // Livestream tag index
    // =========================================================================

    pub async fn push_livestream_tags(&self, livestream_id: i64, tag_ids: &[i64]) -> RepoResult<()> {
        let values: Vec<String> = tag_ids.iter().map(ToString::to_string).collect();
        self.store
            .lpush(&keys::livestream_tags_key(livestream_id), &values)
            .await
    }

    /// Replace whatever tag ids are cached for the livestream
    pub async fn set_livestream_tags(&self, livestream_id: i64, tag_ids: &[i64]) -> RepoResult<()> {
        self.store.del(&keys::livestream_tags_key(livestream_id)).await?;
        self.push_livestream_tags(livestream_id, tag_ids).await
    }

    pub async fn livestream_tag_ids(&self, livestream_id: i64) -> RepoResult<Vec<i64>> {
        let key = keys::livestream_tags_key(livestream_id);
        self.store
            .lrange_all(&key)
            .await?
            .iter()
            .map(|value| keys::decode_int(&key, value))
            .collect()
    }

    /// Tags of a livestream; ids whose name is not cached are skipped
    pub async fn livestream_tags(&self, livestream_id: i64) -> RepoResult<Vec<Tag>> {
        let mut tags = Vec::new();
        for tag_id in self.livestream_tag_ids(livestream_id).await? {
            if let Some(name) = self.tag_name(tag_id).await? {
                tags.push(Tag::new(tag_id, name));
            }
        }
        Ok(tags)
    }

    // =========================================================================
    // Tip index
    // =========================================================================

    /// `(livestream_id, livecomment_id, tip)` triples
    pub async fn store_tips(&self, tips: &[(i64, i64, i64)]) -> RepoResult<()> {
        let entries: Vec<(String, String)> = tips
            .iter()
            .map(|(stream, comment, tip)| {
                (keys::livecomment_tip_key(*stream, *comment), tip.to_string())
            })
            .collect();
        self.store.mset(&entries).await
    }

    pub async fn set_tip(&self, livestream_id: i64, livecomment_id: i64, tip: i64) -> RepoResult<()> {
        self.store
            .set(
                &keys::livecomment_tip_key(livestream_id, livecomment_id),
                &tip.to_string(),
            )
            .await
    }

    pub async fn tip(&self, livestream_id: i64, livecomment_id: i64) -> RepoResult<Option<i64>> {
        let key = keys::livecomment_tip_key(livestream_id, livecomment_id);
        match self.store.get(&key).await? {
            Some(value) => keys::decode_int(&key, &value).map(Some),
            None => Ok(None),
        }
    }

    // =========================================================================
    // Livestream -> owner lookup
    // =========================================================================

    /// `(livestream_id, owner_id)` pairs
    pub async fn store_livestream_owners(&self, owners: &[(i64, i64)]) -> RepoResult<()> {
        let entries: Vec<(String, String)> = owners
            .iter()
            .map(|(stream, owner)| (keys::livestream_owner_key(*stream), owner.to_string()))
            .collect();
        self.store.mset(&entries).await
    }

    /// Owner of a livestream; a miss is [`DomainError::CacheKeyMissing`]
    pub async fn livestream_owner(&self, livestream_id: i64) -> RepoResult<i64> {
        let key = keys::livestream_owner_key(livestream_id);
        match self.store.get(&key).await? {
            Some(value) => keys::decode_int(&key, &value),
            None => Err(DomainError::CacheKeyMissing(key)),
        }
    }

    // =========================================================================
    // Counters (absent reads as zero)
    // =========================================================================

    pub async fn incr_viewers(&self, livestream_id: i64) -> RepoResult<i64> {
        self.store.incr(&keys::viewers_key(livestream_id)).await
    }

    pub async fn viewers(&self, livestream_id: i64) -> RepoResult<i64> {
        self.counter(&keys::viewers_key(livestream_id)).await
    }

    pub async fn incr_livestream_reactions(&self, livestream_id: i64) -> RepoResult<i64> {
        self.store
            .incr(&keys::livestream_reactions_key(livestream_id))
            .await
    }

    pub async fn livestream_reactions(&self, livestream_id: i64) -> RepoResult<i64> {
        self.counter(&keys::livestream_reactions_key(livestream_id))
            .await
    }

    pub async fn incr_user_reactions(&self, user_id: i64) -> RepoResult<i64> {
        self.store.incr(&keys::user_reactions_key(user_id)).await
    }

    pub async fn user_reactions(&self, user_id: i64) -> RepoResult<i64> {
        self.counter(&keys::user_reactions_key(user_id)).await
    }

    pub async fn incr_reports(&self, livestream_id: i64) -> RepoResult<i64> {
        self.store.incr(&keys::spam_reports_key(livestream_id)).await
    }

    pub async fn reports(&self, livestream_id: i64) -> RepoResult<i64> {
        self.counter(&keys::spam_reports_key(livestream_id)).await
    }

    // =========================================================================
    // Leaderboards
    // =========================================================================

    pub async fn leaderboard_incr(&self, board: Leaderboard, id: i64, delta: i64) -> RepoResult<i64> {
        self.store
            .zincr(board.key(), &keys::leaderboard_member(id), delta)
            .await
    }

    pub async fn leaderboard_score(&self, board: Leaderboard, id: i64) -> RepoResult<Option<i64>> {
        self.store
            .zscore(board.key(), &keys::leaderboard_member(id))
            .await
    }

    /// 1-based rank by descending score; an unknown member is [`DomainError::CacheKeyMissing`]
    pub async fn leaderboard_rank(&self, board: Leaderboard, id: i64) -> RepoResult<i64> {
        let member = keys::leaderboard_member(id);
        match self.store.zrevrank(board.key(), &member).await? {
            Some(position) => Ok(position as i64 + 1),
            None => Err(DomainError::CacheKeyMissing(format!(
                "{}[{member}]",
                board.key()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCacheStore;

    fn cache() -> (Arc<MemoryCacheStore>, DerivedCache) {
        let store = Arc::new(MemoryCacheStore::new());
        (Arc::clone(&store), DerivedCache::new(store))
    }

    #[tokio::test]
    async fn test_tag_catalog_lists_newest_first() {
        let (store, cache) = cache();
        let tags = vec![
            Tag::new(1, "game"),
            Tag::new(2, "talk:live"),
            Tag::new(3, "music"),
        ];
        cache.store_tag_catalog(&tags).await.unwrap();

        let ids: Vec<i64> = cache.tags().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(cache.tags().await.unwrap()[1], Tag::new(2, "talk:live"));
        assert_eq!(cache.tag_name(1).await.unwrap().as_deref(), Some("game"));
        assert_eq!(cache.tag_id("talk:live").await.unwrap(), Some(2));
        assert_eq!(
            store.get("name2tag_id:game").await.unwrap().as_deref(),
            Some("1")
        );
    }

    #[tokio::test]
    async fn test_counters_default_to_zero() {
        let (_, cache) = cache();
        assert_eq!(cache.viewers(1).await.unwrap(), 0);
        assert_eq!(cache.livestream_reactions(1).await.unwrap(), 0);
        assert_eq!(cache.user_reactions(1).await.unwrap(), 0);
        assert_eq!(cache.reports(1).await.unwrap(), 0);

        cache.incr_viewers(1).await.unwrap();
        assert_eq!(cache.viewers(1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_counter_is_internal_error() {
        let (store, cache) = cache();
        store.set("num_viewers:1", "lots").await.unwrap();
        assert!(matches!(
            cache.viewers(1).await,
            Err(DomainError::InternalError(_))
        ));
    }

    #[tokio::test]
    async fn test_owner_lookup_miss_is_cache_key_missing() {
        let (_, cache) = cache();
        assert!(matches!(
            cache.livestream_owner(5).await,
            Err(DomainError::CacheKeyMissing(key)) if key == "livestream_owner:5"
        ));

        cache.store_livestream_owners(&[(5, 9)]).await.unwrap();
        assert_eq!(cache.livestream_owner(5).await.unwrap(), 9);
    }

    #[tokio::test]
    async fn test_livestream_tags_skip_unknown_names() {
        let (_, cache) = cache();
        cache.store_tag_catalog(&[Tag::new(1, "game")]).await.unwrap();
        cache.push_livestream_tags(3, &[1, 99]).await.unwrap();

        assert_eq!(cache.livestream_tags(3).await.unwrap(), vec![Tag::new(1, "game")]);
        assert!(cache.livestream_tags(4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_leaderboard_rank_ties_favor_larger_id() {
        let (_, cache) = cache();
        for id in [9, 10, 11] {
            cache.leaderboard_incr(Leaderboard::Livestreams, id, 2).await.unwrap();
        }
        cache.leaderboard_incr(Leaderboard::Livestreams, 9, 1).await.unwrap();

        assert_eq!(cache.leaderboard_rank(Leaderboard::Livestreams, 9).await.unwrap(), 1);
        assert_eq!(cache.leaderboard_rank(Leaderboard::Livestreams, 11).await.unwrap(), 2);
        assert_eq!(cache.leaderboard_rank(Leaderboard::Livestreams, 10).await.unwrap(), 3);
        assert!(matches!(
            cache.leaderboard_rank(Leaderboard::Users, 9).await,
            Err(DomainError::CacheKeyMissing(_))
        ));
    }

    #[tokio::test]
    async fn test_tips() {
        let (_, cache) = cache();
        cache.store_tips(&[(1, 2, 300)]).await.unwrap();
        cache.set_tip(1, 3, 0).await.unwrap();

        assert_eq!(cache.tip(1, 2).await.unwrap(), Some(300));
        assert_eq!(cache.tip(1, 3).await.unwrap(), Some(0));
        assert_eq!(cache.tip(1, 4).await.unwrap(), None);
    }
}
