//! In-memory primary store
//!
//! Same query semantics as the PostgreSQL store, held behind a mutex. A transaction
//! buffers its inserts and publishes them on commit; ids come from shared sequences at
//! insert time, so a rolled back transaction leaves gaps like a real sequence would.
//! Reads inside a transaction see committed rows plus the transaction's own inserts.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use live_core::entities::{
    LiveComment, Livestream, LivestreamTag, NewLiveComment, NewReaction, NewReport, Reaction,
    Report, Tag, User, ViewerHistoryEntry,
};
use live_core::traits::{
    LiveCommentQueries, LivestreamQueries, PrimaryStore, PrimaryTx, ReactionQueries, RepoResult,
    ReportQueries, TagQueries, UserQueries, ViewerHistoryQueries,
};

#[derive(Debug, Default, Clone)]
struct Tables {
    users: Vec<User>,
    livestreams: Vec<Livestream>,
    tags: Vec<Tag>,
    livestream_tags: Vec<LivestreamTag>,
    reactions: Vec<Reaction>,
    livecomments: Vec<LiveComment>,
    viewer_history: Vec<ViewerHistoryEntry>,
    reports: Vec<Report>,
}

impl Tables {
    fn append(&mut self, other: Tables) {
        self.users.extend(other.users);
        self.livestreams.extend(other.livestreams);
        self.tags.extend(other.tags);
        self.livestream_tags.extend(other.livestream_tags);
        self.reactions.extend(other.reactions);
        self.livecomments.extend(other.livecomments);
        self.viewer_history.extend(other.viewer_history);
        self.reports.extend(other.reports);
    }

    fn livestream_ids_owned_by(&self, user_id: i64) -> Vec<i64> {
        self.livestreams
            .iter()
            .filter(|l| l.user_id == user_id)
            .map(|l| l.id)
            .collect()
    }
}

#[derive(Debug, Default)]
struct Sequences {
    user: i64,
    livestream: i64,
    tag: i64,
    reaction: i64,
    livecomment: i64,
    report: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

#[derive(Debug, Default)]
struct Shared {
    tables: Tables,
    sequences: Sequences,
}

/// In-memory primary store
#[derive(Debug, Clone, Default)]
pub struct MemoryPrimaryStore {
    shared: Arc<Mutex<Shared>>,
}

impl MemoryPrimaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Seeding (committed immediately)
    // =========================================================================

    pub fn add_user(&self, name: &str) -> User {
        let mut shared = self.shared.lock();
        let user = User::new(next_id(&mut shared.sequences.user), name);
        shared.tables.users.push(user.clone());
        user
    }

    pub fn add_livestream(&self, owner_id: i64, title: &str) -> Livestream {
        let mut shared = self.shared.lock();
        let livestream =
            Livestream::new(next_id(&mut shared.sequences.livestream), owner_id, title);
        shared.tables.livestreams.push(livestream.clone());
        livestream
    }

    pub fn add_tag(&self, name: &str) -> Tag {
        let mut shared = self.shared.lock();
        let tag = Tag::new(next_id(&mut shared.sequences.tag), name);
        shared.tables.tags.push(tag.clone());
        tag
    }

    pub fn tag_livestream(&self, livestream_id: i64, tag_id: i64) {
        self.shared.lock().tables.livestream_tags.push(LivestreamTag {
            livestream_id,
            tag_id,
        });
    }

    pub fn add_reaction(&self, user_id: i64, livestream_id: i64, emoji_name: &str) -> Reaction {
        let mut shared = self.shared.lock();
        let reaction = NewReaction::new(user_id, livestream_id, emoji_name)
            .into_reaction(next_id(&mut shared.sequences.reaction));
        shared.tables.reactions.push(reaction.clone());
        reaction
    }

    pub fn add_livecomment(
        &self,
        user_id: i64,
        livestream_id: i64,
        comment: &str,
        tip: i64,
    ) -> LiveComment {
        let mut shared = self.shared.lock();
        let livecomment = NewLiveComment::new(user_id, livestream_id, comment, tip)
            .into_livecomment(next_id(&mut shared.sequences.livecomment));
        shared.tables.livecomments.push(livecomment.clone());
        livecomment
    }

    pub fn add_viewer(&self, user_id: i64, livestream_id: i64) {
        self.shared
            .lock()
            .tables
            .viewer_history
            .push(ViewerHistoryEntry::new(user_id, livestream_id));
    }

    pub fn add_report(&self, user_id: i64, livestream_id: i64, livecomment_id: i64) -> Report {
        let mut shared = self.shared.lock();
        let report = NewReport::new(user_id, livestream_id, livecomment_id)
            .into_report(next_id(&mut shared.sequences.report));
        shared.tables.reports.push(report.clone());
        report
    }
}

#[async_trait]
impl PrimaryStore for MemoryPrimaryStore {
    async fn begin(&self) -> RepoResult<Box<dyn PrimaryTx>> {
        Ok(Box::new(MemoryTx {
            shared: Arc::clone(&self.shared),
            pending: Tables::default(),
        }))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Transaction over a [`MemoryPrimaryStore`]
pub struct MemoryTx {
    shared: Arc<Mutex<Shared>>,
    pending: Tables,
}

impl MemoryTx {
    /// Committed rows plus this transaction's inserts
    fn view(&self) -> Tables {
        let mut tables = self.shared.lock().tables.clone();
        tables.append(self.pending.clone());
        tables
    }

    fn allocate(&self, pick: fn(&mut Sequences) -> &mut i64) -> i64 {
        let mut shared = self.shared.lock();
        next_id(pick(&mut shared.sequences))
    }
}

#[async_trait]
impl PrimaryTx for MemoryTx {
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let MemoryTx { shared, pending } = *self;
        shared.lock().tables.append(pending);
        Ok(())
    }
}

#[async_trait]
impl TagQueries for MemoryTx {
    async fn all_tags(&mut self) -> RepoResult<Vec<Tag>> {
        let mut tags = self.view().tags;
        tags.sort_by_key(|t| t.id);
        Ok(tags)
    }

    async fn all_livestream_tags(&mut self) -> RepoResult<Vec<LivestreamTag>> {
        Ok(self.view().livestream_tags)
    }

    async fn tag_ids_for_livestream(&mut self, livestream_id: i64) -> RepoResult<Vec<i64>> {
        Ok(self
            .view()
            .livestream_tags
            .into_iter()
            .filter(|lt| lt.livestream_id == livestream_id)
            .map(|lt| lt.tag_id)
            .collect())
    }
}

#[async_trait]
impl UserQueries for MemoryTx {
    async fn all_users(&mut self) -> RepoResult<Vec<User>> {
        let mut users = self.view().users;
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_user(&mut self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.view().users.into_iter().find(|u| u.id == id))
    }

    async fn find_user_by_name(&mut self, name: &str) -> RepoResult<Option<User>> {
        Ok(self.view().users.into_iter().find(|u| u.name == name))
    }

    async fn find_users_by_ids(&mut self, ids: &[i64]) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self
            .view()
            .users
            .into_iter()
            .filter(|u| ids.contains(&u.id))
            .collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}

#[async_trait]
impl LivestreamQueries for MemoryTx {
    async fn all_livestreams(&mut self) -> RepoResult<Vec<Livestream>> {
        let mut livestreams = self.view().livestreams;
        livestreams.sort_by_key(|l| l.id);
        Ok(livestreams)
    }

    async fn find_livestream(&mut self, id: i64) -> RepoResult<Option<Livestream>> {
        Ok(self.view().livestreams.into_iter().find(|l| l.id == id))
    }

    async fn livestreams_by_owner(&mut self, user_id: i64) -> RepoResult<Vec<Livestream>> {
        let mut livestreams: Vec<Livestream> = self
            .view()
            .livestreams
            .into_iter()
            .filter(|l| l.user_id == user_id)
            .collect();
        livestreams.sort_by_key(|l| l.id);
        Ok(livestreams)
    }
}

#[async_trait]
impl ReactionQueries for MemoryTx {
    async fn all_reactions(&mut self) -> RepoResult<Vec<Reaction>> {
        let mut reactions = self.view().reactions;
        reactions.sort_by_key(|r| r.id);
        Ok(reactions)
    }

    async fn insert_reaction(&mut self, reaction: NewReaction) -> RepoResult<Reaction> {
        let reaction = reaction.into_reaction(self.allocate(|s| &mut s.reaction));
        self.pending.reactions.push(reaction.clone());
        Ok(reaction)
    }

    async fn recent_reactions(
        &mut self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Reaction>> {
        let mut reactions: Vec<Reaction> = self
            .view()
            .reactions
            .into_iter()
            .filter(|r| r.livestream_id == livestream_id)
            .collect();
        reactions.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        if let Some(limit) = limit {
            reactions.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        }
        Ok(reactions)
    }

    async fn count_reactions(&mut self, livestream_id: i64) -> RepoResult<i64> {
        Ok(self
            .view()
            .reactions
            .iter()
            .filter(|r| r.livestream_id == livestream_id)
            .count() as i64)
    }

    async fn count_reactions_received(&mut self, user_id: i64) -> RepoResult<i64> {
        let tables = self.view();
        let owned = tables.livestream_ids_owned_by(user_id);
        Ok(tables
            .reactions
            .iter()
            .filter(|r| owned.contains(&r.livestream_id))
            .count() as i64)
    }

    async fn favorite_emoji(&mut self, user_id: i64) -> RepoResult<Option<String>> {
        let tables = self.view();
        let owned = tables.livestream_ids_owned_by(user_id);

        let mut counts: HashMap<&str, i64> = HashMap::new();
        for reaction in tables
            .reactions
            .iter()
            .filter(|r| owned.contains(&r.livestream_id))
        {
            *counts.entry(reaction.emoji_name.as_str()).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .max_by(|a, b| (a.1, a.0).cmp(&(b.1, b.0)))
            .map(|(emoji, _)| emoji.to_string()))
    }
}

#[async_trait]
impl LiveCommentQueries for MemoryTx {
    async fn all_livecomments(&mut self) -> RepoResult<Vec<LiveComment>> {
        let mut livecomments = self.view().livecomments;
        livecomments.sort_by_key(|c| c.id);
        Ok(livecomments)
    }

    async fn find_livecomment(&mut self, id: i64) -> RepoResult<Option<LiveComment>> {
        Ok(self.view().livecomments.into_iter().find(|c| c.id == id))
    }

    async fn livecomments_for_livestream(
        &mut self,
        livestream_id: i64,
    ) -> RepoResult<Vec<LiveComment>> {
        let mut livecomments: Vec<LiveComment> = self
            .view()
            .livecomments
            .into_iter()
            .filter(|c| c.livestream_id == livestream_id)
            .collect();
        livecomments.sort_by_key(|c| c.id);
        Ok(livecomments)
    }

    async fn insert_livecomment(&mut self, comment: NewLiveComment) -> RepoResult<LiveComment> {
        let livecomment = comment.into_livecomment(self.allocate(|s| &mut s.livecomment));
        self.pending.livecomments.push(livecomment.clone());
        Ok(livecomment)
    }

    async fn max_tip(&mut self, livestream_id: i64) -> RepoResult<i64> {
        Ok(self
            .view()
            .livecomments
            .iter()
            .filter(|c| c.livestream_id == livestream_id)
            .map(|c| c.tip)
            .max()
            .unwrap_or(0))
    }

    async fn sum_tips(&mut self, livestream_id: i64) -> RepoResult<i64> {
        Ok(self
            .view()
            .livecomments
            .iter()
            .filter(|c| c.livestream_id == livestream_id)
            .map(|c| c.tip)
            .sum())
    }

    async fn sum_tips_received(&mut self, user_id: i64) -> RepoResult<i64> {
        let tables = self.view();
        let owned = tables.livestream_ids_owned_by(user_id);
        Ok(tables
            .livecomments
            .iter()
            .filter(|c| owned.contains(&c.livestream_id))
            .map(|c| c.tip)
            .sum())
    }
}

#[async_trait]
impl ViewerHistoryQueries for MemoryTx {
    async fn all_viewer_history(&mut self) -> RepoResult<Vec<ViewerHistoryEntry>> {
        Ok(self.view().viewer_history)
    }

    async fn count_viewers(&mut self, livestream_id: i64) -> RepoResult<i64> {
        Ok(self
            .view()
            .viewer_history
            .iter()
            .filter(|v| v.livestream_id == livestream_id)
            .count() as i64)
    }

    async fn insert_viewer_history(&mut self, entry: &ViewerHistoryEntry) -> RepoResult<()> {
        self.pending.viewer_history.push(entry.clone());
        Ok(())
    }
}

#[async_trait]
impl ReportQueries for MemoryTx {
    async fn all_reports(&mut self) -> RepoResult<Vec<Report>> {
        let mut reports = self.view().reports;
        reports.sort_by_key(|r| r.id);
        Ok(reports)
    }

    async fn insert_report(&mut self, report: NewReport) -> RepoResult<Report> {
        let report = report.into_report(self.allocate(|s| &mut s.report));
        self.pending.reports.push(report.clone());
        Ok(report)
    }
}
