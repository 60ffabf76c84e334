//! Primary store traits (ports) - the relational store of record
//!
//! All reads and writes happen inside a [`PrimaryTx`]. Dropping a transaction without
//! calling [`PrimaryTx::commit`] rolls it back. Query groups are split per table so the
//! infrastructure layer can implement them in separate files, and [`PrimaryTx`] ties
//! them together into a single object-safe handle.

use async_trait::async_trait;

use crate::entities::{
    LiveComment, Livestream, LivestreamTag, NewLiveComment, NewReaction, NewReport, Reaction,
    Report, Tag, User, ViewerHistoryEntry,
};
use crate::error::DomainError;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Store
// ============================================================================

#[async_trait]
pub trait PrimaryStore: Send + Sync {
    /// Open a new transaction
    async fn begin(&self) -> RepoResult<Box<dyn PrimaryTx>>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

#[async_trait]
pub trait PrimaryTx:
    TagQueries
    + UserQueries
    + LivestreamQueries
    + ReactionQueries
    + LiveCommentQueries
    + ViewerHistoryQueries
    + ReportQueries
    + Send
{
    /// Make all writes of this transaction durable
    async fn commit(self: Box<Self>) -> RepoResult<()>;
}

// ============================================================================
// Tags
// ============================================================================

#[async_trait]
pub trait TagQueries: Send {
    /// All tags ordered by id
    async fn all_tags(&mut self) -> RepoResult<Vec<Tag>>;

    /// All livestream/tag associations ordered by their row id
    async fn all_livestream_tags(&mut self) -> RepoResult<Vec<LivestreamTag>>;

    /// Tag ids attached to one livestream, in insertion order
    async fn tag_ids_for_livestream(&mut self, livestream_id: i64) -> RepoResult<Vec<i64>>;
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
pub trait UserQueries: Send {
    /// All users ordered by id
    async fn all_users(&mut self) -> RepoResult<Vec<User>>;

    /// Find user by ID
    async fn find_user(&mut self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by unique name
    async fn find_user_by_name(&mut self, name: &str) -> RepoResult<Option<User>>;

    /// Batch lookup; ids that do not exist are absent from the result
    async fn find_users_by_ids(&mut self, ids: &[i64]) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Livestreams
// ============================================================================

#[async_trait]
pub trait LivestreamQueries: Send {
    /// All livestreams ordered by id
    async fn all_livestreams(&mut self) -> RepoResult<Vec<Livestream>>;

    /// Find livestream by ID
    async fn find_livestream(&mut self, id: i64) -> RepoResult<Option<Livestream>>;

    /// Livestreams owned by a user, ordered by id
    async fn livestreams_by_owner(&mut self, user_id: i64) -> RepoResult<Vec<Livestream>>;
}

// ============================================================================
// Reactions
// ============================================================================

#[async_trait]
pub trait ReactionQueries: Send {
    /// All reactions ordered by id
    async fn all_reactions(&mut self) -> RepoResult<Vec<Reaction>>;

    /// Insert a reaction and return it with its assigned id
    async fn insert_reaction(&mut self, reaction: NewReaction) -> RepoResult<Reaction>;

    /// Reactions on a livestream, newest first, optionally capped at `limit` rows
    async fn recent_reactions(
        &mut self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Reaction>>;

    /// Number of reactions on one livestream
    async fn count_reactions(&mut self, livestream_id: i64) -> RepoResult<i64>;

    /// Number of reactions received across every livestream the user owns
    async fn count_reactions_received(&mut self, user_id: i64) -> RepoResult<i64>;

    /// Most frequent emoji across the user's livestreams.
    /// Ties go to the lexicographically greatest emoji name.
    async fn favorite_emoji(&mut self, user_id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Live comments
// ============================================================================

#[async_trait]
pub trait LiveCommentQueries: Send {
    /// All live comments ordered by id
    async fn all_livecomments(&mut self) -> RepoResult<Vec<LiveComment>>;

    /// Find live comment by ID
    async fn find_livecomment(&mut self, id: i64) -> RepoResult<Option<LiveComment>>;

    /// Live comments on one livestream ordered by id
    async fn livecomments_for_livestream(
        &mut self,
        livestream_id: i64,
    ) -> RepoResult<Vec<LiveComment>>;

    /// Insert a live comment and return it with its assigned id
    async fn insert_livecomment(&mut self, comment: NewLiveComment) -> RepoResult<LiveComment>;

    /// Largest tip on a livestream, zero when there are none
    async fn max_tip(&mut self, livestream_id: i64) -> RepoResult<i64>;

    /// Sum of tips on one livestream, zero when there are none
    async fn sum_tips(&mut self, livestream_id: i64) -> RepoResult<i64>;

    /// Sum of tips received across every livestream the user owns
    async fn sum_tips_received(&mut self, user_id: i64) -> RepoResult<i64>;
}

// ============================================================================
// Viewer history
// ============================================================================

#[async_trait]
pub trait ViewerHistoryQueries: Send {
    /// All viewer history rows in insertion order
    async fn all_viewer_history(&mut self) -> RepoResult<Vec<ViewerHistoryEntry>>;

    /// Number of viewer history rows for a livestream
    async fn count_viewers(&mut self, livestream_id: i64) -> RepoResult<i64>;

    /// Record that a user entered a livestream
    async fn insert_viewer_history(&mut self, entry: &ViewerHistoryEntry) -> RepoResult<()>;
}

// ============================================================================
// Spam reports
// ============================================================================

#[async_trait]
pub trait ReportQueries: Send {
    /// All spam reports ordered by id
    async fn all_reports(&mut self) -> RepoResult<Vec<Report>>;

    /// Insert a spam report and return it with its assigned id
    async fn insert_report(&mut self, report: NewReport) -> RepoResult<Report>;
}
