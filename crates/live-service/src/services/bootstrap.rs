//! Cache bootstrapper
//!
//! Discards the whole cache and rebuilds every derived structure from one primary
//! store transaction. Counters are rebuilt with one increment per source row, so the
//! result equals the row count on the freshly flushed store.

use std::collections::BTreeMap;

use live_cache::Leaderboard;
use live_core::entities::{LiveComment, Livestream, LivestreamTag, Reaction, Report, Tag, ViewerHistoryEntry};
use live_core::traits::{
    LiveCommentQueries, LivestreamQueries, ReactionQueries, ReportQueries, TagQueries,
    ViewerHistoryQueries,
};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Row counts per rebuilt structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub tags: usize,
    pub livestream_tags: usize,
    pub tips: usize,
    pub livestreams: usize,
    pub viewers: usize,
    pub reactions: usize,
    pub reports: usize,
}

/// Snapshot of every table the cache is derived from
struct SourceRows {
    tags: Vec<Tag>,
    livestream_tags: Vec<LivestreamTag>,
    livecomments: Vec<LiveComment>,
    livestreams: Vec<Livestream>,
    viewers: Vec<ViewerHistoryEntry>,
    reactions: Vec<Reaction>,
    reports: Vec<Report>,
}

/// Full rebuild of the derived cache
pub struct CacheBootstrapper<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CacheBootstrapper<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flush the cache and rebuild it.
    ///
    /// Must not run concurrently with write traffic. Any failure aborts the rebuild and
    /// is returned; re-running repairs a partially rebuilt cache.
    #[instrument(skip(self))]
    pub async fn run(&self) -> ServiceResult<BootstrapReport> {
        let rows = self.load().await?;
        let cache = self.ctx.cache();

        cache.flush().await?;
        info!("Cache flushed");

        let mut report = BootstrapReport {
            tags: rows.tags.len(),
            ..BootstrapReport::default()
        };

        cache.store_tag_catalog(&rows.tags).await?;
        info!(count = report.tags, "Tag catalog rebuilt");

        report.livestream_tags = rows.livestream_tags.len();
        for (livestream_id, tag_ids) in group_tags(&rows.livestream_tags) {
            cache.push_livestream_tags(livestream_id, &tag_ids).await?;
        }
        info!(count = report.livestream_tags, "Livestream tag index rebuilt");

        let tips: Vec<(i64, i64, i64)> = rows
            .livecomments
            .iter()
            .map(|c| (c.livestream_id, c.id, c.tip))
            .collect();
        report.tips = tips.len();
        cache.store_tips(&tips).await?;
        info!(count = report.tips, "Tip index rebuilt");

        let owners: BTreeMap<i64, i64> = rows
            .livestreams
            .iter()
            .map(|l| (l.id, l.user_id))
            .collect();
        let owner_pairs: Vec<(i64, i64)> = owners.iter().map(|(&l, &u)| (l, u)).collect();
        report.livestreams = owner_pairs.len();
        cache.store_livestream_owners(&owner_pairs).await?;
        info!(count = report.livestreams, "Livestream owners rebuilt");

        report.viewers = rows.viewers.len();
        for entry in &rows.viewers {
            cache.incr_viewers(entry.livestream_id).await?;
        }
        info!(count = report.viewers, "Viewer counters rebuilt");

        report.reactions = rows.reactions.len();
        let mut stream_scores: BTreeMap<i64, i64> = owners.keys().map(|&l| (l, 0)).collect();
        let mut user_scores: BTreeMap<i64, i64> = owners.values().map(|&u| (u, 0)).collect();
        for reaction in &rows.reactions {
            cache.incr_livestream_reactions(reaction.livestream_id).await?;
            *stream_scores.entry(reaction.livestream_id).or_default() += 1;

            match owners.get(&reaction.livestream_id) {
                Some(&owner_id) => {
                    cache.incr_user_reactions(owner_id).await?;
                    *user_scores.entry(owner_id).or_default() += 1;
                }
                None => warn!(
                    reaction_id = reaction.id,
                    livestream_id = reaction.livestream_id,
                    "Reaction references a missing livestream"
                ),
            }
        }
        info!(count = report.reactions, "Reaction counters rebuilt");

        for (&livestream_id, &score) in &stream_scores {
            cache
                .leaderboard_incr(Leaderboard::Livestreams, livestream_id, score)
                .await?;
        }
        for (&user_id, &score) in &user_scores {
            cache.leaderboard_incr(Leaderboard::Users, user_id, score).await?;
        }
        info!(
            livestreams = stream_scores.len(),
            users = user_scores.len(),
            "Leaderboards rebuilt"
        );

        report.reports = rows.reports.len();
        for row in &rows.reports {
            cache.incr_reports(row.livestream_id).await?;
        }
        info!(count = report.reports, "Report counters rebuilt");

        Ok(report)
    }

    async fn load(&self) -> ServiceResult<SourceRows> {
        let mut tx = self.ctx.primary().begin().await?;
        let rows = SourceRows {
            tags: tx.all_tags().await?,
            livestream_tags: tx.all_livestream_tags().await?,
            livecomments: tx.all_livecomments().await?,
            livestreams: tx.all_livestreams().await?,
            viewers: tx.all_viewer_history().await?,
            reactions: tx.all_reactions().await?,
            reports: tx.all_reports().await?,
        };
        tx.commit().await?;
        Ok(rows)
    }
}

/// Tag ids per livestream, keeping scan order within each livestream
fn group_tags(rows: &[LivestreamTag]) -> BTreeMap<i64, Vec<i64>> {
    let mut grouped: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.livestream_id).or_default().push(row.tag_id);
    }
    grouped
}
