//! Livestream service
//!
//! Viewer, live comment, and spam report mutations. Each commits its row first and
//! then hands the committed row to the write-path updater.

use live_core::entities::{Livestream, NewLiveComment, NewReport, ViewerHistoryEntry};
use live_core::error::DomainError;
use live_core::traits::{
    LiveCommentQueries, LivestreamQueries, PrimaryTx, ReportQueries, TagQueries,
    ViewerHistoryQueries,
};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::detail;
use super::error::ServiceResult;
use super::updater::WritePathUpdater;
use crate::dto::{LiveCommentResponse, PostLiveCommentRequest, ReportResponse, ViewerHistoryResponse};

/// Livestream service
pub struct LivestreamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LivestreamService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_livestream(
        tx: &mut dyn PrimaryTx,
        livestream_id: i64,
    ) -> ServiceResult<Livestream> {
        tx.find_livestream(livestream_id)
            .await?
            .ok_or_else(|| DomainError::LivestreamNotFound(livestream_id).into())
    }

    /// Record a viewer entering a livestream
    #[instrument(skip(self))]
    pub async fn enter(&self, livestream_id: i64, user_id: i64) -> ServiceResult<ViewerHistoryResponse> {
        let mut tx = self.ctx.primary().begin().await?;

        Self::require_livestream(tx.as_mut(), livestream_id).await?;
        let entry = ViewerHistoryEntry::new(user_id, livestream_id);
        tx.insert_viewer_history(&entry).await?;

        tx.commit().await?;

        WritePathUpdater::new(self.ctx.cache())
            .viewer_entered(livestream_id)
            .await?;

        info!(livestream_id, user_id, "Viewer entered");
        Ok(ViewerHistoryResponse::from(&entry))
    }

    /// Post a live comment, optionally carrying a tip
    #[instrument(skip(self, request))]
    pub async fn post_livecomment(
        &self,
        livestream_id: i64,
        user_id: i64,
        request: PostLiveCommentRequest,
    ) -> ServiceResult<LiveCommentResponse> {
        let mut tx = self.ctx.primary().begin().await?;

        let livestream = Self::require_livestream(tx.as_mut(), livestream_id).await?;
        let comment = tx
            .insert_livecomment(NewLiveComment::new(
                user_id,
                livestream_id,
                request.comment,
                request.tip,
            ))
            .await?;
        let response =
            detail::livecomment_response(tx.as_mut(), self.ctx.cache(), comment.clone(), livestream)
                .await?;

        tx.commit().await?;

        WritePathUpdater::new(self.ctx.cache())
            .livecomment_posted(&comment)
            .await?;

        info!(
            livecomment_id = comment.id,
            livestream_id,
            user_id,
            tip = comment.tip,
            "Live comment posted"
        );
        Ok(response)
    }

    /// File a spam report against a comment of this livestream
    #[instrument(skip(self))]
    pub async fn report_livecomment(
        &self,
        livestream_id: i64,
        livecomment_id: i64,
        user_id: i64,
    ) -> ServiceResult<ReportResponse> {
        let mut tx = self.ctx.primary().begin().await?;

        let livestream = Self::require_livestream(tx.as_mut(), livestream_id).await?;
        let comment = tx
            .find_livecomment(livecomment_id)
            .await?
            .filter(|c| c.livestream_id == livestream_id)
            .ok_or(DomainError::LiveCommentNotFound(livecomment_id))?;

        let reporter = detail::user_response(tx.as_mut(), user_id).await?;
        let report = tx
            .insert_report(NewReport::new(user_id, livestream_id, livecomment_id))
            .await?;
        let livecomment =
            detail::livecomment_response(tx.as_mut(), self.ctx.cache(), comment, livestream).await?;

        tx.commit().await?;

        WritePathUpdater::new(self.ctx.cache())
            .report_filed(&report)
            .await?;

        info!(report_id = report.id, livestream_id, livecomment_id, "Live comment reported");
        Ok(ReportResponse::new(&report, reporter, livecomment))
    }

    /// Register a livestream created elsewhere with the cache.
    ///
    /// Called after the creating transaction has committed; reads the livestream and
    /// its tags back from the primary store.
    #[instrument(skip(self))]
    pub async fn livestream_created(&self, livestream_id: i64) -> ServiceResult<()> {
        let mut tx = self.ctx.primary().begin().await?;

        let livestream = Self::require_livestream(tx.as_mut(), livestream_id).await?;
        let tag_ids = tx.tag_ids_for_livestream(livestream_id).await?;

        tx.commit().await?;

        WritePathUpdater::new(self.ctx.cache())
            .livestream_created(&livestream, &tag_ids)
            .await?;

        info!(livestream_id, tags = tag_ids.len(), "Livestream registered in cache");
        Ok(())
    }
}
