//! Livestream handlers
//!
//! Viewer entry, live comments, and spam reports.

use axum::extract::{Path, State};
use live_service::dto::{
    LiveCommentResponse, PostLiveCommentRequest, ReportResponse, ViewerHistoryResponse,
};
use live_service::LivestreamService;

use crate::extractors::{AuthUser, LivecommentPath, LivestreamPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Enter a livestream as a viewer
///
/// POST /api/livestream/{livestream_id}/enter
pub async fn enter_livestream(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<LivestreamPath>,
) -> ApiResult<Created<ViewerHistoryResponse>> {
    let livestream_id = path.livestream_id()?;

    let service = LivestreamService::new(state.service_context());
    Ok(Created(service.enter(livestream_id, auth.user_id).await?))
}

/// Post a live comment
///
/// POST /api/livestream/{livestream_id}/livecomment
pub async fn post_livecomment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<LivestreamPath>,
    ValidatedJson(request): ValidatedJson<PostLiveCommentRequest>,
) -> ApiResult<Created<LiveCommentResponse>> {
    let livestream_id = path.livestream_id()?;

    let service = LivestreamService::new(state.service_context());
    let comment = service
        .post_livecomment(livestream_id, auth.user_id, request)
        .await?;
    Ok(Created(comment))
}

/// Report a live comment as spam
///
/// POST /api/livestream/{livestream_id}/livecomment/{livecomment_id}/report
pub async fn report_livecomment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<LivecommentPath>,
) -> ApiResult<Created<ReportResponse>> {
    let livestream_id = path.livestream_id()?;
    let livecomment_id = path.livecomment_id()?;

    let service = LivestreamService::new(state.service_context());
    let report = service
        .report_livecomment(livestream_id, livecomment_id, auth.user_id)
        .await?;
    Ok(Created(report))
}
