//! Statistics handlers

use axum::{
    extract::{Path, State},
    Json,
};
use live_service::dto::{LivestreamStatisticsResponse, UserStatisticsResponse};
use live_service::StatisticsService;

use crate::extractors::{AuthUser, LivestreamPath, UsernamePath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Per-livestream statistics
///
/// GET /api/livestream/{livestream_id}/statistics
pub async fn get_livestream_statistics(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<LivestreamPath>,
) -> ApiResult<Json<LivestreamStatisticsResponse>> {
    let livestream_id = path.livestream_id()?;

    let service = StatisticsService::new(state.service_context());
    Ok(Json(service.livestream_statistics(livestream_id).await?))
}

/// Per-user statistics
///
/// GET /api/user/{username}/statistics
pub async fn get_user_statistics(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UsernamePath>,
) -> ApiResult<Json<UserStatisticsResponse>> {
    let service = StatisticsService::new(state.service_context());
    Ok(Json(service.user_statistics(&path.username).await?))
}
