//! Reaction handlers
//!
//! Endpoints for livestream reactions.

use axum::{
    extract::{Path, State},
    Json,
};
use live_service::dto::{PostReactionRequest, ReactionResponse};
use live_service::ReactionService;

use crate::extractors::{AuthUser, LivestreamPath, ReactionLimit, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// React to a livestream
///
/// POST /api/livestream/{livestream_id}/reaction
pub async fn post_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<LivestreamPath>,
    ValidatedJson(request): ValidatedJson<PostReactionRequest>,
) -> ApiResult<Created<ReactionResponse>> {
    let livestream_id = path.livestream_id()?;

    let service = ReactionService::new(state.service_context());
    let reaction = service
        .post_reaction(livestream_id, auth.user_id, request)
        .await?;
    Ok(Created(reaction))
}

/// List recent reactions on a livestream
///
/// GET /api/livestream/{livestream_id}/reaction?limit=N
pub async fn list_reactions(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<LivestreamPath>,
    ReactionLimit(limit): ReactionLimit,
) -> ApiResult<Json<Vec<ReactionResponse>>> {
    let livestream_id = path.livestream_id()?;

    let service = ReactionService::new(state.service_context());
    Ok(Json(service.list_reactions(livestream_id, limit).await?))
}
