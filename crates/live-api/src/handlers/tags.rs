//! Tag handlers

use axum::{extract::State, Json};
use live_service::dto::TagsResponse;
use live_service::TagService;

use crate::response::ApiResult;
use crate::state::AppState;

/// List the tag catalog
///
/// GET /api/tag
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<TagsResponse>> {
    let service = TagService::new(state.service_context());
    Ok(Json(service.list_tags().await?))
}
