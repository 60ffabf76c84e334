//! System handlers

use axum::{extract::State, Json};
use live_service::dto::InitializeResponse;
use live_service::CacheBootstrapper;
use tracing::info;

use crate::response::ApiResult;
use crate::state::AppState;

/// Rebuild the derived cache from the primary store
///
/// POST /api/initialize
pub async fn initialize(State(state): State<AppState>) -> ApiResult<Json<InitializeResponse>> {
    let report = CacheBootstrapper::new(state.service_context()).run().await?;
    info!(?report, "Initialize completed");
    Ok(Json(InitializeResponse::rust()))
}
