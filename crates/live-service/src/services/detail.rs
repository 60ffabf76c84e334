//! Shared assembly of the user and livestream detail embedded in responses

use live_cache::DerivedCache;
use live_core::entities::{LiveComment, Livestream};
use live_core::error::DomainError;
use live_core::traits::{PrimaryTx, UserQueries};

use super::error::{ServiceError, ServiceResult};
use crate::dto::{LiveCommentResponse, LivestreamResponse, UserResponse};

pub(crate) async fn user_response(tx: &mut dyn PrimaryTx, user_id: i64) -> ServiceResult<UserResponse> {
    let user = tx
        .find_user(user_id)
        .await?
        .ok_or(DomainError::UserNotFound(user_id))?;
    Ok(UserResponse::from(user))
}

/// Owner comes from the primary store, tags from the cache's per-livestream tag index.
pub(crate) async fn livestream_response(
    tx: &mut dyn PrimaryTx,
    cache: &DerivedCache,
    livestream: Livestream,
) -> ServiceResult<LivestreamResponse> {
    let owner = tx.find_user(livestream.user_id).await?.ok_or_else(|| {
        ServiceError::internal(format!(
            "owner {} of livestream {} is missing",
            livestream.user_id, livestream.id
        ))
    })?;
    let tags = cache.livestream_tags(livestream.id).await?;

    Ok(LivestreamResponse::new(
        livestream,
        UserResponse::from(owner),
        tags,
    ))
}

pub(crate) async fn livecomment_response(
    tx: &mut dyn PrimaryTx,
    cache: &DerivedCache,
    comment: LiveComment,
    livestream: Livestream,
) -> ServiceResult<LiveCommentResponse> {
    let author = user_response(tx, comment.user_id).await?;
    let livestream = livestream_response(tx, cache, livestream).await?;
    Ok(LiveCommentResponse::new(comment, author, livestream))
}
