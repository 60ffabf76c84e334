//! Reaction service
//!
//! Posting a reaction commits the row and then applies the reaction increments through
//! the write-path updater. Listing resolves all authors with one batched lookup and
//! builds the livestream detail once for the whole page.

use std::collections::{BTreeSet, HashMap};

use live_core::entities::NewReaction;
use live_core::error::DomainError;
use live_core::traits::{LivestreamQueries, ReactionQueries, UserQueries};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::detail;
use super::error::{ServiceError, ServiceResult};
use super::updater::WritePathUpdater;
use crate::dto::{PostReactionRequest, ReactionResponse, UserResponse};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a reaction to a livestream
    #[instrument(skip(self, request))]
    pub async fn post_reaction(
        &self,
        livestream_id: i64,
        user_id: i64,
        request: PostReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let mut tx = self.ctx.primary().begin().await?;

        let livestream = tx
            .find_livestream(livestream_id)
            .await?
            .ok_or(DomainError::LivestreamNotFound(livestream_id))?;
        let user = detail::user_response(tx.as_mut(), user_id).await?;

        let reaction = tx
            .insert_reaction(NewReaction::new(user_id, livestream_id, request.emoji_name))
            .await?;
        let livestream = detail::livestream_response(tx.as_mut(), self.ctx.cache(), livestream).await?;

        tx.commit().await?;

        WritePathUpdater::new(self.ctx.cache())
            .reaction_posted(&reaction)
            .await?;

        info!(
            reaction_id = reaction.id,
            livestream_id,
            user_id,
            emoji = %reaction.emoji_name,
            "Reaction posted"
        );

        Ok(ReactionResponse::new(reaction, user, livestream))
    }

    /// Most recent reactions first, optionally capped at `limit`
    #[instrument(skip(self))]
    pub async fn list_reactions(
        &self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<ReactionResponse>> {
        if limit.is_some_and(|l| l < 0) {
            return Err(ServiceError::validation("limit must not be negative"));
        }

        let mut tx = self.ctx.primary().begin().await?;

        let livestream = tx
            .find_livestream(livestream_id)
            .await?
            .ok_or(DomainError::LivestreamNotFound(livestream_id))?;
        let reactions = tx.recent_reactions(livestream_id, limit).await?;

        let author_ids: Vec<i64> = reactions
            .iter()
            .map(|r| r.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let authors: HashMap<i64, UserResponse> = tx
            .find_users_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, UserResponse::from(u)))
            .collect();

        let livestream = detail::livestream_response(tx.as_mut(), self.ctx.cache(), livestream).await?;

        tx.commit().await?;

        reactions
            .into_iter()
            .map(|reaction| -> ServiceResult<ReactionResponse> {
                let user = authors
                    .get(&reaction.user_id)
                    .cloned()
                    .ok_or(DomainError::UserNotFound(reaction.user_id))?;
                Ok(ReactionResponse::new(reaction, user, livestream.clone()))
            })
            .collect()
    }
}
