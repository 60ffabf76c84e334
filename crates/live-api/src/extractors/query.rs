//! Query string extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw reaction listing query parameters
#[derive(Debug, Deserialize)]
pub struct ReactionLimitParams {
    #[serde(default)]
    pub limit: Option<String>,
}

/// Optional cap on the number of reactions returned
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionLimit(pub Option<i64>);

impl TryFrom<ReactionLimitParams> for ReactionLimit {
    type Error = ApiError;

    fn try_from(params: ReactionLimitParams) -> Result<Self, Self::Error> {
        let limit = params
            .limit
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| ApiError::invalid_query("limit query parameter must be integer"))
            })
            .transpose()?;

        Ok(ReactionLimit(limit))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ReactionLimit
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ReactionLimitParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        ReactionLimit::try_from(params)
    }
}
