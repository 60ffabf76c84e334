//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Post reaction request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostReactionRequest {
    #[validate(length(min = 1, max = 255, message = "emoji_name must be 1-255 characters"))]
    pub emoji_name: String,
}

/// Post live comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostLiveCommentRequest {
    #[validate(length(min = 1, max = 255, message = "comment must be 1-255 characters"))]
    pub comment: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "tip must not be negative"))]
    pub tip: i64,
}
