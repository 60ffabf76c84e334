//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs. Responses that
//! embed resolved detail (owner, tags, author) are assembled with explicit constructors.

use live_core::entities::{LiveComment, Livestream, Reaction, Report, Tag, User, ViewerHistoryEntry};

use super::responses::{
    LiveCommentResponse, LivestreamResponse, ReactionResponse, ReportResponse, TagResponse,
    TagsResponse, UserResponse, ViewerHistoryResponse,
};

// ============================================================================
// User / Tag Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            display_name: user.display_name.clone(),
            description: user.description.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

impl From<Vec<Tag>> for TagsResponse {
    fn from(tags: Vec<Tag>) -> Self {
        Self {
            tags: tags.into_iter().map(TagResponse::from).collect(),
        }
    }
}

// ============================================================================
// Livestream Mappers
// ============================================================================

impl LivestreamResponse {
    pub fn new(livestream: Livestream, owner: UserResponse, tags: Vec<Tag>) -> Self {
        Self {
            id: livestream.id,
            owner,
            title: livestream.title,
            description: livestream.description,
            start_at: livestream.start_at,
            end_at: livestream.end_at,
            tags: tags.into_iter().map(TagResponse::from).collect(),
        }
    }
}

impl From<&ViewerHistoryEntry> for ViewerHistoryResponse {
    fn from(entry: &ViewerHistoryEntry) -> Self {
        Self {
            user_id: entry.user_id,
            livestream_id: entry.livestream_id,
            created_at: entry.created_at,
        }
    }
}

// ============================================================================
// Reaction / Comment / Report Mappers
// ============================================================================

impl ReactionResponse {
    pub fn new(reaction: Reaction, user: UserResponse, livestream: LivestreamResponse) -> Self {
        Self {
            id: reaction.id,
            emoji_name: reaction.emoji_name,
            user,
            livestream,
            created_at: reaction.created_at,
        }
    }
}

impl LiveCommentResponse {
    pub fn new(comment: LiveComment, user: UserResponse, livestream: LivestreamResponse) -> Self {
        Self {
            id: comment.id,
            user,
            livestream,
            comment: comment.comment,
            tip: comment.tip,
            created_at: comment.created_at,
        }
    }
}

impl ReportResponse {
    pub fn new(report: &Report, reporter: UserResponse, livecomment: LiveCommentResponse) -> Self {
        Self {
            id: report.id,
            reporter,
            livecomment,
            created_at: report.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_livestream_response_carries_tags_in_order() {
        let owner = UserResponse::from(User::new(1, "alice"));
        let response = LivestreamResponse::new(
            Livestream::new(10, 1, "speedrun"),
            owner,
            vec![Tag::new(2, "game"), Tag::new(5, "rta")],
        );

        assert_eq!(response.owner.name, "alice");
        let names: Vec<_> = response.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["game", "rta"]);
    }
}
