//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field sets match what
//! existing clients of the livestream API consume.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// User detail embedded in reactions, comments, and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: String,
}

// ============================================================================
// Tag Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

/// Tag catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<TagResponse>,
}

// ============================================================================
// Livestream Responses
// ============================================================================

/// Livestream detail with its owner and tags resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestreamResponse {
    pub id: i64,
    pub owner: UserResponse,
    pub title: String,
    pub description: String,
    pub start_at: i64,
    pub end_at: i64,
    pub tags: Vec<TagResponse>,
}

/// Row written when a user enters a livestream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerHistoryResponse {
    pub user_id: i64,
    pub livestream_id: i64,
    pub created_at: i64,
}

// ============================================================================
// Reaction Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionResponse {
    pub id: i64,
    pub emoji_name: String,
    pub user: UserResponse,
    pub livestream: LivestreamResponse,
    pub created_at: i64,
}

// ============================================================================
// Live Comment Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveCommentResponse {
    pub id: i64,
    pub user: UserResponse,
    pub livestream: LivestreamResponse,
    pub comment: String,
    pub tip: i64,
    pub created_at: i64,
}

/// Spam report filed against a live comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportResponse {
    pub id: i64,
    pub reporter: UserResponse,
    pub livecomment: LiveCommentResponse,
    pub created_at: i64,
}

// ============================================================================
// Statistics Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestreamStatisticsResponse {
    pub rank: i64,
    pub viewers_count: i64,
    pub total_reactions: i64,
    pub total_reports: i64,
    pub max_tip: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStatisticsResponse {
    pub rank: i64,
    pub viewers_count: i64,
    pub total_reactions: i64,
    pub total_livecomments: i64,
    pub total_tip: i64,
    pub favorite_emoji: String,
}

// ============================================================================
// System Responses
// ============================================================================

/// Response to the initialize entrypoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitializeResponse {
    pub language: String,
}

impl InitializeResponse {
    pub fn rust() -> Self {
        Self {
            language: "rust".to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Store reachability checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub primary_store: String,
    pub cache_store: String,
}

impl ReadinessResponse {
    pub fn ready(primary_ok: bool, cache_ok: bool) -> Self {
        let status = if primary_ok && cache_ok {
            "ready"
        } else {
            "not_ready"
        };

        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                primary_store: health_label(primary_ok),
                cache_store: health_label(cache_ok),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

fn health_label(ok: bool) -> String {
    let label = if ok { "healthy" } else { "unhealthy" };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_field_names() {
        let stats = LivestreamStatisticsResponse {
            rank: 1,
            viewers_count: 2,
            total_reactions: 3,
            total_reports: 4,
            max_tip: 5,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rank": 1,
                "viewers_count": 2,
                "total_reactions": 3,
                "total_reports": 4,
                "max_tip": 5
            })
        );
    }

    #[test]
    fn test_initialize_language() {
        let json = serde_json::to_value(InitializeResponse::rust()).unwrap();
        assert_eq!(json, serde_json::json!({ "language": "rust" }));
    }

    #[test]
    fn test_readiness() {
        assert!(ReadinessResponse::ready(true, true).is_ready());

        let degraded = ReadinessResponse::ready(true, false);
        assert!(!degraded.is_ready());
        assert_eq!(degraded.checks.primary_store, "healthy");
        assert_eq!(degraded.checks.cache_store, "unhealthy");
    }
}
