//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Livestream not found: {0}")]
    LivestreamNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("User not found: {0}")]
    UsernameNotFound(String),

    #[error("Live comment not found: {0}")]
    LiveCommentNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    /// A derived structure that must exist (owner lookup, leaderboard member) is absent
    #[error("Cache key missing: {0}")]
    CacheKeyMissing(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::LivestreamNotFound(_) => "UNKNOWN_LIVESTREAM",
            Self::UserNotFound(_) | Self::UsernameNotFound(_) => "UNKNOWN_USER",
            Self::LiveCommentNotFound(_) => "UNKNOWN_LIVECOMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::CacheKeyMissing(_) => "CACHE_INCONSISTENT",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::LivestreamNotFound(_)
                | Self::UserNotFound(_)
                | Self::UsernameNotFound(_)
                | Self::LiveCommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this error comes from a backing store rather than the request
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(_)
                | Self::CacheError(_)
                | Self::CacheKeyMissing(_)
                | Self::InternalError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::LivestreamNotFound(1).code(), "UNKNOWN_LIVESTREAM");
        assert_eq!(
            DomainError::UsernameNotFound("alice".to_string()).code(),
            "UNKNOWN_USER"
        );
        assert_eq!(
            DomainError::CacheKeyMissing("livestream_owner:1".to_string()).code(),
            "CACHE_INCONSISTENT"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::LivestreamNotFound(1).is_not_found());
        assert!(DomainError::LiveCommentNotFound(1).is_not_found());
        assert!(!DomainError::CacheError("down".to_string()).is_not_found());
    }

    #[test]
    fn test_is_infrastructure() {
        assert!(DomainError::CacheKeyMissing("k".to_string()).is_infrastructure());
        assert!(DomainError::DatabaseError("x".to_string()).is_infrastructure());
        assert!(!DomainError::ValidationError("x".to_string()).is_infrastructure());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::LivestreamNotFound(123);
        assert_eq!(err.to_string(), "Livestream not found: 123");

        let err = DomainError::UsernameNotFound("bob".to_string());
        assert_eq!(err.to_string(), "User not found: bob");
    }
}
