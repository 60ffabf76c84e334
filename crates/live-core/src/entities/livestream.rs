//! Livestream entity

use serde::{Deserialize, Serialize};

/// A scheduled broadcast owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Livestream {
    pub id: i64,
    /// Owner of the livestream
    pub user_id: i64,
    pub title: String,
    pub description: String,
    /// Unix seconds
    pub start_at: i64,
    /// Unix seconds
    pub end_at: i64,
}

impl Livestream {
    pub fn new(id: i64, user_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            description: String::new(),
            start_at: 0,
            end_at: 0,
        }
    }

    /// Check if the given user owns this livestream
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        let stream = Livestream::new(7, 3, "morning show");
        assert!(stream.is_owned_by(3));
        assert!(!stream.is_owned_by(4));
    }
}
