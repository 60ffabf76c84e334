//! Viewer history - one row each time a user enters a livestream

use super::unix_now;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerHistoryEntry {
    pub user_id: i64,
    pub livestream_id: i64,
    pub created_at: i64,
}

impl ViewerHistoryEntry {
    pub fn new(user_id: i64, livestream_id: i64) -> Self {
        Self {
            user_id,
            livestream_id,
            created_at: unix_now(),
        }
    }
}
