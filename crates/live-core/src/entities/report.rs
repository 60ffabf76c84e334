//! Spam report entity - a user flagging a live comment

use super::unix_now;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    /// Reporting user
    pub user_id: i64,
    pub livestream_id: i64,
    pub livecomment_id: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub user_id: i64,
    pub livestream_id: i64,
    pub livecomment_id: i64,
    pub created_at: i64,
}

impl NewReport {
    pub fn new(user_id: i64, livestream_id: i64, livecomment_id: i64) -> Self {
        Self {
            user_id,
            livestream_id,
            livecomment_id,
            created_at: unix_now(),
        }
    }

    pub fn into_report(self, id: i64) -> Report {
        Report {
            id,
            user_id: self.user_id,
            livestream_id: self.livestream_id,
            livecomment_id: self.livecomment_id,
            created_at: self.created_at,
        }
    }
}
