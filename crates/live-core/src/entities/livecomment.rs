//! Live comment entity - a chat line on a livestream, optionally carrying a tip

use super::unix_now;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveComment {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub comment: String,
    /// Tip amount; zero means no tip
    pub tip: i64,
    pub created_at: i64,
}

impl LiveComment {
    #[inline]
    pub fn has_tip(&self) -> bool {
        self.tip > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLiveComment {
    pub user_id: i64,
    pub livestream_id: i64,
    pub comment: String,
    pub tip: i64,
    pub created_at: i64,
}

impl NewLiveComment {
    pub fn new(user_id: i64, livestream_id: i64, comment: impl Into<String>, tip: i64) -> Self {
        Self {
            user_id,
            livestream_id,
            comment: comment.into(),
            tip,
            created_at: unix_now(),
        }
    }

    pub fn into_livecomment(self, id: i64) -> LiveComment {
        LiveComment {
            id,
            user_id: self.user_id,
            livestream_id: self.livestream_id,
            comment: self.comment,
            tip: self.tip,
            created_at: self.created_at,
        }
    }
}
