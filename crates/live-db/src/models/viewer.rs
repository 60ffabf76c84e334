//! Viewer history database model

use sqlx::FromRow;

/// Database model for livestream_viewers_history table
#[derive(Debug, Clone, FromRow)]
pub struct ViewerHistoryModel {
    pub user_id: i64,
    pub livestream_id: i64,
    pub created_at: i64,
}
