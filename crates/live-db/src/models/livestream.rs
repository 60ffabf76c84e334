//! Livestream database model

use sqlx::FromRow;

/// Database model for livestreams table
#[derive(Debug, Clone, FromRow)]
pub struct LivestreamModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub start_at: i64,
    pub end_at: i64,
}
