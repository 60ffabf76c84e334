//! Tag database models

use sqlx::FromRow;

/// Database model for tags table
#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
}

/// Database model for livestream_tags table
#[derive(Debug, Clone, FromRow)]
pub struct LivestreamTagModel {
    pub livestream_id: i64,
    pub tag_id: i64,
}
