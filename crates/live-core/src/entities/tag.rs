//! Tag entity - the global catalog of labels that livestreams are filed under

use serde::{Deserialize, Serialize};

/// Tag entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Association between a livestream and one of its tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivestreamTag {
    pub livestream_id: i64,
    pub tag_id: i64,
}
