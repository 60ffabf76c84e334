//! User entity

use serde::{Deserialize, Serialize};

/// A registered user. Users own livestreams, react, comment, and tip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unique login name, used to address user statistics
    pub name: String,
    pub display_name: String,
    pub description: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            display_name: name.clone(),
            name,
            description: String::new(),
        }
    }
}
