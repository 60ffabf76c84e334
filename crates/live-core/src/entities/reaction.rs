//! Reaction entity - an emoji posted by a user on a livestream

use super::unix_now;

/// A stored reaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub emoji_name: String,
    pub user_id: i64,
    pub livestream_id: i64,
    /// Unix seconds
    pub created_at: i64,
}

/// A reaction about to be inserted; the primary store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub emoji_name: String,
    pub user_id: i64,
    pub livestream_id: i64,
    pub created_at: i64,
}

impl NewReaction {
    /// Create a reaction stamped with the current time
    pub fn new(user_id: i64, livestream_id: i64, emoji_name: impl Into<String>) -> Self {
        Self {
            emoji_name: emoji_name.into(),
            user_id,
            livestream_id,
            created_at: unix_now(),
        }
    }

    /// Attach the store-assigned id
    pub fn into_reaction(self, id: i64) -> Reaction {
        Reaction {
            id,
            emoji_name: self.emoji_name,
            user_id: self.user_id,
            livestream_id: self.livestream_id,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_reaction_keeps_fields() {
        let new = NewReaction::new(2, 9, "innocent");
        let created_at = new.created_at;
        let reaction = new.into_reaction(41);

        assert_eq!(reaction.id, 41);
        assert_eq!(reaction.user_id, 2);
        assert_eq!(reaction.livestream_id, 9);
        assert_eq!(reaction.emoji_name, "innocent");
        assert_eq!(reaction.created_at, created_at);
    }
}
