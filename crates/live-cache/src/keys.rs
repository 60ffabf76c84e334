//! Cache key namespace and value encodings
//!
//! Every cache key is built here; nothing else formats keys.

use live_core::entities::Tag;
use live_core::error::DomainError;
use live_core::traits::RepoResult;

/// Ordered list of `"<id>:<name>"` tag entries
pub const TAGS_KEY: &str = "tags";

pub const TAG_ID_TO_NAME_PREFIX: &str = "tag_id2name:";
pub const TAG_NAME_TO_ID_PREFIX: &str = "name2tag_id:";
pub const LIVESTREAM_TAGS_PREFIX: &str = "livestream_tags:";
pub const LIVECOMMENT_TIP_PREFIX: &str = "live_comment_tips:";
pub const VIEWERS_PREFIX: &str = "num_viewers:";
pub const LIVESTREAM_REACTIONS_PREFIX: &str = "num_reactions:";
/// Kept apart from the livestream counter so a user and a livestream with the same id
/// never share a key
pub const USER_REACTIONS_PREFIX: &str = "num_reactions:user:";
pub const SPAM_REPORTS_PREFIX: &str = "num_spam_report:";
pub const LIVESTREAM_OWNER_PREFIX: &str = "livestream_owner:";

pub const LIVESTREAM_LEADERBOARD_KEY: &str = "livestream_leaderboard";
pub const USER_LEADERBOARD_KEY: &str = "user_leaderboard";

pub fn tag_id_to_name_key(tag_id: i64) -> String {
    format!("{TAG_ID_TO_NAME_PREFIX}{tag_id}")
}

pub fn tag_name_to_id_key(name: &str) -> String {
    format!("{TAG_NAME_TO_ID_PREFIX}{name}")
}

pub fn livestream_tags_key(livestream_id: i64) -> String {
    format!("{LIVESTREAM_TAGS_PREFIX}{livestream_id}")
}

pub fn livecomment_tip_key(livestream_id: i64, livecomment_id: i64) -> String {
    format!("{LIVECOMMENT_TIP_PREFIX}{livestream_id}:{livecomment_id}")
}

pub fn viewers_key(livestream_id: i64) -> String {
    format!("{VIEWERS_PREFIX}{livestream_id}")
}

pub fn livestream_reactions_key(livestream_id: i64) -> String {
    format!("{LIVESTREAM_REACTIONS_PREFIX}{livestream_id}")
}

pub fn user_reactions_key(user_id: i64) -> String {
    format!("{USER_REACTIONS_PREFIX}{user_id}")
}

pub fn spam_reports_key(livestream_id: i64) -> String {
    format!("{SPAM_REPORTS_PREFIX}{livestream_id}")
}

pub fn livestream_owner_key(livestream_id: i64) -> String {
    format!("{LIVESTREAM_OWNER_PREFIX}{livestream_id}")
}

/// The two reaction leaderboards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaderboard {
    /// member = livestream id, score = reactions on that livestream
    Livestreams,
    /// member = owner user id, score = reactions across the owner's livestreams
    Users,
}

impl Leaderboard {
    pub fn key(self) -> &'static str {
        match self {
            Self::Livestreams => LIVESTREAM_LEADERBOARD_KEY,
            Self::Users => USER_LEADERBOARD_KEY,
        }
    }
}

/// Sorted-set member for an entity id.
///
/// Zero-padded so the store's byte-wise ordering of equal-score members matches numeric
/// id order: under ZREVRANK the smaller id of a tie ranks later.
pub fn leaderboard_member(id: i64) -> String {
    format!("{id:020}")
}

pub fn encode_tag_entry(tag: &Tag) -> String {
    format!("{}:{}", tag.id, tag.name)
}

/// Decode a `"<id>:<name>"` entry, splitting on the first `:`
pub fn decode_tag_entry(entry: &str) -> RepoResult<Tag> {
    let (id, name) = entry
        .split_once(':')
        .ok_or_else(|| DomainError::InternalError(format!("malformed tag entry: {entry}")))?;
    let id = id
        .parse::<i64>()
        .map_err(|_| DomainError::InternalError(format!("malformed tag entry: {entry}")))?;
    Ok(Tag::new(id, name))
}

/// Decode a stored base-10 integer
pub fn decode_int(key: &str, value: &str) -> RepoResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| DomainError::InternalError(format!("non-integer value at {key}: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        assert_eq!(tag_id_to_name_key(1), "tag_id2name:1");
        assert_eq!(tag_name_to_id_key("game"), "name2tag_id:game");
        assert_eq!(livestream_tags_key(4), "livestream_tags:4");
        assert_eq!(livecomment_tip_key(4, 10), "live_comment_tips:4:10");
        assert_eq!(viewers_key(4), "num_viewers:4");
        assert_eq!(livestream_reactions_key(4), "num_reactions:4");
        assert_eq!(spam_reports_key(4), "num_spam_report:4");
        assert_eq!(livestream_owner_key(4), "livestream_owner:4");
    }

    #[test]
    fn test_user_and_livestream_counters_do_not_collide() {
        assert_ne!(user_reactions_key(7), livestream_reactions_key(7));
        assert_eq!(user_reactions_key(7), "num_reactions:user:7");
    }

    #[test]
    fn test_leaderboard_keys() {
        assert_eq!(Leaderboard::Livestreams.key(), "livestream_leaderboard");
        assert_eq!(Leaderboard::Users.key(), "user_leaderboard");
    }

    #[test]
    fn test_leaderboard_member_orders_numerically() {
        assert_eq!(leaderboard_member(42), "00000000000000000042");
        assert!(leaderboard_member(9) < leaderboard_member(10));
    }

    #[test]
    fn test_tag_entry_splits_on_first_colon() {
        let tag = Tag::new(3, "a:b:c");
        let entry = encode_tag_entry(&tag);
        assert_eq!(entry, "3:a:b:c");
        assert_eq!(decode_tag_entry(&entry).unwrap(), tag);
    }

    #[test]
    fn test_malformed_values_are_internal_errors() {
        assert!(matches!(
            decode_tag_entry("no-colon"),
            Err(DomainError::InternalError(_))
        ));
        assert!(matches!(
            decode_tag_entry("x:name"),
            Err(DomainError::InternalError(_))
        ));
        assert!(matches!(
            decode_int("num_viewers:1", "abc"),
            Err(DomainError::InternalError(_))
        ));
        assert_eq!(decode_int("num_viewers:1", "12").unwrap(), 12);
    }
}
