//! Test fixtures
//!
//! Seed data written straight into the in-memory primary store.

use live_core::entities::{Livestream, Tag, User};
use live_db::MemoryPrimaryStore;

/// One streamer with one tagged livestream, plus a viewer
#[derive(Debug, Clone)]
pub struct StreamFixture {
    pub owner: User,
    pub viewer: User,
    pub tag: Tag,
    pub livestream: Livestream,
}

impl StreamFixture {
    pub fn seed(primary: &MemoryPrimaryStore) -> Self {
        let owner = primary.add_user("streamer");
        let viewer = primary.add_user("viewer");
        let tag = primary.add_tag("game");
        let livestream = primary.add_livestream(owner.id, "weekend speedrun");
        primary.tag_livestream(livestream.id, tag.id);

        Self {
            owner,
            viewer,
            tag,
            livestream,
        }
    }

    pub fn path(&self, suffix: &str) -> String {
        format!("/api/livestream/{}/{suffix}", self.livestream.id)
    }
}
