//! Tag model -> entity mappers

use live_core::entities::{LivestreamTag, Tag};

use crate::models::{LivestreamTagModel, TagModel};

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<LivestreamTagModel> for LivestreamTag {
    fn from(model: LivestreamTagModel) -> Self {
        LivestreamTag {
            livestream_id: model.livestream_id,
            tag_id: model.tag_id,
        }
    }
}
