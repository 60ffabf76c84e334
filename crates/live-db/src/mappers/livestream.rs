//! Livestream model -> entity mapper

use live_core::entities::Livestream;

use crate::models::LivestreamModel;

impl From<LivestreamModel> for Livestream {
    fn from(model: LivestreamModel) -> Self {
        Livestream {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            start_at: model.start_at,
            end_at: model.end_at,
        }
    }
}
