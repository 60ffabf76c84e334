//! Reaction and spam report model -> entity mappers

use live_core::entities::{Reaction, Report};

use crate::models::{ReactionModel, ReportModel};

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            emoji_name: model.emoji_name,
            user_id: model.user_id,
            livestream_id: model.livestream_id,
            created_at: model.created_at,
        }
    }
}

impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: model.id,
            user_id: model.user_id,
            livestream_id: model.livestream_id,
            livecomment_id: model.livecomment_id,
            created_at: model.created_at,
        }
    }
}
