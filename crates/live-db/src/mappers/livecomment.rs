//! Live comment and viewer history model -> entity mappers

use live_core::entities::{LiveComment, ViewerHistoryEntry};

use crate::models::{LiveCommentModel, ViewerHistoryModel};

impl From<LiveCommentModel> for LiveComment {
    fn from(model: LiveCommentModel) -> Self {
        LiveComment {
            id: model.id,
            user_id: model.user_id,
            livestream_id: model.livestream_id,
            comment: model.comment,
            tip: model.tip,
            created_at: model.created_at,
        }
    }
}

impl From<ViewerHistoryModel> for ViewerHistoryEntry {
    fn from(model: ViewerHistoryModel) -> Self {
        ViewerHistoryEntry {
            user_id: model.user_id,
            livestream_id: model.livestream_id,
            created_at: model.created_at,
        }
    }
}
