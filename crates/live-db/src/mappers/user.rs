//! User model -> entity mapper

use live_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            display_name: model.display_name,
            description: model.description,
        }
    }
}
