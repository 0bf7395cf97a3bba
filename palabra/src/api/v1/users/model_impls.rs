use palabra_core::api_models::UserInfo;
use palabra_database::entities::user::UserModel;

use crate::api::traits::IntoApiModel;



impl IntoApiModel for UserModel {
    type ApiModel = UserInfo;

    fn into_api_model(self) -> Self::ApiModel {
        UserInfo {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            joined_at: self.joined_at,
            last_modified_at: self.last_modified_at,
            last_active_at: self.last_active_at,
        }
    }
}
