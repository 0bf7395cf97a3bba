use chrono::{DateTime, Utc};
use palabra_core::id::UserId;
use uuid::Uuid;

use crate::IntoExternalModel;



pub struct UserModel {
    pub id: UserId,

    pub username: String,

    pub display_name: String,

    /// Argon2id PHC string.
    pub hashed_password: String,

    pub joined_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,

    pub last_active_at: DateTime<Utc>,
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalUserModel {
    pub(super) id: Uuid,

    pub(super) username: String,

    pub(super) display_name: String,

    pub(super) hashed_password: String,

    pub(super) joined_at: DateTime<Utc>,

    pub(super) last_modified_at: DateTime<Utc>,

    pub(super) last_active_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalUserModel {
    type ExternalModel = UserModel;

    fn into_external_model(self) -> Self::ExternalModel {
        UserModel {
            id: UserId::new(self.id),
            username: self.username,
            display_name: self.display_name,
            hashed_password: self.hashed_password,
            joined_at: self.joined_at,
            last_modified_at: self.last_modified_at,
            last_active_at: self.last_active_at,
        }
    }
}
