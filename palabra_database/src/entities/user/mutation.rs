use chrono::Utc;
use palabra_core::id::UserId;
use palabra_core::password_hasher::ArgonHasher;
use sqlx::PgConnection;

use super::{InternalUserModel, UserModel, UserQueryResult};
use crate::{IntoExternalModel, QueryResult};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UserRegistrationInfo {
    pub username: String,
    pub display_name: String,
    pub password: String,
}


pub struct UserMutation;

impl UserMutation {
    pub async fn create_user(
        connection: &mut PgConnection,
        hasher: &ArgonHasher,
        registration_info: UserRegistrationInfo,
    ) -> UserQueryResult<UserModel> {
        let hashed_password = hasher.hash_password(&registration_info.password)?;

        let user_id = UserId::generate();
        let registration_time = Utc::now();

        let newly_created_user = sqlx::query_as::<_, InternalUserModel>(
            "INSERT INTO palabra.user_account \
                (id, username, display_name, hashed_password, \
                joined_at, last_modified_at, last_active_at) \
            VALUES ($1, $2, $3, $4, $5, $5, $5) \
            RETURNING \
                id, username, display_name, hashed_password, \
                joined_at, last_modified_at, last_active_at",
        )
        .bind(user_id.into_uuid())
        .bind(registration_info.username)
        .bind(registration_info.display_name)
        .bind(hashed_password.to_string())
        .bind(registration_time)
        .fetch_one(connection)
        .await?;

        Ok(newly_created_user.into_external_model())
    }

    /// Returns `false` if no such user exists.
    pub async fn update_last_active_at(
        connection: &mut PgConnection,
        user_id: UserId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query(
            "UPDATE palabra.user_account \
            SET last_active_at = $1 \
            WHERE id = $2",
        )
        .bind(Utc::now())
        .bind(user_id.into_uuid())
        .execute(connection)
        .await?;

        Ok(query_result.rows_affected() == 1)
    }
}
