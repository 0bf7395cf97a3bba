use std::borrow::Cow;

use palabra_core::id::UserId;
use palabra_core::password_hasher::{ArgonHasher, ArgonHasherError};
use sqlx::PgConnection;
use thiserror::Error;

use super::{InternalUserModel, UserModel};
use crate::{IntoExternalModel, QueryError, QueryResult};


#[derive(Debug, Error)]
pub enum UserCredentialValidationError {
    #[error("sqlx error")]
    SqlxError {
        #[source]
        error: sqlx::Error,
    },

    #[error("model error: {}", .reason)]
    ModelError { reason: Cow<'static, str> },

    #[error("hasher error")]
    HasherError {
        #[source]
        error: ArgonHasherError,
    },
}

impl From<QueryError> for UserCredentialValidationError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::SqlxError { error } => Self::SqlxError { error },
            QueryError::ModelError { reason } => Self::ModelError { reason },
        }
    }
}



macro_rules! select_user_account_where {
    ($condition:literal) => {
        concat!(
            "SELECT id, username, display_name, hashed_password, ",
            "joined_at, last_modified_at, last_active_at ",
            "FROM palabra.user_account WHERE ",
            $condition
        )
    };
}


pub struct UserQuery;

impl UserQuery {
    async fn exists_where(
        connection: &mut PgConnection,
        exists_query: &'static str,
        value: &str,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(exists_query)
            .bind(value)
            .fetch_one(connection)
            .await?;

        Ok(exists)
    }

    pub async fn get_by_id(
        connection: &mut PgConnection,
        user_id: UserId,
    ) -> QueryResult<Option<UserModel>> {
        let optional_internal_model =
            sqlx::query_as::<_, InternalUserModel>(select_user_account_where!("id = $1"))
                .bind(user_id.into_uuid())
                .fetch_optional(connection)
                .await?;

        Ok(optional_internal_model.map(InternalUserModel::into_external_model))
    }

    pub async fn get_by_username<U>(
        connection: &mut PgConnection,
        username: U,
    ) -> QueryResult<Option<UserModel>>
    where
        U: AsRef<str>,
    {
        let optional_internal_model =
            sqlx::query_as::<_, InternalUserModel>(select_user_account_where!("username = $1"))
                .bind(username.as_ref())
                .fetch_optional(connection)
                .await?;

        Ok(optional_internal_model.map(InternalUserModel::into_external_model))
    }

    pub async fn exists_by_username<U>(
        connection: &mut PgConnection,
        username: U,
    ) -> QueryResult<bool>
    where
        U: AsRef<str>,
    {
        Self::exists_where(
            connection,
            "SELECT EXISTS (SELECT 1 FROM palabra.user_account WHERE username = $1)",
            username.as_ref(),
        )
        .await
    }

    pub async fn exists_by_display_name<D>(
        connection: &mut PgConnection,
        display_name: D,
    ) -> QueryResult<bool>
    where
        D: AsRef<str>,
    {
        Self::exists_where(
            connection,
            "SELECT EXISTS (SELECT 1 FROM palabra.user_account WHERE display_name = $1)",
            display_name.as_ref(),
        )
        .await
    }

    /// Returns `None` both when the user does not exist
    /// and when the password doesn't match.
    pub async fn validate_credentials<U, P>(
        connection: &mut PgConnection,
        hasher: &ArgonHasher,
        username: U,
        password: P,
    ) -> QueryResult<Option<UserModel>, UserCredentialValidationError>
    where
        U: AsRef<str>,
        P: AsRef<str>,
    {
        let Some(user) = Self::get_by_username(connection, username).await? else {
            return Ok(None);
        };

        let is_valid_password = hasher
            .verify_password_against_hash(password.as_ref(), &user.hashed_password)
            .map_err(|error| UserCredentialValidationError::HasherError { error })?;

        Ok(is_valid_password.then_some(user))
    }
}
