use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::UserId;



/// User login information.
#[derive(Deserialize, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
pub struct UserLoginRequest {
    /// Username to log in as.
    pub username: String,

    /// Password.
    pub password: String,
}



/// Response on successful user login.
///
/// Contains two tokens:
/// - the `access_token` that should be appended to future requests and
/// - the `refresh_token` that can be used on `POST /api/v1/login/refresh` to
///   receive a new (fresh) access token.
#[derive(Serialize, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct UserLoginResponse {
    /// JWT access token.
    /// Provide in subsequent requests in the `Authorization` header as `Bearer your_token_here`.
    pub access_token: String,

    /// JWT refresh token.
    pub refresh_token: String,
}



/// Information with which to refresh a user's login, generating a new access token.
#[derive(Deserialize, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
pub struct UserLoginRefreshRequest {
    /// Refresh token to use to generate an access token.
    ///
    /// Token must not have expired to work.
    pub refresh_token: String,
}


/// Response on successful login refresh.
#[derive(Serialize, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct UserLoginRefreshResponse {
    pub access_token: String,
}



#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
pub struct UserRegistrationRequest {
    /// Username to register as (must be unique).
    pub username: String,

    /// Name to display in the UI (must be unique).
    pub display_name: String,

    pub password: String,
}


#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct UserRegistrationResponse {
    pub user: UserInfo,
}



/// Information about a single user.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct UserInfo {
    pub id: UserId,

    /// Unique username for login.
    pub username: String,

    /// Unique display name.
    pub display_name: String,

    /// Registration date and time.
    pub joined_at: DateTime<Utc>,

    /// Last modification date and time.
    pub last_modified_at: DateTime<Utc>,

    /// Last activity date and time.
    pub last_active_at: DateTime<Utc>,
}


#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct UserInfoResponse {
    pub user: UserInfo,
}
