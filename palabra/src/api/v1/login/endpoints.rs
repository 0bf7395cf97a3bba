use actix_web::{post, web};
use chrono::{DateTime, Duration, Utc};
use palabra_auth::{
    JWTClaims,
    JWTCreationError,
    JWTTokenType,
    JWTValidationError,
    JsonWebTokenManager,
};
use palabra_core::api_models::{
    UserLoginRefreshRequest,
    UserLoginRefreshResponse,
    UserLoginRequest,
    UserLoginResponse,
};
use palabra_core::id::UserId;
use palabra_database::entities::user::{UserMutation, UserQuery};
use tracing::{debug, info, warn};

use crate::api::errors::{EndpointResponseBuilder, EndpointResult, LoginErrorReason};
use crate::state::ApplicationState;



fn access_token_lifetime() -> Duration {
    Duration::hours(2)
}

fn refresh_token_lifetime() -> Duration {
    Duration::days(7)
}


fn issue_token(
    jwt_manager: &JsonWebTokenManager,
    user_id: UserId,
    issued_at: DateTime<Utc>,
    token_type: JWTTokenType,
) -> Result<String, JWTCreationError> {
    let valid_for = match token_type {
        JWTTokenType::Access => access_token_lifetime(),
        JWTTokenType::Refresh => refresh_token_lifetime(),
    };

    let claims = JWTClaims::create(user_id, issued_at, valid_for, token_type);

    jwt_manager.create_token(claims)
}


/// Decodes a token submitted to `/login/refresh`, mapping
/// every way it can be unusable to its error reason.
fn decode_refresh_token(
    jwt_manager: &JsonWebTokenManager,
    refresh_token: &str,
) -> Result<JWTClaims, LoginErrorReason> {
    let claims = jwt_manager
        .decode_token(refresh_token)
        .map_err(|error| match error {
            JWTValidationError::Expired { expired_token } => {
                debug!(
                    user_id = %expired_token.user_id,
                    "Refusing to refresh with an expired token."
                );

                LoginErrorReason::expired_refresh_token()
            }
            JWTValidationError::InvalidToken { reason } => {
                warn!(error = %reason, "Received an unparsable refresh token.");

                LoginErrorReason::invalid_refresh_json_web_token()
            }
        })?;

    if claims.token_type != JWTTokenType::Refresh {
        return Err(LoginErrorReason::not_a_refresh_token());
    }

    Ok(claims)
}



/// Log in
///
/// Exchanges a username and password for a pair of tokens.
/// The short-lived access token goes into the `Authorization` header
/// of later requests; the long-lived refresh token can only be
/// traded for new access tokens at `POST /login/refresh`.
///
/// Wrong credentials give `403 Forbidden`.
#[post("")]
pub async fn login(
    state: ApplicationState,
    request_data: web::Json<UserLoginRequest>,
) -> EndpointResult {
    let credentials = request_data.into_inner();
    let mut database_connection = state.acquire_database_connection().await?;


    let Some(user) = UserQuery::validate_credentials(
        &mut database_connection,
        state.hasher(),
        &credentials.username,
        &credentials.password,
    )
    .await?
    else {
        debug!(
            username = credentials.username,
            "Rejected login with invalid credentials."
        );

        return EndpointResponseBuilder::forbidden()
            .with_error_reason(LoginErrorReason::invalid_login_credentials())
            .build();
    };


    let issued_at = Utc::now();
    let access_token = issue_token(
        state.jwt_manager(),
        user.id,
        issued_at,
        JWTTokenType::Access,
    )?;
    let refresh_token = issue_token(
        state.jwt_manager(),
        user.id,
        issued_at,
        JWTTokenType::Refresh,
    )?;

    UserMutation::update_last_active_at(&mut database_connection, user.id).await?;


    info!(
        user_id = %user.id,
        username = user.username,
        "User logged in."
    );

    EndpointResponseBuilder::ok()
        .with_json_body(UserLoginResponse {
            access_token,
            refresh_token,
        })
        .build()
}



/// Refresh a login
///
/// Trades a refresh token from `POST /login` for a fresh access token.
/// The refresh token itself stays valid until it expires.
#[post("/refresh")]
pub async fn refresh_login(
    state: ApplicationState,
    request_data: web::Json<UserLoginRefreshRequest>,
) -> EndpointResult {
    let refresh_token_claims =
        match decode_refresh_token(state.jwt_manager(), &request_data.refresh_token) {
            Ok(claims) => claims,
            Err(reason) => {
                return EndpointResponseBuilder::bad_request()
                    .with_error_reason(reason)
                    .build();
            }
        };


    let access_token = issue_token(
        state.jwt_manager(),
        refresh_token_claims.user_id,
        Utc::now(),
        JWTTokenType::Access,
    )?;

    debug!(
        user_id = %refresh_token_claims.user_id,
        "Issued a refreshed access token."
    );


    EndpointResponseBuilder::ok()
        .with_json_body(UserLoginRefreshResponse { access_token })
        .build()
}
