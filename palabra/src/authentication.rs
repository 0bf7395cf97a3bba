//! Authentication-related code.

use actix_utils::future::{self, Ready};
use actix_web::dev::Payload;
use actix_web::http::{header, StatusCode};
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use palabra_auth::{JWTClaims, JWTTokenType, JWTValidationError};
use palabra_core::id::UserId;
use tracing::{debug, error, info};

use crate::state::ApplicationStateInner;



/// User authentication extractor.
///
/// **Holding this struct doesn't automatically mean the user is authenticated!**
///
/// # Usage with Actix
/// [`UserAuthenticationExtractor`] is an [Actix extractor](https://actix.rs/docs/extractors):
/// add an `authentication: `[`UserAuthenticationExtractor`] parameter to your endpoint function
/// and call [`UserAuthenticationExtractor::authenticated_user`] inside the handler body.
///
/// In most cases you will want the [`require_user_authentication`] macro instead,
/// which early-returns a `401 Unauthorized` if the caller did not provide authentication.
///
/// [`require_user_authentication`]: crate::require_user_authentication
pub enum UserAuthenticationExtractor {
    /// No user authentication provided.
    Unauthenticated,

    /// Valid JWT access token provided as authentication.
    Authenticated { token: JWTClaims },
}

impl UserAuthenticationExtractor {
    /// Returns an `Some(`[`AuthenticatedUser`]`)` if the API caller
    /// provided a JWT authentication token with the request.
    pub fn authenticated_user(&self) -> Option<AuthenticatedUser> {
        match self {
            UserAuthenticationExtractor::Unauthenticated => None,
            UserAuthenticationExtractor::Authenticated { token } => Some(AuthenticatedUser {
                token: token.clone(),
            }),
        }
    }
}

impl FromRequest for UserAuthenticationExtractor {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(authorization_header_value) = req.headers().get(header::AUTHORIZATION) else {
            return future::ok(Self::Unauthenticated);
        };

        let jwt_manager = match req.app_data::<Data<ApplicationStateInner>>() {
            Some(app_state) => app_state.jwt_manager(),
            None => {
                error!("BUG: No AppState injected, all `UserAuthenticationExtractor`s will fail!");

                return future::err(
                    actix_web::error::InternalError::new(
                        "Missing AppState.",
                        StatusCode::INTERNAL_SERVER_ERROR,
                    )
                    .into(),
                );
            }
        };

        let Ok(header_value) = authorization_header_value.to_str() else {
            return future::err(actix_web::error::ParseError::Header.into());
        };

        let Some(token_string) = header_value.strip_prefix("Bearer ") else {
            return future::err(actix_web::error::ParseError::Header.into());
        };


        let token = match jwt_manager.decode_token(token_string) {
            Ok(token) => token,
            Err(JWTValidationError::Expired { expired_token }) => {
                debug!(
                    user_id = %expired_token.user_id,
                    "User tried authenticating with expired token."
                );

                return future::err(actix_web::error::ErrorForbidden(
                    "Authentication token expired.",
                ));
            }
            Err(JWTValidationError::InvalidToken { reason }) => {
                info!(
                    reason = %reason,
                    "User tried authenticating with invalid token."
                );

                return future::err(actix_web::error::ErrorBadRequest("Invalid token."));
            }
        };

        if token.token_type != JWTTokenType::Access {
            debug!(
                user_id = %token.user_id,
                "User tried authenticating with a refresh token."
            );

            return future::err(actix_web::error::ErrorBadRequest(
                "Not an access token.",
            ));
        }

        future::ok(Self::Authenticated { token })
    }
}



/// An authenticated user with a valid JWT access token.
pub struct AuthenticatedUser {
    token: JWTClaims,
}

impl AuthenticatedUser {
    /// Returns the ID of the user who owns the token.
    pub fn user_id(&self) -> UserId {
        self.token.user_id
    }
}
