/// Extracts an [`AuthenticatedUser`][crate::authentication::AuthenticatedUser]
/// from a [`UserAuthenticationExtractor`][crate::authentication::UserAuthenticationExtractor].
///
/// # Early-return value
/// If the caller provided no authentication, the macro early-returns
/// `Err(`[`EndpointError::MissingAuthentication`][crate::api::errors::EndpointError::MissingAuthentication]`)`,
/// which results in a `401 Unauthorized` with a `missing-authentication` error reason.
///
/// # Example
/// ```no_run
/// use actix_web::get;
/// use palabra::api::errors::{EndpointResponseBuilder, EndpointResult};
/// use palabra::authentication::UserAuthenticationExtractor;
/// use palabra::require_user_authentication;
///
/// #[get("/something")]
/// async fn something(authentication: UserAuthenticationExtractor) -> EndpointResult {
///     let authenticated_user = require_user_authentication!(authentication);
///
///     // authenticated_user.user_id(), ...
///     # EndpointResponseBuilder::ok().build()
/// }
/// ```
#[macro_export]
macro_rules! require_user_authentication {
    ($authentication_extractor:expr) => {
        match $authentication_extractor.authenticated_user() {
            Some(authenticated_user) => authenticated_user,
            None => {
                return Err($crate::api::errors::EndpointError::missing_authentication());
            }
        }
    };
}
