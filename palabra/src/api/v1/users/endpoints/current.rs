use actix_web::get;
use palabra_core::api_models::UserInfoResponse;
use palabra_database::entities::user::UserQuery;

use crate::api::errors::{EndpointResponseBuilder, EndpointResult, UsersErrorReason};
use crate::api::traits::IntoApiModel;
use crate::authentication::UserAuthenticationExtractor;
use crate::require_user_authentication;
use crate::state::ApplicationState;



/// Information about the current user
/// (i.e. the user who owns the authentication token used in the request).
#[get("/me")]
pub async fn get_current_user_info(
    state: ApplicationState,
    authentication_extractor: UserAuthenticationExtractor,
) -> EndpointResult {
    let authenticated_user = require_user_authentication!(authentication_extractor);

    let mut database_connection = state.acquire_database_connection().await?;


    let Some(current_user) =
        UserQuery::get_by_id(&mut database_connection, authenticated_user.user_id()).await?
    else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(UsersErrorReason::user_not_found())
            .build();
    };


    EndpointResponseBuilder::ok()
        .with_json_body(UserInfoResponse {
            user: current_user.into_api_model(),
        })
        .build()
}
