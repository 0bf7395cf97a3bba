use actix_web::{post, web};
use palabra_core::api_models::{UserRegistrationRequest, UserRegistrationResponse};
use palabra_database::entities::user::{UserMutation, UserQuery, UserRegistrationInfo};
use sqlx::Acquire;
use tracing::info;

use crate::api::errors::{EndpointResponseBuilder, EndpointResult, UsersErrorReason};
use crate::api::traits::IntoApiModel;
use crate::state::ApplicationState;



/// Register a new user
///
/// Both the username and the display name must not already be in use.
#[post("")]
pub async fn register_user(
    state: ApplicationState,
    request_data: web::Json<UserRegistrationRequest>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;


    let registration_request_data = request_data.into_inner();


    // Ensure the provided username is unique.
    let username_already_exists =
        UserQuery::exists_by_username(&mut transaction, &registration_request_data.username)
            .await?;

    if username_already_exists {
        return EndpointResponseBuilder::conflict()
            .with_error_reason(UsersErrorReason::username_already_exists())
            .build();
    }


    // Ensure the provided display name is unique.
    let display_name_already_exists = UserQuery::exists_by_display_name(
        &mut transaction,
        &registration_request_data.display_name,
    )
    .await?;

    if display_name_already_exists {
        return EndpointResponseBuilder::conflict()
            .with_error_reason(UsersErrorReason::display_name_already_exists())
            .build();
    }


    // Create new user.
    let newly_created_user = UserMutation::create_user(
        &mut transaction,
        state.hasher(),
        UserRegistrationInfo {
            username: registration_request_data.username,
            display_name: registration_request_data.display_name,
            password: registration_request_data.password,
        },
    )
    .await?;


    transaction.commit().await?;


    info!(
        user_id = %newly_created_user.id,
        username = newly_created_user.username,
        "New user has registered."
    );


    EndpointResponseBuilder::ok()
        .with_json_body(UserRegistrationResponse {
            user: newly_created_user.into_api_model(),
        })
        .build()
}
