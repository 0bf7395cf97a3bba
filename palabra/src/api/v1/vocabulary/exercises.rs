use actix_web::get;
use futures_util::TryStreamExt;
use palabra_core::api_models::{ExercisesResponse, VocabularyStatsResponse};
use palabra_database::entities::exercise::ExerciseQuery;
use palabra_database::entities::vocabulary::VocabularyQuery;

use crate::api::errors::{EndpointResponseBuilder, EndpointResult};
use crate::api::traits::IntoApiModel;
use crate::authentication::UserAuthenticationExtractor;
use crate::require_user_authentication;
use crate::state::ApplicationState;



/// List all exercises
///
/// Newest exercises come first. Each exercise carries the word
/// of its vocabulary entry, if it has one.
#[get("")]
pub async fn get_all_exercises(
    state: ApplicationState,
    authentication_extractor: UserAuthenticationExtractor,
) -> EndpointResult {
    require_user_authentication!(authentication_extractor);

    let mut database_connection = state.acquire_database_connection().await?;


    let exercises = ExerciseQuery::get_all_with_vocabulary(&mut database_connection)
        .map_ok(IntoApiModel::into_api_model)
        .try_collect::<Vec<_>>()
        .await?;


    EndpointResponseBuilder::ok()
        .with_json_body(ExercisesResponse { exercises })
        .build()
}



#[get("/stats")]
pub async fn get_vocabulary_stats(
    state: ApplicationState,
    authentication_extractor: UserAuthenticationExtractor,
) -> EndpointResult {
    require_user_authentication!(authentication_extractor);

    let mut database_connection = state.acquire_database_connection().await?;

    let total_words = VocabularyQuery::count(&mut database_connection).await?;
    let total_exercises = ExerciseQuery::count(&mut database_connection).await?;


    // Imports are synchronous, so nothing is ever pending or failed.
    EndpointResponseBuilder::ok()
        .with_json_body(VocabularyStatsResponse {
            total_words,
            total_exercises,
            pending_uploads: 0,
            errors: 0,
        })
        .build()
}
