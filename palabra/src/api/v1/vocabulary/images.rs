use actix_multipart::Multipart;
use actix_web::{delete, get, post, web};
use palabra_core::api_models::{ImageDeletionQuery, ImageDeletionRequest, ImagesResponse};
use palabra_import::images::{self, ImageUpload};
use tracing::info;

use super::multipart::collect_uploaded_files;
use crate::api::errors::{EndpointResponseBuilder, EndpointResult, ImagesErrorReason};
use crate::authentication::UserAuthenticationExtractor;
use crate::require_user_authentication;
use crate::state::ApplicationState;


const IMAGES_FIELD_NAME: &str = "images";



/// List vocabulary images
///
/// Returns the names of all available images, sorted.
#[get("/images")]
pub async fn get_all_images(
    state: ApplicationState,
    authentication_extractor: UserAuthenticationExtractor,
) -> EndpointResult {
    require_user_authentication!(authentication_extractor);

    let image_store = state.image_store().clone();
    let image_names = web::block(move || images::list_images(&image_store)).await??;

    EndpointResponseBuilder::ok()
        .with_json_body(ImagesResponse {
            images: image_names,
        })
        .build()
}



/// Upload vocabulary images
///
/// Every file in an `images` field is saved under its own filename,
/// replacing any existing image with that name.
#[post("/images")]
pub async fn add_images(
    state: ApplicationState,
    authentication_extractor: UserAuthenticationExtractor,
    payload: Multipart,
) -> EndpointResult {
    let authenticated_user = require_user_authentication!(authentication_extractor);

    let uploads = collect_uploaded_files(
        payload,
        state.configuration().media.maximum_upload_size_bytes,
    )
    .await?
    .into_iter()
    .filter(|file| file.field_name == IMAGES_FIELD_NAME)
    .map(|file| ImageUpload {
        file_name: file.file_name,
        contents: file.contents,
    })
    .collect::<Vec<_>>();

    if uploads.is_empty() {
        return EndpointResponseBuilder::bad_request()
            .with_error_reason(ImagesErrorReason::no_images_specified())
            .build();
    }


    let image_store = state.image_store().clone();
    let saved_image_names = web::block(move || images::add_images(&image_store, uploads)).await??;


    info!(
        user_id = %authenticated_user.user_id(),
        saved_images = ?saved_image_names,
        "User uploaded vocabulary images."
    );


    EndpointResponseBuilder::created()
        .with_json_body(ImagesResponse {
            images: saved_image_names,
        })
        .build()
}



/// Delete vocabulary images
///
/// Image names come from the JSON body (`{"images": [...]}`) or,
/// if the body lists none, from the `name` query parameter.
/// Names that do not exist or would escape the image directory are skipped.
#[delete("/images")]
pub async fn delete_images(
    state: ApplicationState,
    authentication_extractor: UserAuthenticationExtractor,
    request_data: Option<web::Json<ImageDeletionRequest>>,
    query: web::Query<ImageDeletionQuery>,
) -> EndpointResult {
    let authenticated_user = require_user_authentication!(authentication_extractor);

    let mut image_names = request_data
        .map(|request_data| request_data.into_inner().images)
        .unwrap_or_default();

    if image_names.is_empty() {
        image_names.extend(query.into_inner().name);
    }

    if image_names.is_empty() {
        return EndpointResponseBuilder::bad_request()
            .with_error_reason(ImagesErrorReason::no_images_specified())
            .build();
    }


    let image_store = state.image_store().clone();
    let deleted_image_names =
        web::block(move || images::delete_images(&image_store, image_names)).await?;


    info!(
        user_id = %authenticated_user.user_id(),
        deleted_images = ?deleted_image_names,
        "User deleted vocabulary images."
    );


    EndpointResponseBuilder::ok()
        .with_json_body(ImagesResponse {
            images: deleted_image_names,
        })
        .build()
}
