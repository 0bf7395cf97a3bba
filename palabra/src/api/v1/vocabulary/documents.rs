use actix_multipart::Multipart;
use actix_web::{post, web};
use palabra_core::api_models::DocumentUploadResponse;
use palabra_import::importer::execute_import;
use palabra_import::pipeline;
use tracing::info;

use super::multipart::{collect_uploaded_files, UploadedFile};
use crate::api::errors::{
    EndpointError,
    EndpointResponseBuilder,
    EndpointResult,
    ImportErrorReason,
};
use crate::api::traits::IntoApiModel;
use crate::authentication::UserAuthenticationExtractor;
use crate::require_user_authentication;
use crate::state::ApplicationState;


const DOCUMENT_FIELD_NAME: &str = "document";


/// Finds the uploaded document among the multipart files.
fn take_document(uploaded_files: Vec<UploadedFile>) -> Result<UploadedFile, EndpointError> {
    uploaded_files
        .into_iter()
        .find(|file| file.field_name == DOCUMENT_FIELD_NAME)
        .ok_or_else(|| EndpointError::document_rejected(ImportErrorReason::document_required()))
}



/// Preview a document
///
/// Parses and validates the uploaded `.docx` or `.pdf` document
/// without persisting anything. Validation issues are listed in the
/// response instead of rejecting the document.
#[post("/parse")]
pub async fn parse_document(
    state: ApplicationState,
    authentication_extractor: UserAuthenticationExtractor,
    payload: Multipart,
) -> EndpointResult {
    require_user_authentication!(authentication_extractor);

    let uploaded_files = collect_uploaded_files(
        payload,
        state.configuration().media.maximum_upload_size_bytes,
    )
    .await?;

    let document = take_document(uploaded_files)?;


    let image_store = state.image_store().clone();
    let maximum_text_size_bytes = state.configuration().media.maximum_document_text_size_bytes;

    let preview = web::block(move || {
        pipeline::parse_document(
            &document.contents,
            &document.file_name,
            maximum_text_size_bytes,
            &image_store,
        )
    })
    .await??;


    EndpointResponseBuilder::ok()
        .with_json_body(preview.into_api_model())
        .build()
}



/// Import a document
///
/// Parses and strictly validates the uploaded document, then stores its
/// vocabulary and exercises under a new lesson in a single transaction.
/// Any validation issue rejects the entire document.
#[post("/upload")]
pub async fn upload_document(
    state: ApplicationState,
    authentication_extractor: UserAuthenticationExtractor,
    payload: Multipart,
) -> EndpointResult {
    let authenticated_user = require_user_authentication!(authentication_extractor);

    let uploaded_files = collect_uploaded_files(
        payload,
        state.configuration().media.maximum_upload_size_bytes,
    )
    .await?;

    let document = take_document(uploaded_files)?;
    let document_file_name = document.file_name.clone();


    let image_store = state.image_store().clone();
    let maximum_text_size_bytes = state.configuration().media.maximum_document_text_size_bytes;

    let import_plan = web::block(move || {
        pipeline::prepare_document_import(
            &document.contents,
            &document.file_name,
            maximum_text_size_bytes,
            &image_store,
        )
    })
    .await??;


    let mut database_connection = state.acquire_database_connection().await?;

    let import_summary = execute_import(
        &mut database_connection,
        import_plan,
        authenticated_user.user_id(),
    )
    .await?;


    info!(
        user_id = %authenticated_user.user_id(),
        file_name = %document_file_name,
        lesson_content_id = %import_summary.lesson_content_id,
        "User imported a document."
    );


    EndpointResponseBuilder::created()
        .with_json_body(DocumentUploadResponse { created: true })
        .build()
}
