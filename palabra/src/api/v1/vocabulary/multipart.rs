use actix_multipart::Multipart;
use futures_util::TryStreamExt;

use crate::api::errors::EndpointError;


/// A file field of a `multipart/form-data` request body.
pub(super) struct UploadedFile {
    pub(super) field_name: String,
    pub(super) file_name: String,
    pub(super) contents: Vec<u8>,
}


/// Reads every field of the request body, keeping only fields that carry a filename.
///
/// Fails with [`EndpointError::UploadTooLarge`] as soon as the combined size
/// of all fields exceeds `maximum_size_bytes`.
pub(super) async fn collect_uploaded_files(
    mut payload: Multipart,
    maximum_size_bytes: usize,
) -> Result<Vec<UploadedFile>, EndpointError> {
    let mut uploaded_files = Vec::new();
    let mut total_size_bytes: usize = 0;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|error| EndpointError::invalid_multipart_body(error.to_string()))?
    {
        let field_name = field.name().map(str::to_string);
        let file_name = field
            .content_disposition()
            .and_then(|content_disposition| content_disposition.get_filename())
            .map(str::to_string);

        let mut contents = Vec::new();

        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|error| EndpointError::invalid_multipart_body(error.to_string()))?
        {
            total_size_bytes = total_size_bytes.saturating_add(chunk.len());

            if total_size_bytes > maximum_size_bytes {
                return Err(EndpointError::upload_too_large(maximum_size_bytes));
            }

            contents.extend_from_slice(&chunk);
        }

        if let (Some(field_name), Some(file_name)) = (field_name, file_name) {
            uploaded_files.push(UploadedFile {
                field_name,
                file_name,
                contents,
            });
        }
    }

    Ok(uploaded_files)
}
