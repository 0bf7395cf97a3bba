use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::BasePathsConfiguration;
use crate::{
    traits::TryResolveWithContext,
    utilities::{create_directory_if_missing, replace_placeholders_in_path},
    DirectoryCreationError,
    MediaConfigurationError,
};


/// Used when `maximum_upload_size_bytes` is not set (32 MiB).
const DEFAULT_MAXIMUM_UPLOAD_SIZE_BYTES: usize = 32 * 1024 * 1024;

/// Used when `maximum_document_text_size_bytes` is not set (16 MiB).
const DEFAULT_MAXIMUM_DOCUMENT_TEXT_SIZE_BYTES: usize = 16 * 1024 * 1024;


#[derive(Deserialize, Debug)]
pub(super) struct UnresolvedMediaConfiguration {
    images_directory_path: String,

    maximum_upload_size_bytes: Option<usize>,

    maximum_document_text_size_bytes: Option<usize>,
}


/// Uploaded vocabulary images and documents.
#[derive(Debug, Clone)]
pub struct MediaConfiguration {
    /// Flat directory holding every vocabulary image, keyed by filename.
    pub images_directory_path: PathBuf,

    /// Upper bound on the size of a single multipart request body
    /// (documents on `/vocabulary/parse` and `/vocabulary/upload`, images on `/vocabulary/images`).
    pub maximum_upload_size_bytes: usize,

    /// Upper bound on the decompressed text read out of one uploaded document.
    /// A `.docx` is a zip archive, so a small upload can inflate far beyond
    /// `maximum_upload_size_bytes`.
    pub maximum_document_text_size_bytes: usize,
}


impl<'r> TryResolveWithContext<'r> for UnresolvedMediaConfiguration {
    type Resolved = MediaConfiguration;
    type Context = &'r BasePathsConfiguration;
    type Error = MediaConfigurationError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        let maximum_upload_size_bytes = self
            .maximum_upload_size_bytes
            .unwrap_or(DEFAULT_MAXIMUM_UPLOAD_SIZE_BYTES);

        if maximum_upload_size_bytes == 0 {
            return Err(MediaConfigurationError::ZeroMaximumUploadSize);
        }

        let maximum_document_text_size_bytes = self
            .maximum_document_text_size_bytes
            .unwrap_or(DEFAULT_MAXIMUM_DOCUMENT_TEXT_SIZE_BYTES);

        if maximum_document_text_size_bytes == 0 {
            return Err(MediaConfigurationError::ZeroMaximumDocumentTextSize);
        }

        let images_directory_path = replace_placeholders_in_path(
            Path::new(&self.images_directory_path),
            context.placeholders(),
        );

        Ok(Self::Resolved {
            images_directory_path,
            maximum_upload_size_bytes,
            maximum_document_text_size_bytes,
        })
    }
}

impl MediaConfiguration {
    pub fn create_images_directory_if_missing(&self) -> Result<(), DirectoryCreationError> {
        create_directory_if_missing(&self.images_directory_path)
    }
}
