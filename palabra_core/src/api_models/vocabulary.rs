use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{exercise::ExerciseType, id::ExerciseId};



/// A single vocabulary entry, as parsed from an uploaded document.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct ParsedVocabularyEntry {
    pub word: String,

    /// Filename of the image inside the vocabulary image directory.
    /// Empty if the document did not name one.
    #[serde(rename = "imageName")]
    pub image_name: String,
}


/// A single exercise, as parsed from an uploaded document.
///
/// The type is kept as the raw text from the document,
/// since previews must be able to show unrecognized types.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct ParsedExercise {
    #[serde(rename = "type")]
    pub exercise_type: String,

    pub question: String,

    pub options: Vec<String>,

    pub answer: String,
}


/// Response of `POST /api/v1/vocabulary/parse`.
///
/// A non-empty `errors` list means the same document
/// would be rejected by `POST /api/v1/vocabulary/upload`.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct DocumentPreviewResponse {
    pub vocabulary: Vec<ParsedVocabularyEntry>,

    pub exercises: Vec<ParsedExercise>,

    pub errors: Vec<String>,
}


#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct DocumentUploadResponse {
    pub created: bool,
}



#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct ExerciseInfo {
    pub id: ExerciseId,

    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,

    pub question: String,

    pub options: Vec<String>,

    pub answer: String,

    /// Word of the vocabulary entry this exercise is linked to, if any.
    pub vocabulary_word: Option<String>,

    pub created_at: DateTime<Utc>,
}


/// Response of `GET /api/v1/vocabulary`, newest exercises first.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct ExercisesResponse {
    pub exercises: Vec<ExerciseInfo>,
}


#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct VocabularyStatsResponse {
    pub total_words: i64,

    pub total_exercises: i64,

    /// Always zero; imports are processed synchronously.
    pub pending_uploads: i64,

    /// Always zero; failed imports are not recorded.
    pub errors: i64,
}



/// Image filenames, used by all three `/api/v1/vocabulary/images` endpoints.
///
/// On `GET`, these are all the available images (sorted),
/// on `POST` the images that were saved and on `DELETE`
/// the images that were actually removed.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct ImagesResponse {
    pub images: Vec<String>,
}


#[derive(Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
pub struct ImageDeletionRequest {
    #[serde(default)]
    pub images: Vec<String>,
}


/// Alternative to [`ImageDeletionRequest`]: `DELETE /api/v1/vocabulary/images?name=cat.png`.
#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct ImageDeletionQuery {
    pub name: Option<String>,
}
