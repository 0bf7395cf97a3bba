use palabra_core::api_models::{
    DocumentPreviewResponse,
    ExerciseInfo,
    ParsedExercise,
    ParsedVocabularyEntry,
};
use palabra_database::entities::exercise::ExerciseWithVocabularyModel;
use palabra_import::parser::{ExerciseEntry, VocabularyEntry};
use palabra_import::pipeline::DocumentPreview;

use crate::api::traits::IntoApiModel;



impl IntoApiModel for VocabularyEntry {
    type ApiModel = ParsedVocabularyEntry;

    fn into_api_model(self) -> Self::ApiModel {
        ParsedVocabularyEntry {
            word: self.word,
            image_name: self.image_name,
        }
    }
}

impl IntoApiModel for ExerciseEntry {
    type ApiModel = ParsedExercise;

    fn into_api_model(self) -> Self::ApiModel {
        ParsedExercise {
            exercise_type: self.kind.as_str().to_string(),
            question: self.question,
            options: self.options,
            answer: self.answer,
        }
    }
}

impl IntoApiModel for DocumentPreview {
    type ApiModel = DocumentPreviewResponse;

    fn into_api_model(self) -> Self::ApiModel {
        DocumentPreviewResponse {
            vocabulary: self
                .document
                .vocabulary
                .into_iter()
                .map(IntoApiModel::into_api_model)
                .collect(),
            exercises: self
                .document
                .exercises
                .into_iter()
                .map(IntoApiModel::into_api_model)
                .collect(),
            errors: self.issues.iter().map(ToString::to_string).collect(),
        }
    }
}


impl IntoApiModel for ExerciseWithVocabularyModel {
    type ApiModel = ExerciseInfo;

    fn into_api_model(self) -> Self::ApiModel {
        ExerciseInfo {
            id: self.exercise.id,
            exercise_type: self.exercise.exercise_type,
            question: self.exercise.question,
            options: self.exercise.options,
            answer: self.exercise.answer,
            vocabulary_word: self.vocabulary_word,
            created_at: self.exercise.created_at,
        }
    }
}
