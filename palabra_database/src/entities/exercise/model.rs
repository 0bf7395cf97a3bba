use std::borrow::Cow;

use chrono::{DateTime, Utc};
use palabra_core::exercise::ExerciseType;
use palabra_core::id::{ExerciseId, LessonContentId, VocabularyId};
use sqlx::types::Json;
use uuid::Uuid;

use crate::{QueryError, TryIntoExternalModel};



pub struct ExerciseModel {
    pub id: ExerciseId,

    pub exercise_type: ExerciseType,

    pub question: String,

    pub options: Vec<String>,

    pub answer: String,

    pub vocabulary_id: Option<VocabularyId>,

    /// `None` once the lesson content it was imported with is deleted.
    pub lesson_content_id: Option<LessonContentId>,

    pub created_at: DateTime<Utc>,
}


/// An exercise together with the word of its linked vocabulary entry.
pub struct ExerciseWithVocabularyModel {
    pub exercise: ExerciseModel,

    pub vocabulary_word: Option<String>,
}



fn parse_exercise_type(raw_exercise_type: &str) -> Result<ExerciseType, QueryError> {
    ExerciseType::from_name(raw_exercise_type).ok_or_else(|| {
        QueryError::model_error(Cow::from(format!(
            "unrecognized exercise type in database: {}",
            raw_exercise_type
        )))
    })
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalExerciseModel {
    pub(super) id: Uuid,

    pub(super) exercise_type: String,

    pub(super) question: String,

    pub(super) options: Json<Vec<String>>,

    pub(super) answer: String,

    pub(super) vocabulary_id: Option<Uuid>,

    pub(super) lesson_content_id: Option<Uuid>,

    pub(super) created_at: DateTime<Utc>,
}

impl TryIntoExternalModel for InternalExerciseModel {
    type ExternalModel = ExerciseModel;
    type Error = QueryError;

    fn try_into_external_model(self) -> Result<Self::ExternalModel, Self::Error> {
        Ok(ExerciseModel {
            id: ExerciseId::new(self.id),
            exercise_type: parse_exercise_type(&self.exercise_type)?,
            question: self.question,
            options: self.options.0,
            answer: self.answer,
            vocabulary_id: self.vocabulary_id.map(VocabularyId::new),
            lesson_content_id: self.lesson_content_id.map(LessonContentId::new),
            created_at: self.created_at,
        })
    }
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalExerciseWithVocabularyModel {
    #[sqlx(flatten)]
    pub(super) exercise: InternalExerciseModel,

    pub(super) vocabulary_word: Option<String>,
}

impl TryIntoExternalModel for InternalExerciseWithVocabularyModel {
    type ExternalModel = ExerciseWithVocabularyModel;
    type Error = QueryError;

    fn try_into_external_model(self) -> Result<Self::ExternalModel, Self::Error> {
        Ok(ExerciseWithVocabularyModel {
            exercise: self.exercise.try_into_external_model()?,
            vocabulary_word: self.vocabulary_word,
        })
    }
}
