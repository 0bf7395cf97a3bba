use chrono::Utc;
use palabra_core::exercise::ExerciseType;
use palabra_core::id::{ExerciseId, LessonContentId, VocabularyId};
use sqlx::types::Json;
use sqlx::PgConnection;

use super::{ExerciseModel, InternalExerciseModel};
use crate::{QueryResult, TryIntoExternalModel};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewExercise {
    pub exercise_type: ExerciseType,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub vocabulary_id: Option<VocabularyId>,
    pub lesson_content_id: Option<LessonContentId>,
}


pub struct ExerciseMutation;

impl ExerciseMutation {
    /// Fails with a unique constraint violation if an exercise
    /// with the same type and question already exists.
    pub async fn create(
        connection: &mut PgConnection,
        exercise: NewExercise,
    ) -> QueryResult<ExerciseModel> {
        let newly_created_exercise = sqlx::query_as::<_, InternalExerciseModel>(
            "INSERT INTO palabra.exercise \
                (id, exercise_type, question, options, answer, \
                vocabulary_id, lesson_content_id, created_at) \
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
            RETURNING \
                id, exercise_type, question, options, answer, \
                vocabulary_id, lesson_content_id, created_at",
        )
        .bind(ExerciseId::generate().into_uuid())
        .bind(exercise.exercise_type.as_str())
        .bind(exercise.question)
        .bind(Json(exercise.options))
        .bind(exercise.answer)
        .bind(exercise.vocabulary_id.map(VocabularyId::into_uuid))
        .bind(exercise.lesson_content_id.map(LessonContentId::into_uuid))
        .bind(Utc::now())
        .fetch_one(connection)
        .await?;

        newly_created_exercise.try_into_external_model()
    }
}
