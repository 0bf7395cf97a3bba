use futures_core::stream::BoxStream;
use sqlx::PgConnection;

use super::{ExerciseWithVocabularyModel, InternalExerciseWithVocabularyModel};
use crate::{QueryError, QueryResult, TryIntoExternalModel};


type RawExerciseWithVocabularyStream<'c> =
    BoxStream<'c, Result<InternalExerciseWithVocabularyModel, sqlx::Error>>;

create_async_stream_wrapper!(
    pub struct ExerciseWithVocabularyStream<'c>;
    transforms stream RawExerciseWithVocabularyStream<'c> => stream of QueryResult<ExerciseWithVocabularyModel>:
        |value|
            value.map(|result| {
                result
                    .map_err(|error| QueryError::SqlxError { error })
                    .and_then(InternalExerciseWithVocabularyModel::try_into_external_model)
            })
);



pub struct ExerciseQuery;

impl ExerciseQuery {
    /// Streams every exercise, newest first.
    pub fn get_all_with_vocabulary(
        connection: &mut PgConnection,
    ) -> ExerciseWithVocabularyStream<'_> {
        let exercise_stream = sqlx::query_as::<_, InternalExerciseWithVocabularyModel>(
            "SELECT \
                exercise.id, exercise.exercise_type, exercise.question, \
                exercise.options, exercise.answer, exercise.vocabulary_id, \
                exercise.lesson_content_id, exercise.created_at, \
                vocabulary.word AS vocabulary_word \
            FROM palabra.exercise AS exercise \
            LEFT JOIN palabra.vocabulary AS vocabulary \
                ON exercise.vocabulary_id = vocabulary.id \
            ORDER BY exercise.created_at DESC, exercise.id DESC",
        )
        .fetch(connection);

        ExerciseWithVocabularyStream::new(exercise_stream)
    }

    pub async fn count(connection: &mut PgConnection) -> QueryResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM palabra.exercise")
            .fetch_one(connection)
            .await
            .map_err(|error| QueryError::SqlxError { error })
    }
}
