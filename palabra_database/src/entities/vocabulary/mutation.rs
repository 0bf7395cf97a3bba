use chrono::Utc;
use palabra_core::id::VocabularyId;
use sqlx::PgConnection;

use super::{InternalVocabularyModel, VocabularyModel};
use crate::{IntoExternalModel, QueryResult};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewVocabulary {
    pub word: String,
    pub image_name: String,
}


pub struct VocabularyMutation;

impl VocabularyMutation {
    /// Fails with a unique constraint violation if the word already exists.
    pub async fn create(
        connection: &mut PgConnection,
        vocabulary: NewVocabulary,
    ) -> QueryResult<VocabularyModel> {
        let newly_created_vocabulary = sqlx::query_as::<_, InternalVocabularyModel>(
            "INSERT INTO palabra.vocabulary (id, word, image_name, created_at) \
            VALUES ($1, $2, $3, $4) \
            RETURNING id, word, image_name, created_at",
        )
        .bind(VocabularyId::generate().into_uuid())
        .bind(vocabulary.word)
        .bind(vocabulary.image_name)
        .bind(Utc::now())
        .fetch_one(connection)
        .await?;

        Ok(newly_created_vocabulary.into_external_model())
    }
}
