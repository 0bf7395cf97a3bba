use chrono::{DateTime, Utc};
use palabra_core::id::VocabularyId;
use uuid::Uuid;

use crate::IntoExternalModel;



pub struct VocabularyModel {
    pub id: VocabularyId,

    /// Unique across all vocabulary.
    pub word: String,

    /// Filename inside the vocabulary image directory.
    pub image_name: String,

    pub created_at: DateTime<Utc>,
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalVocabularyModel {
    pub(super) id: Uuid,

    pub(super) word: String,

    pub(super) image_name: String,

    pub(super) created_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalVocabularyModel {
    type ExternalModel = VocabularyModel;

    fn into_external_model(self) -> Self::ExternalModel {
        VocabularyModel {
            id: VocabularyId::new(self.id),
            word: self.word,
            image_name: self.image_name,
            created_at: self.created_at,
        }
    }
}
