use chrono::{DateTime, Utc};
use palabra_core::id::{LessonContentId, UserId};
use uuid::Uuid;

use crate::IntoExternalModel;



/// Groups everything created by a single document import.
pub struct LessonContentModel {
    pub id: LessonContentId,

    pub title: String,

    pub created_by: UserId,

    pub created_at: DateTime<Utc>,
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalLessonContentModel {
    pub(super) id: Uuid,

    pub(super) title: String,

    pub(super) created_by: Uuid,

    pub(super) created_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalLessonContentModel {
    type ExternalModel = LessonContentModel;

    fn into_external_model(self) -> Self::ExternalModel {
        LessonContentModel {
            id: LessonContentId::new(self.id),
            title: self.title,
            created_by: UserId::new(self.created_by),
            created_at: self.created_at,
        }
    }
}
