use chrono::Utc;
use palabra_core::id::{LessonContentId, UserId};
use sqlx::PgConnection;

use super::{InternalLessonContentModel, LessonContentModel};
use crate::{IntoExternalModel, QueryResult};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewLessonContent {
    pub title: String,
    pub created_by: UserId,
}


pub struct LessonContentMutation;

impl LessonContentMutation {
    pub async fn create(
        connection: &mut PgConnection,
        lesson_content: NewLessonContent,
    ) -> QueryResult<LessonContentModel> {
        let newly_created_lesson_content = sqlx::query_as::<_, InternalLessonContentModel>(
            "INSERT INTO palabra.lesson_content (id, title, created_by, created_at) \
            VALUES ($1, $2, $3, $4) \
            RETURNING id, title, created_by, created_at",
        )
        .bind(LessonContentId::generate().into_uuid())
        .bind(lesson_content.title)
        .bind(lesson_content.created_by.into_uuid())
        .bind(Utc::now())
        .fetch_one(connection)
        .await?;

        Ok(newly_created_lesson_content.into_external_model())
    }
}
