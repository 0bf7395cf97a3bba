use sqlx::PgConnection;

use crate::{QueryError, QueryResult};


pub struct VocabularyQuery;

impl VocabularyQuery {
    pub async fn count(connection: &mut PgConnection) -> QueryResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM palabra.vocabulary")
            .fetch_one(connection)
            .await
            .map_err(|error| QueryError::SqlxError { error })
    }
}
