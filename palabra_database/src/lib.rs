//! PostgreSQL access for Palabra, split per entity into
//! models, queries and mutations.
//!
//! Every query and mutation takes a `&mut PgConnection`, which means callers
//! decide whether it runs on a pooled connection or inside a transaction.

use std::borrow::Cow;

use thiserror::Error;

#[macro_use]
pub(crate) mod macros;

pub mod entities;


/// Embedded SQL migrations for the `palabra` schema.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");



#[derive(Debug, Error)]
pub enum QueryError {
    #[error("sqlx error")]
    SqlxError {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    #[error("model error: {}", .reason)]
    ModelError { reason: Cow<'static, str> },
}

impl QueryError {
    pub fn model_error<R>(reason: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::ModelError {
            reason: reason.into(),
        }
    }
}


pub type QueryResult<R, E = QueryError> = Result<R, E>;



/// Converts a raw database row into its strongly-typed model.
pub trait IntoExternalModel {
    type ExternalModel;

    fn into_external_model(self) -> Self::ExternalModel;
}

/// Like [`IntoExternalModel`], for rows whose columns
/// can hold values the model does not accept.
pub trait TryIntoExternalModel {
    type ExternalModel;
    type Error;

    fn try_into_external_model(self) -> Result<Self::ExternalModel, Self::Error>;
}
