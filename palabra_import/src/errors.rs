use palabra_database::QueryError;
use thiserror::Error;

use crate::extraction::UnreadableDocumentError;
use crate::images::ImageStoreError;
use crate::validation::ValidationIssue;


#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unable to read document")]
    UnreadableDocument {
        #[from]
        #[source]
        error: UnreadableDocumentError,
    },

    /// Extraction succeeded, but produced no lines
    /// (this includes unsupported file extensions).
    #[error("document has no readable content")]
    NoReadableContent,

    #[error("document contains neither vocabulary nor exercises")]
    EmptyDocument,

    /// Commit-mode validation found issues, nothing was persisted.
    #[error("document failed validation with {} issue(s)", .issues.len())]
    ValidationFailed { issues: Vec<ValidationIssue> },

    #[error("image store error")]
    ImageStore {
        #[from]
        #[source]
        error: ImageStoreError,
    },

    /// The import transaction was rolled back.
    #[error("failed to persist imported document")]
    Persistence {
        #[from]
        #[source]
        error: QueryError,
    },
}

impl From<sqlx::Error> for ImportError {
    fn from(error: sqlx::Error) -> Self {
        Self::Persistence {
            error: QueryError::SqlxError { error },
        }
    }
}
