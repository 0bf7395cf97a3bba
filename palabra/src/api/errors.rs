//! Provides ways of handling errors in API endpoint functions
//! and ways to have those errors automatically turned into correct
//! HTTP error responses when returned as `Err(error)` from those functions.

use std::borrow::Cow;

use actix_http::header::{HeaderName, HeaderValue};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::error::BlockingError;
use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
pub use palabra_core::api_models::{
    ErrorReason,
    ImagesErrorReason,
    ImportErrorReason,
    InvalidJsonBodyReason,
    LoginErrorReason,
    UsersErrorReason,
};
use palabra_auth::JWTCreationError;
use palabra_database::entities::user::{UserCredentialValidationError, UserQueryError};
use palabra_database::QueryError;
use palabra_import::images::ImageStoreError;
use palabra_import::ImportError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;



#[derive(Debug, Error)]
pub enum EndpointError {
    /*
     * Client errors.
     *
     * These are exposed as a HTTP status code and a JSON-encoded error reason.
     * For errors specific to a single endpoint, prefer returning
     * `EndpointResponseBuilder::bad_request().with_error_reason(...).build()` instead.
     */
    #[error("missing authentication")]
    MissingAuthentication,

    #[error("expected a JSON body")]
    MissingJsonBody,

    #[error("invalid JSON body: {:?}", .reason)]
    InvalidJsonBody { reason: InvalidJsonBodyReason },

    #[error("invalid multipart body: {}", .reason)]
    InvalidMultipartBody { reason: Cow<'static, str> },

    #[error("upload exceeds {} bytes", .maximum_size_bytes)]
    UploadTooLarge { maximum_size_bytes: usize },

    /// The uploaded document was rejected by the import pipeline.
    #[error("document rejected: {:?}", .reason)]
    DocumentRejected { reason: ImportErrorReason },

    /*
     * Server errors.
     *
     * Reasons are logged, but not shown externally.
     */
    #[error("internal server error (with reason): {}", .reason)]
    InternalErrorWithReason { reason: Cow<'static, str> },

    #[error("internal server error (generic)")]
    InternalGenericError {
        #[source]
        error: Box<dyn std::error::Error>,
    },

    #[error("internal server error (database error)")]
    InternalDatabaseError {
        #[from]
        #[source]
        error: sqlx::Error,
    },
}

impl EndpointError {
    pub const fn missing_authentication() -> Self {
        Self::MissingAuthentication
    }

    pub const fn missing_json_body() -> Self {
        Self::MissingJsonBody
    }

    pub const fn invalid_json_body(reason: InvalidJsonBodyReason) -> Self {
        Self::InvalidJsonBody { reason }
    }

    pub fn invalid_multipart_body<R>(reason: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::InvalidMultipartBody {
            reason: reason.into(),
        }
    }

    pub const fn upload_too_large(maximum_size_bytes: usize) -> Self {
        Self::UploadTooLarge { maximum_size_bytes }
    }

    pub const fn document_rejected(reason: ImportErrorReason) -> Self {
        Self::DocumentRejected { reason }
    }

    pub fn internal_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::InternalGenericError {
            error: Box::new(error),
        }
    }
}

impl ResponseError for EndpointError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAuthentication => StatusCode::UNAUTHORIZED,
            Self::MissingJsonBody => StatusCode::BAD_REQUEST,
            Self::InvalidJsonBody { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidMultipartBody { .. } => StatusCode::BAD_REQUEST,
            Self::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::DocumentRejected { .. } => StatusCode::BAD_REQUEST,
            Self::InternalErrorWithReason { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalGenericError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalDatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let response_builder = EndpointResponseBuilder::new(self.status_code());

        let fallibly_built_response = match self {
            Self::MissingAuthentication => response_builder
                .with_error_reason(ErrorReason::missing_authentication())
                .build(),
            Self::MissingJsonBody => response_builder
                .with_error_reason(ErrorReason::missing_json_body())
                .build(),
            Self::InvalidJsonBody { reason } => response_builder
                .with_error_reason(ErrorReason::invalid_json_body(*reason))
                .build(),
            Self::InvalidMultipartBody { .. } => response_builder
                .with_error_reason(ErrorReason::invalid_multipart_body())
                .build(),
            Self::UploadTooLarge { maximum_size_bytes } => response_builder
                .with_error_reason(ErrorReason::upload_too_large(*maximum_size_bytes))
                .build(),
            Self::DocumentRejected { reason } => response_builder
                .with_error_reason(reason.clone())
                .build(),
            Self::InternalErrorWithReason { .. }
            | Self::InternalGenericError { .. }
            | Self::InternalDatabaseError { .. } => {
                error!(error = ?self, "Internal error while handling request.");

                response_builder.build()
            }
        };

        fallibly_built_response.unwrap_or_else(|_| HttpResponse::InternalServerError().finish())
    }
}


impl From<QueryError> for EndpointError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::SqlxError { error } => Self::InternalDatabaseError { error },
            QueryError::ModelError { reason } => Self::InternalErrorWithReason { reason },
        }
    }
}

impl From<UserQueryError> for EndpointError {
    fn from(value: UserQueryError) -> Self {
        match value {
            UserQueryError::SqlxError { error } => Self::InternalDatabaseError { error },
            UserQueryError::ModelError { reason } => Self::InternalErrorWithReason { reason },
            UserQueryError::HasherError { error } => Self::internal_error(error),
        }
    }
}

impl From<UserCredentialValidationError> for EndpointError {
    fn from(value: UserCredentialValidationError) -> Self {
        match value {
            UserCredentialValidationError::SqlxError { error } => {
                Self::InternalDatabaseError { error }
            }
            UserCredentialValidationError::ModelError { reason } => {
                Self::InternalErrorWithReason { reason }
            }
            UserCredentialValidationError::HasherError { error } => Self::internal_error(error),
        }
    }
}

impl From<JWTCreationError> for EndpointError {
    fn from(value: JWTCreationError) -> Self {
        match value {
            JWTCreationError::JWTError { error } => Self::internal_error(error),
        }
    }
}

impl From<ImageStoreError> for EndpointError {
    fn from(value: ImageStoreError) -> Self {
        Self::internal_error(value)
    }
}

impl From<BlockingError> for EndpointError {
    fn from(value: BlockingError) -> Self {
        Self::internal_error(value)
    }
}

/// Client-caused pipeline failures become `400 Bad Request` with an `import` error reason,
/// everything else is an internal error.
impl From<ImportError> for EndpointError {
    fn from(value: ImportError) -> Self {
        match value {
            ImportError::UnreadableDocument { .. } => {
                Self::document_rejected(ImportErrorReason::unreadable_document())
            }
            ImportError::NoReadableContent => {
                Self::document_rejected(ImportErrorReason::no_readable_content())
            }
            ImportError::EmptyDocument => {
                Self::document_rejected(ImportErrorReason::no_records_found())
            }
            ImportError::ValidationFailed { issues } => {
                Self::document_rejected(ImportErrorReason::validation_failed(
                    issues.iter().map(ToString::to_string).collect(),
                ))
            }
            ImportError::ImageStore { error } => Self::from(error),
            ImportError::Persistence { error } => Self::from(error),
        }
    }
}




pub struct EndpointResponseBuilder {
    status_code: StatusCode,

    body: Option<Result<Vec<u8>, serde_json::Error>>,

    additional_headers: Vec<(HeaderName, HeaderValue)>,
}

impl EndpointResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
            additional_headers: Vec::with_capacity(1),
        }
    }

    #[inline]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    #[inline]
    pub fn created() -> Self {
        Self::new(StatusCode::CREATED)
    }

    #[inline]
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    #[inline]
    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN)
    }

    #[inline]
    pub fn conflict() -> Self {
        Self::new(StatusCode::CONFLICT)
    }

    #[inline]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    pub fn with_json_body<S>(mut self, data: S) -> Self
    where
        S: Serialize,
    {
        let body = serde_json::to_vec(&data);

        self.additional_headers.push((
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        ));

        Self {
            status_code: self.status_code,
            body: Some(body),
            additional_headers: self.additional_headers,
        }
    }

    pub fn with_error_reason<R>(self, reason: R) -> Self
    where
        R: Into<ErrorReason>,
    {
        self.with_json_body(reason.into())
    }

    pub fn build(self) -> Result<HttpResponse<BoxBody>, EndpointError> {
        let optional_body = match self.body {
            Some(Ok(body)) => Some(body),
            Some(Err(serialization_error)) => {
                return Err(EndpointError::internal_error(serialization_error))
            }
            None => None,
        };


        let mut response_builder = HttpResponse::build(self.status_code);

        for (header_name, header_value) in self.additional_headers {
            response_builder.insert_header((header_name, header_value));
        }


        match optional_body {
            // `Vec<u8>` and `()` bodies are infallible, see
            // <https://docs.rs/actix-web/4.9.0/actix_web/body/trait.MessageBody.html>.
            Some(body) => response_builder
                .message_body(body.boxed())
                .map_err(EndpointError::internal_error),
            None => response_builder
                .message_body(().boxed())
                .map_err(EndpointError::internal_error),
        }
    }
}




pub type EndpointResult<Body = BoxBody> = Result<HttpResponse<Body>, EndpointError>;
