use serde::{Deserialize, Serialize};



/// Pertains to all endpoints under `/login`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "login-error-type")]
#[non_exhaustive]
pub enum LoginErrorReason {
    #[serde(rename = "invalid-login-credentials")]
    InvalidLoginCredentials,

    #[serde(rename = "expired-refresh-token")]
    ExpiredRefreshToken,

    /// Not in the sense that is has expired or that it is *not* a refresh token,
    /// but in the sense that the given JWT couldn't be parsed or decoded.
    #[serde(rename = "invalid-refresh-json-web-token")]
    InvalidRefreshJsonWebToken,

    /// Expected a refresh token, but got an access JWT instead.
    #[serde(rename = "not-a-refresh-token")]
    NotARefreshToken,
}

impl LoginErrorReason {
    pub const fn invalid_login_credentials() -> Self {
        Self::InvalidLoginCredentials
    }

    pub const fn expired_refresh_token() -> Self {
        Self::ExpiredRefreshToken
    }

    pub const fn invalid_refresh_json_web_token() -> Self {
        Self::InvalidRefreshJsonWebToken
    }

    pub const fn not_a_refresh_token() -> Self {
        Self::NotARefreshToken
    }
}



/// Pertains to all endpoints under `/users`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "users-error-type")]
#[non_exhaustive]
pub enum UsersErrorReason {
    #[serde(rename = "user-not-found")]
    UserNotFound,

    #[serde(rename = "username-already-exists")]
    UsernameAlreadyExists,

    #[serde(rename = "display-name-already-exists")]
    DisplayNameAlreadyExists,
}

impl UsersErrorReason {
    pub const fn user_not_found() -> Self {
        Self::UserNotFound
    }

    pub const fn username_already_exists() -> Self {
        Self::UsernameAlreadyExists
    }

    pub const fn display_name_already_exists() -> Self {
        Self::DisplayNameAlreadyExists
    }
}



/// Pertains to the document endpoints under `/vocabulary`
/// (`/vocabulary/parse` and `/vocabulary/upload`).
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "import-error-type")]
#[non_exhaustive]
pub enum ImportErrorReason {
    /// The multipart body had no `document` file field.
    #[serde(rename = "document-required")]
    DocumentRequired,

    /// Every text extraction method failed on the uploaded document.
    #[serde(rename = "unreadable-document")]
    UnreadableDocument,

    /// Text extraction produced no lines at all
    /// (this includes unsupported file extensions).
    #[serde(rename = "no-readable-content")]
    NoReadableContent,

    /// The document was readable, but contained
    /// no vocabulary entries and no exercises.
    #[serde(rename = "no-records-found")]
    NoRecordsFound,

    /// Commit-mode validation rejected the document; nothing was saved.
    #[serde(rename = "validation-failed")]
    ValidationFailed { errors: Vec<String> },
}

impl ImportErrorReason {
    pub const fn document_required() -> Self {
        Self::DocumentRequired
    }

    pub const fn unreadable_document() -> Self {
        Self::UnreadableDocument
    }

    pub const fn no_readable_content() -> Self {
        Self::NoReadableContent
    }

    pub const fn no_records_found() -> Self {
        Self::NoRecordsFound
    }

    pub fn validation_failed(errors: Vec<String>) -> Self {
        Self::ValidationFailed { errors }
    }
}



/// Pertains to `/vocabulary/images`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "images-error-type")]
#[non_exhaustive]
pub enum ImagesErrorReason {
    #[serde(rename = "no-images-specified")]
    NoImagesSpecified,
}

impl ImagesErrorReason {
    pub const fn no_images_specified() -> Self {
        Self::NoImagesSpecified
    }
}



#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidJsonBodyReason {
    /// Signals an IO / syntax / EOF error while parsing.
    #[serde(rename = "not-json")]
    NotJson,

    #[serde(rename = "invalid-data")]
    InvalidData,

    #[serde(rename = "too-large")]
    TooLarge,
}



#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "type", content = "data")]
#[non_exhaustive]
pub enum ErrorReason {
    /*
     * General
     */
    #[serde(rename = "missing-authentication")]
    MissingAuthentication,

    /// Request is missing a JSON body.
    #[serde(rename = "missing-json-body")]
    MissingJsonBody,

    #[serde(rename = "invalid-json-body")]
    InvalidJsonBody { reason: InvalidJsonBodyReason },

    #[serde(rename = "invalid-multipart-body")]
    InvalidMultipartBody,

    #[serde(rename = "upload-too-large")]
    UploadTooLarge { maximum_size_bytes: usize },

    /*
     * `/login` endpoint-related
     */
    #[serde(rename = "login")]
    Login(LoginErrorReason),

    /*
     * `/users` endpoint-related
     */
    #[serde(rename = "users")]
    Users(UsersErrorReason),

    /*
     * `/vocabulary` endpoint-related
     */
    #[serde(rename = "import")]
    Import(ImportErrorReason),

    #[serde(rename = "images")]
    Images(ImagesErrorReason),
}

impl ErrorReason {
    pub const fn missing_authentication() -> Self {
        Self::MissingAuthentication
    }

    pub const fn missing_json_body() -> Self {
        Self::MissingJsonBody
    }

    pub const fn invalid_json_body(reason: InvalidJsonBodyReason) -> Self {
        Self::InvalidJsonBody { reason }
    }

    pub const fn invalid_multipart_body() -> Self {
        Self::InvalidMultipartBody
    }

    pub const fn upload_too_large(maximum_size_bytes: usize) -> Self {
        Self::UploadTooLarge { maximum_size_bytes }
    }
}

impl From<LoginErrorReason> for ErrorReason {
    fn from(value: LoginErrorReason) -> Self {
        Self::Login(value)
    }
}

impl From<UsersErrorReason> for ErrorReason {
    fn from(value: UsersErrorReason) -> Self {
        Self::Users(value)
    }
}

impl From<ImportErrorReason> for ErrorReason {
    fn from(value: ImportErrorReason) -> Self {
        Self::Import(value)
    }
}

impl From<ImagesErrorReason> for ErrorReason {
    fn from(value: ImagesErrorReason) -> Self {
        Self::Images(value)
    }
}
