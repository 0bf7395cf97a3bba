use std::borrow::Cow;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use palabra_core::id::UserId;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::TimestampSeconds;
use thiserror::Error;


/// JSON Web Token issuer.
const JWT_ISSUER: &str = "Palabra";

/// JSON Web Token subject.
const JWT_SUBJECT: &str = "API token";



/// A token can be either expired or simply invalid.
#[derive(Error, Debug)]
pub enum JWTValidationError {
    #[error("token has expired")]
    Expired { expired_token: Box<JWTClaims> },

    #[error("token is invalid: {}", .reason)]
    InvalidToken { reason: Cow<'static, str> },
}


/// Access tokens authenticate API requests,
/// refresh tokens can only be exchanged for a new access token.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum JWTTokenType {
    #[serde(rename = "access")]
    Access,

    #[serde(rename = "refresh")]
    Refresh,
}


/// JSON Web Token claims.
///
/// More information:
/// - <https://jwt.io/introduction>
/// - <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1>
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JWTClaims {
    /// Issuer, always [`JWT_ISSUER`].
    pub iss: String,

    /// Subject, always [`JWT_SUBJECT`].
    pub sub: String,

    /// Issued at.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub iat: DateTime<Utc>,

    /// Expiration time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub exp: DateTime<Utc>,

    /// ID of the user the token was issued to.
    pub user_id: UserId,

    pub token_type: JWTTokenType,
}

impl JWTClaims {
    /// Note that the `issued_at` timestamp will have its sub-second content truncated
    /// (see [`trunc_subsecs`][chrono::round::SubsecRound::trunc_subsecs]),
    /// since the encoded token only has second precision.
    pub fn create(
        user_id: UserId,
        issued_at: DateTime<Utc>,
        valid_for: Duration,
        token_type: JWTTokenType,
    ) -> Self {
        let issued_at = issued_at.trunc_subsecs(0);

        Self {
            iss: JWT_ISSUER.to_string(),
            sub: JWT_SUBJECT.to_string(),
            iat: issued_at,
            exp: issued_at + valid_for,
            user_id,
            token_type,
        }
    }
}



#[derive(Debug, Error)]
pub enum JWTCreationError {
    #[error("failed to encode JSON Web Token")]
    JWTError {
        #[from]
        #[source]
        error: jsonwebtoken::errors::Error,
    },
}


/// Encodes and decodes HS256-signed tokens with a shared secret.
pub struct JsonWebTokenManager {
    header: Header,

    encoding_key: EncodingKey,

    decoding_key: DecodingKey,

    /// Validates the issuer and subject.
    validation: Validation,
}

impl JsonWebTokenManager {
    pub fn new(json_web_token_secret: &str) -> Self {
        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(json_web_token_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(json_web_token_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.sub = Some(JWT_SUBJECT.to_string());

        // Expiry is checked in `decode_token` using chrono timestamps.
        validation.validate_exp = false;
        validation.validate_nbf = false;

        Self {
            header,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn create_token(&self, claims: JWTClaims) -> Result<String, JWTCreationError> {
        jsonwebtoken::encode(&self.header, &claims, &self.encoding_key)
            .map_err(|error| JWTCreationError::JWTError { error })
    }

    pub fn decode_token(&self, token: &str) -> Result<JWTClaims, JWTValidationError> {
        let token_data =
            jsonwebtoken::decode::<JWTClaims>(token, &self.decoding_key, &self.validation)
                .map_err(|error| JWTValidationError::InvalidToken {
                    reason: match error.kind() {
                        ErrorKind::InvalidIssuer => {
                            Cow::from("failed to parse JWT token: invalid issuer")
                        }
                        ErrorKind::InvalidSubject => {
                            Cow::from("failed to parse JWT token: invalid subject")
                        }
                        ErrorKind::InvalidSignature => {
                            Cow::from("failed to parse JWT token: invalid signature")
                        }
                        _ => Cow::from(format!("failed to parse JWT token: {}", error)),
                    },
                })?;

        let current_time = Utc::now();

        if token_data.claims.iat > current_time {
            return Err(JWTValidationError::InvalidToken {
                reason: Cow::from("invalid JWT token: issued-at field is in the future"),
            });
        }

        if token_data.claims.exp <= current_time {
            return Err(JWTValidationError::Expired {
                expired_token: Box::new(token_data.claims),
            });
        }

        Ok(token_data.claims)
    }
}
