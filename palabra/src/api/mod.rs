//! API definitions for Palabra.

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, Scope};
use palabra_core::api_models::InvalidJsonBodyReason;

use self::errors::EndpointError;
use self::v1::v1_api_router;

pub mod errors;
pub mod macros;
pub mod traits;
pub mod v1;


fn map_json_payload_error(error: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    let endpoint_error = match &error {
        JsonPayloadError::ContentType => EndpointError::missing_json_body(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            EndpointError::invalid_json_body(InvalidJsonBodyReason::TooLarge)
        }
        JsonPayloadError::Deserialize(deserialization_error)
            if deserialization_error.is_data() =>
        {
            EndpointError::invalid_json_body(InvalidJsonBodyReason::InvalidData)
        }
        _ => EndpointError::invalid_json_body(InvalidJsonBodyReason::NotJson),
    };

    endpoint_error.into()
}

/// JSON extractor configuration that reports
/// malformed bodies with a typed error reason.
pub fn json_extractor_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(map_json_payload_error)
}



/// Router for the entire public API.
///
/// Lives under the `/api` path and is made up of `/v1` and its sub-routes.
#[rustfmt::skip]
pub fn api_router() -> Scope {
    web::scope("/api")
        .service(v1_api_router())
}
