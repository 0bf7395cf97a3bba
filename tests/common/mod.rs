#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::PathBuf;

use actix_http::Request;
use actix_web::body::{to_bytes, MessageBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{test, web, App};
use chrono::{Duration, Utc};
use palabra::api::{api_router, json_extractor_config};
use palabra::establish_lazy_database_connection_pool;
use palabra::state::{ApplicationState, ApplicationStateInner};
use palabra_auth::{JWTClaims, JWTTokenType};
use palabra_configuration::Configuration;
use palabra_core::id::UserId;
use palabra_import::images::ImageStore;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;


const MULTIPART_BOUNDARY: &str = "palabra-test-boundary";


/// Server state backed by a temporary data directory.
///
/// The database pool is lazy, so only endpoints that actually
/// query the database need a running PostgreSQL server.
pub struct TestEnvironment {
    pub state: ApplicationState,
    data_directory: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let data_directory = tempfile::tempdir().expect("failed to create temporary directory");

        let configuration_string = format!(
            r#"
[base_paths]
base_data_directory_path = "{}"

[logging]
console_output_level_filter = "info"
log_file_output_level_filter = "info"
log_file_output_directory = "{{BASE_DATA_DIRECTORY}}/logs"

[http]
host = "127.0.0.1"
port = 8050

[database]
host = "localhost"
port = 5432
username = "palabra"
database_name = "palabra"

[secrets]
hash_salt = "c2FsdHlzYWx0eXNhbHR5"

[json_web_token]
secret = "integration test secret"

[media]
images_directory_path = "{{BASE_DATA_DIRECTORY}}/images"
maximum_upload_size_bytes = 1048576
maximum_document_text_size_bytes = 262144
"#,
            data_directory.path().display()
        );

        let configuration = Configuration::load_from_str(
            &configuration_string,
            data_directory.path().join("configuration.toml"),
        )
        .expect("failed to load test configuration");

        configuration
            .media
            .create_images_directory_if_missing()
            .expect("failed to create images directory");

        let database_pool = establish_lazy_database_connection_pool(&configuration.database);

        let state = ApplicationStateInner::with_database_pool(configuration, database_pool)
            .expect("failed to initialize application state");

        Self {
            state: web::Data::new(state),
            data_directory,
        }
    }

    pub fn data_directory_path(&self) -> PathBuf {
        self.data_directory.path().to_path_buf()
    }

    pub fn images_directory_path(&self) -> PathBuf {
        self.state.configuration().media.images_directory_path.clone()
    }

    pub fn add_image(&self, image_name: &str) {
        self.state
            .image_store()
            .save_image(image_name, b"not really a png")
            .expect("failed to save test image");
    }

    /// Issues an access token for a user that need not exist.
    pub fn access_token(&self) -> String {
        let claims = JWTClaims::create(
            UserId::generate(),
            Utc::now(),
            Duration::hours(2),
            JWTTokenType::Access,
        );

        self.state
            .jwt_manager()
            .create_token(claims)
            .expect("failed to create access token")
    }

    pub fn refresh_token(&self) -> String {
        let claims = JWTClaims::create(
            UserId::generate(),
            Utc::now(),
            Duration::days(7),
            JWTTokenType::Refresh,
        );

        self.state
            .jwt_manager()
            .create_token(claims)
            .expect("failed to create refresh token")
    }

    pub async fn init_service(
        &self,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(json_extractor_config())
                .app_data(self.state.clone())
                .service(api_router()),
        )
        .await
    }
}


pub struct MultipartFile<'a> {
    pub field_name: &'a str,
    pub file_name: &'a str,
    pub contents: &'a [u8],
}

/// Returns the `Content-Type` header value and the encoded body.
pub fn encode_multipart(files: &[MultipartFile<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for file in files {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                file.field_name, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(file.contents);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        body,
    )
}


/// Builds a minimal `.docx` archive with one paragraph per line.
pub fn build_docx(lines: &[&str]) -> Vec<u8> {
    let paragraphs = lines
        .iter()
        .map(|line| {
            format!(
                "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
                line.replace('&', "&amp;").replace('<', "&lt;")
            )
        })
        .collect::<String>();

    let document_xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
        <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
        <w:body>{}</w:body></w:document>",
        paragraphs
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(document_xml.as_bytes()).unwrap();

    writer.finish().unwrap().into_inner()
}


pub async fn response_json<B>(response: ServiceResponse<B>) -> serde_json::Value
where
    B: MessageBody,
{
    let body = to_bytes(response.into_body())
        .await
        .unwrap_or_else(|_| panic!("failed to read response body"));

    serde_json::from_slice(&body).expect("response body is not JSON")
}
