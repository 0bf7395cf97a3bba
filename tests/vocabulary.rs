use actix_http::StatusCode;
use actix_web::http::header;
use actix_web::test;

mod common;
use common::{build_docx, encode_multipart, response_json, MultipartFile, TestEnvironment};


const LESSON: &[&str] = &[
    "VOCABULARY",
    "WORD: cat",
    "IMAGE NAME: cat.png",
    "WORD: dog",
    "IMAGE NAME: dog.png",
    "",
    "EXERCISES",
    "TYPE: IMAGE_TO_WORD",
    "QUESTION: cat.png",
    "OPTIONS: cat, dog",
    "ANSWER: cat",
    "TYPE: WORD_TO_IMAGE",
    "QUESTION: dog",
    "OPTIONS: cat.png, dog.png",
    "ANSWER: dog.png",
];


fn document_request(
    uri: &str,
    access_token: Option<&str>,
    field_name: &str,
    file_name: &str,
    contents: &[u8],
) -> test::TestRequest {
    let (content_type, body) = encode_multipart(&[MultipartFile {
        field_name,
        file_name,
        contents,
    }]);

    let mut request = test::TestRequest::post()
        .uri(uri)
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body);

    if let Some(access_token) = access_token {
        request = request.insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", access_token),
        ));
    }

    request
}



#[actix_web::test]
async fn vocabulary_endpoints_require_authentication() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;

    for uri in [
        "/api/v1/vocabulary",
        "/api/v1/vocabulary/stats",
        "/api/v1/vocabulary/images",
    ] {
        let response =
            test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "type": "missing-authentication" })
        );
    }

    let document = build_docx(LESSON);
    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/parse",
            None,
            "document",
            "animals.docx",
            &document,
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn refresh_token_is_not_accepted_for_access() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/vocabulary/images")
            .insert_header((
                header::AUTHORIZATION,
                format!("Bearer {}", environment.refresh_token()),
            ))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn parse_previews_valid_document() {
    let environment = TestEnvironment::new();
    environment.add_image("cat.png");
    environment.add_image("dog.png");

    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let document = build_docx(LESSON);
    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/parse",
            Some(&access_token),
            "document",
            "animals.docx",
            &document,
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;

    assert_eq!(
        body["vocabulary"],
        serde_json::json!([
            { "word": "cat", "imageName": "cat.png" },
            { "word": "dog", "imageName": "dog.png" },
        ])
    );
    assert_eq!(
        body["exercises"][0],
        serde_json::json!({
            "type": "IMAGE_TO_WORD",
            "question": "cat.png",
            "options": ["cat", "dog"],
            "answer": "cat",
        })
    );
    assert_eq!(body["exercises"][1]["type"], "WORD_TO_IMAGE");
    assert_eq!(body["errors"], serde_json::json!([]));
}

#[actix_web::test]
async fn parse_reports_missing_images_without_rejecting() {
    let environment = TestEnvironment::new();
    environment.add_image("cat.png");

    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let document = build_docx(LESSON);
    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/parse",
            Some(&access_token),
            "document",
            "animals.docx",
            &document,
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let errors = body["errors"].as_array().unwrap();

    assert!(errors.contains(&serde_json::json!("Missing image file: dog.png")));
    assert_eq!(body["vocabulary"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn parse_requires_document_field() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let document = build_docx(LESSON);
    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/parse",
            Some(&access_token),
            "attachment",
            "animals.docx",
            &document,
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "import");
    assert_eq!(body["data"]["import-error-type"], "document-required");
}

#[actix_web::test]
async fn parse_rejects_unsupported_file_type() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/parse",
            Some(&access_token),
            "document",
            "animals.txt",
            LESSON.join("\n").as_bytes(),
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["data"]["import-error-type"], "no-readable-content");
}

#[actix_web::test]
async fn parse_rejects_document_without_sections() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let document = build_docx(&["Dear students,", "see you next week."]);
    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/parse",
            Some(&access_token),
            "document",
            "letter.docx",
            &document,
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["data"]["import-error-type"], "no-records-found");
}

#[actix_web::test]
async fn upload_rejects_document_with_any_issue() {
    let environment = TestEnvironment::new();
    environment.add_image("cat.png");
    environment.add_image("dog.png");

    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let mut lines = LESSON.to_vec();
    lines[11] = "TYPE: MATCHING";

    let document = build_docx(&lines);
    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/upload",
            Some(&access_token),
            "document",
            "animals.docx",
            &document,
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body,
        serde_json::json!({
            "type": "import",
            "data": {
                "import-error-type": "validation-failed",
                "errors": ["Wrong exercise type: MATCHING"],
            }
        })
    );
}

#[actix_web::test]
async fn oversized_upload_is_rejected() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let oversized_document = vec![0u8; 2 * 1024 * 1024];
    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/parse",
            Some(&access_token),
            "document",
            "huge.docx",
            &oversized_document,
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body = response_json(response).await;
    assert_eq!(body["type"], "upload-too-large");
}

#[actix_web::test]
async fn document_inflating_past_text_limit_is_unreadable() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let mut lines = LESSON.to_vec();
    lines.extend(std::iter::repeat("").take(10_000));

    let document = build_docx(&lines);
    assert!(document.len() < 64 * 1024);

    let response = test::call_service(
        &app,
        document_request(
            "/api/v1/vocabulary/upload",
            Some(&access_token),
            "document",
            "animals.docx",
            &document,
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["data"]["import-error-type"], "unreadable-document");
}
