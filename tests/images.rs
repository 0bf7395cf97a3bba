use std::fs;

use actix_http::StatusCode;
use actix_web::http::header;
use actix_web::test;

mod common;
use common::{encode_multipart, response_json, MultipartFile, TestEnvironment};


fn authorization(access_token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", access_token))
}



#[actix_web::test]
async fn images_can_be_added_listed_and_deleted() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;
    let access_token = environment.access_token();


    let (content_type, body) = encode_multipart(&[
        MultipartFile {
            field_name: "images",
            file_name: "dog.png",
            contents: b"dog",
        },
        MultipartFile {
            field_name: "images",
            file_name: "cat.png",
            contents: b"cat",
        },
    ]);

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/vocabulary/images")
            .insert_header(authorization(&access_token))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "images": ["dog.png", "cat.png"] })
    );
    assert_eq!(
        fs::read(environment.images_directory_path().join("cat.png")).unwrap(),
        b"cat"
    );


    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/vocabulary/images")
            .insert_header(authorization(&access_token))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "images": ["cat.png", "dog.png"] })
    );


    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/vocabulary/images")
            .insert_header(authorization(&access_token))
            .set_json(serde_json::json!({ "images": ["cat.png", "missing.png"] }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "images": ["cat.png"] })
    );


    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/vocabulary/images?name=dog.png")
            .insert_header(authorization(&access_token))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "images": ["dog.png"] })
    );

    assert!(fs::read_dir(environment.images_directory_path())
        .unwrap()
        .next()
        .is_none());
}

#[actix_web::test]
async fn uploading_replaces_existing_image() {
    let environment = TestEnvironment::new();
    environment.add_image("cat.png");

    let app = environment.init_service().await;

    let (content_type, body) = encode_multipart(&[MultipartFile {
        field_name: "images",
        file_name: "cat.png",
        contents: b"a better cat",
    }]);

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/vocabulary/images")
            .insert_header(authorization(&environment.access_token()))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        fs::read(environment.images_directory_path().join("cat.png")).unwrap(),
        b"a better cat"
    );
}

#[actix_web::test]
async fn deletion_cannot_escape_image_directory() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;

    let secret_file_path = environment.data_directory_path().join("secret.txt");
    fs::write(&secret_file_path, b"do not delete").unwrap();

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/vocabulary/images?name=..%2Fsecret.txt")
            .insert_header(authorization(&environment.access_token()))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "images": [] })
    );
    assert!(secret_file_path.exists());
}

#[actix_web::test]
async fn unsafe_upload_names_are_skipped() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;

    let (content_type, body) = encode_multipart(&[
        MultipartFile {
            field_name: "images",
            file_name: "../escaped.png",
            contents: b"nope",
        },
        MultipartFile {
            field_name: "images",
            file_name: "fine.png",
            contents: b"yes",
        },
    ]);

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/vocabulary/images")
            .insert_header(authorization(&environment.access_token()))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "images": ["fine.png"] })
    );
    assert!(!environment
        .data_directory_path()
        .join("escaped.png")
        .exists());
}

#[actix_web::test]
async fn requests_without_image_names_are_rejected() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;
    let access_token = environment.access_token();

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/vocabulary/images")
            .insert_header(authorization(&access_token))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({
            "type": "images",
            "data": { "images-error-type": "no-images-specified" }
        })
    );


    let (content_type, body) = encode_multipart(&[MultipartFile {
        field_name: "document",
        file_name: "cat.png",
        contents: b"cat",
    }]);

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/vocabulary/images")
            .insert_header(authorization(&access_token))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
