use actix_http::StatusCode;
use actix_web::test;

mod common;
use common::{response_json, TestEnvironment};


#[actix_web::test]
async fn ping_responds_ok() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/health/ping")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "ok": true })
    );
}

#[actix_web::test]
async fn trailing_slash_is_normalized() {
    let environment = TestEnvironment::new();
    let app = environment.init_service().await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/health/ping/")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}
