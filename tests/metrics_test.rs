mod common;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use tower::ServiceExt;

#[tokio::test]
async fn test_create_metrics_from_form() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/metrics")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("shoulder=120&waist=82.5&chest=104"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(common::body_string(response).await.is_empty());
}

#[tokio::test]
async fn test_create_metrics_from_json() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/metrics")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"waist":82.5}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_metrics_rejects_negative_measurement() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/metrics")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"waist":-1.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_metrics_oldest_first_with_zero_defaults() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    for body in ["waist=84", "waist=83&chest=104", "waist=82.5"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/metrics")
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let metrics = common::body_json(response).await;
    let metrics = metrics.as_array().unwrap();
    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics[0]["waist"], 84.0);
    assert_eq!(metrics[2]["waist"], 82.5);
    // Unmeasured fields come back as zero, not null.
    assert_eq!(metrics[0]["shoulder"], 0.0);
    assert_eq!(metrics[1]["chest"], 104.0);
}
