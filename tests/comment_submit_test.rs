//! Integration tests for comment submission.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use wiremock::matchers::{body_json, header as header_matcher, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blogview::api::HttpPostsApi;
use blogview::config::Config;
use blogview::web::{create_app, AppState};

/// Build the app against a mock remote API.
fn test_app(mock_server: &MockServer) -> Router {
    let config = Config {
        api_base_url: format!("{}/posts", mock_server.uri()),
        ..Config::for_testing()
    };
    let api = HttpPostsApi::new(&config).expect("Failed to build API client");
    create_app(AppState {
        api: Arc::new(api),
        config: Arc::new(config),
    })
}

/// Mount the reads the submission handler performs before creating.
async fn mount_post_with_one_comment(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "userId": 1, "id": 1, "title": "Detail Title", "body": "Detail body"
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts/1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"postId": 1, "id": 1, "email": "existing@example.com", "body": "existing comment"}
        ])))
        .mount(mock_server)
        .await;
}

async fn submit(app: Router, uri: &str, form_body: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body.to_string()))
                .unwrap(),
        )
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_submit_posts_json_and_appends_echoed_comment() {
    let mock_server = MockServer::start().await;
    mount_post_with_one_comment(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/posts/1/comments"))
        .and(header_matcher("content-type", "application/json"))
        .and(body_json(
            serde_json::json!({"email": "a@example.com", "body": "hello"}),
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 501, "email": "a@example.com", "body": "hello"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, html) = submit(
        test_app(&mock_server),
        "/post/1/comments",
        "email=a%40example.com&comment=hello",
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    // Exactly one new block, appended after the existing comments.
    assert_eq!(html.matches("class=\"comment\"").count(), 2);
    let existing = html.find("existing comment").unwrap();
    let echoed = html.find("a@example.com").unwrap();
    assert!(existing < echoed);
    assert!(html.contains("hello"));

    // Form fields are cleared after a successful submission.
    assert!(html.contains("value=\"\""));
    assert!(html.contains("name=\"comment\" required></textarea>"));
}

#[tokio::test]
async fn test_submit_renders_the_echo_not_the_draft() {
    let mock_server = MockServer::start().await;
    mount_post_with_one_comment(&mock_server).await;

    // A server that rewrites the body; the page must show the echo.
    Mock::given(method("POST"))
        .and(path("/posts/1/comments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 501, "email": "rewritten@example.com", "body": "rewritten body"
        })))
        .mount(&mock_server)
        .await;

    let (status, html) = submit(
        test_app(&mock_server),
        "/post/1/comments",
        "email=a%40example.com&comment=hello",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("rewritten@example.com"));
    assert!(html.contains("rewritten body"));

    // Fields are cleared regardless of the echoed content.
    assert!(html.contains("value=\"\""));
}

#[tokio::test]
async fn test_failed_submit_keeps_form_fields_populated() {
    let mock_server = MockServer::start().await;
    mount_post_with_one_comment(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/posts/1/comments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (status, html) = submit(
        test_app(&mock_server),
        "/post/1/comments",
        "email=a%40example.com&comment=hello",
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    // No new block; the draft stays in the form.
    assert_eq!(html.matches("class=\"comment\"").count(), 1);
    assert!(html.contains("value=\"a@example.com\""));
    assert!(html.contains(">hello</textarea>"));
}

#[tokio::test]
async fn test_resubmission_sends_a_new_create_each_time() {
    let mock_server = MockServer::start().await;
    mount_post_with_one_comment(&mock_server).await;

    // No idempotence: two submissions mean two creates.
    Mock::given(method("POST"))
        .and(path("/posts/1/comments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 501, "email": "a@example.com", "body": "hello"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server);
    for _ in 0..2 {
        let (status, _) = submit(
            app.clone(),
            "/post/1/comments",
            "email=a%40example.com&comment=hello",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_submit_fails_when_detail_reads_fail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/1/comments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (status, body) = submit(
        test_app(&mock_server),
        "/post/1/comments",
        "email=a%40example.com&comment=hello",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Upstream API error"));
}
