use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use super::{app, app_with, get, load_fixture, post_json, send};

#[tokio::test]
async fn test_index_serves_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let page = body.as_str().expect("page should not be JSON");
    assert!(page.contains("Live Example Mapper"));
}

#[tokio::test]
async fn test_languages_listing() {
    let (status, body) = get(app(), "/api/languages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["defaultLanguage"], "python");
    let ids: Vec<_> = body["languages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["c", "cpp", "go", "java", "javascript", "python", "typescript"]
    );
    assert_eq!(body["languages"][1]["name"], "C++");
}

#[tokio::test]
async fn test_problem_listing_includes_configured() {
    let (status, body) = get(app_with(load_fixture("valid_full.toml")), "/api/problems").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": "reverse-string", "title": "Reverse String", "tests": 3},
            {"id": "two-sum", "title": "Two Sum", "tests": 20},
        ])
    );
}

#[tokio::test]
async fn test_problem_detail() {
    let (status, body) = get(app(), "/api/problems/two-sum").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "two-sum");
    assert_eq!(body["memoryMB"], 256);
    assert_eq!(body["timeLimits"]["java"], 3000);
    assert!(
        body["functionSignature"]["python"]
            .as_str()
            .unwrap()
            .starts_with("def two_sum")
    );
    assert_eq!(body["tests"][14]["timeout_ms"], 2500);
    assert_eq!(body["tests"][0]["difficulty"], "low");
}

#[tokio::test]
async fn test_problem_not_found() {
    let (status, body) = get(app(), "/api/problems/three-sum").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "problem_not_found");
}

#[tokio::test]
async fn test_run_echoes_stdin() {
    let (status, body) = post_json(
        app(),
        "/api/run",
        json!({"language": "python", "code": "print(input())", "stdin": "hello"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"ok": true, "stdout": "hello", "stderr": "", "time_ms": 5})
    );
}

#[tokio::test]
async fn test_run_without_stdin() {
    let (status, body) = post_json(app(), "/api/run", json!({"language": "go", "code": ""})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stdout"], "ok");
}

#[tokio::test]
async fn test_run_malformed_body_is_empty_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/run")
        .header("content-type", "application/json")
        .body(Body::from("{\"stdin\": "))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stdout"], "ok");
}

#[tokio::test]
async fn test_run_unknown_language() {
    let (status, body) = post_json(app(), "/api/run", json!({"language": "cobol"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_language");
    assert!(body["message"].as_str().unwrap().contains("cobol"));
}

#[tokio::test]
async fn test_run_uses_configured_time() {
    let app = app_with(load_fixture("valid_full.toml"));
    let (_, body) = post_json(app, "/api/run", json!({})).await;

    assert_eq!(body["time_ms"], 7);
}

#[tokio::test]
async fn test_run_echoes_numeric_stdin() {
    let (status, body) = post_json(app(), "/api/run", json!({"stdin": 42})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stdout"], "42");
}

#[tokio::test]
async fn test_run_partial_test_case_keeps_stdin() {
    let (status, body) = post_json(
        app(),
        "/api/run",
        json!({"language": "python", "stdin": "hello", "test": {"id": "T01"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stdout"], "hello");
}

#[tokio::test]
async fn test_run_unknown_language_with_bad_stdin() {
    let (status, body) = post_json(
        app(),
        "/api/run",
        json!({"language": "cobol", "stdin": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_language");
}
