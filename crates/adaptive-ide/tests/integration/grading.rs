use adaptive_ide::{GradeRequest, Runner};
use axum::http::StatusCode;
use serde_json::json;

use super::{app, app_with, load_fixture, post_json};

#[tokio::test]
async fn test_grade_two_sum() {
    let (status, body) = post_json(
        app(),
        "/api/grade",
        json!({"language": "python", "code": "def two_sum(nums, target): ...", "problemId": "two-sum"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 20);
    assert_eq!(body["passed"], 12);
    assert_eq!(
        body["approachHint"],
        "Try checking complement before storing the current element."
    );

    let outcomes = body["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 20);
    assert_eq!(
        outcomes[0],
        json!({"testId": "T01", "passed": true, "time_ms": 3})
    );
    assert_eq!(
        outcomes[12],
        json!({
            "testId": "T13",
            "passed": false,
            "time_ms": 15,
            "diff": {"expected": "[0,1]", "got": "[]"}
        })
    );
}

#[tokio::test]
async fn test_grade_without_problem_uses_default() {
    let (status, body) = post_json(app(), "/api/grade", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 20);
}

#[tokio::test]
async fn test_grade_unknown_problem() {
    let (status, body) = post_json(app(), "/api/grade", json!({"problemId": "nope"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "problem_not_found");
}

#[tokio::test]
async fn test_grade_configured_problem() {
    let app = app_with(load_fixture("valid_full.toml"));
    let (status, body) = post_json(
        app,
        "/api/grade",
        json!({"language": "cpp", "problemId": "reverse-string"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["passed"], 2);
    assert_eq!(body["outcomes"][0]["time_ms"], 10);
    assert_eq!(body["outcomes"][2]["diff"]["expected"], "ba");
    assert_eq!(body["approachHint"], "Two pointers meeting in the middle.");
}

#[test]
fn test_grade_limits_from_config() {
    let runner = Runner::new(load_fixture("valid_full.toml"));

    let cpp = runner
        .grade_limits(&GradeRequest {
            language: Some("cpp".to_owned()),
            problem_id: Some("reverse-string".to_owned()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(cpp.time_limit_ms, Some(1000));
    assert_eq!(cpp.memory_mb, Some(64));

    let python = runner
        .grade_limits(&GradeRequest {
            problem_id: Some("reverse-string".to_owned()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(python.time_limit_ms, Some(1200));
}
