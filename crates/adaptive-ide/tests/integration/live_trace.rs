use axum::http::StatusCode;
use serde_json::{Value, json};

use super::{app, post_json};

#[tokio::test]
async fn test_trace_matching_code() {
    let (status, body) = post_json(
        app(),
        "/api/trace",
        json!({"language": "python", "code": "return a * (b + c)", "problemId": "two-sum"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "exampleId": "E1",
            "expected": {"value": 20, "steps": [
                {"expr": "b + c", "value": 10},
                {"expr": "a * (b + c)", "value": 20}
            ]},
            "actual": {"value": 20, "steps": [
                {"expr": "b + c", "value": 10},
                {"expr": "a * (b + c)", "value": 20}
            ]},
            "divergedAt": null
        })
    );
}

#[tokio::test]
async fn test_trace_precedence_slip() {
    let (status, body) = post_json(
        app(),
        "/api/trace",
        json!({"language": "javascript", "code": "RESULT = A * B + C"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["actual"]["value"], 16);
    assert_eq!(body["actual"]["steps"][0], json!({"expr": "a * b", "value": 12}));
    assert_eq!(body["divergedAt"], 1);
    assert_eq!(
        body["hint"],
        "Parentheses change precedence; compute (b+c) first."
    );
}

#[tokio::test]
async fn test_trace_tolerates_unknown_language_and_empty_body() {
    let (status, body) = post_json(app(), "/api/trace", json!({"language": "cobol"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["divergedAt"], Value::Null);

    let (status, body) = post_json(app(), "/api/trace", Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exampleId"], "E1");
}
