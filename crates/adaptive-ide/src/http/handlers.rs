use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Html;
use serde::Serialize;

use crate::catalog::{Problem, ProblemSummary};
use crate::config::LanguageInfo;
use crate::http::ApiError;
use crate::http::body::lenient;
use crate::runner::Runner;
use crate::types::{
    GradeRequest, GradeResult, RunRequest, RunResult, TracePacket, TraceRequest,
};

/// The practice page, a single self-contained HTML document
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub default_language: String,
    pub languages: Vec<LanguageInfo>,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn languages(State(runner): State<Arc<Runner>>) -> Json<LanguagesResponse> {
    let config = runner.config();
    Json(LanguagesResponse {
        default_language: config.default_language.clone(),
        languages: config.language_infos(),
    })
}

pub async fn problems(State(runner): State<Arc<Runner>>) -> Json<Vec<ProblemSummary>> {
    let summaries = runner
        .catalog()
        .list()
        .into_iter()
        .map(ProblemSummary::from)
        .collect();
    Json(summaries)
}

pub async fn problem(
    Path(id): Path<String>,
    State(runner): State<Arc<Runner>>,
) -> Result<Json<Problem>, ApiError> {
    let problem = runner.problem(&id)?;
    Ok(Json(problem.clone()))
}

pub async fn run(
    State(runner): State<Arc<Runner>>,
    body: Bytes,
) -> Result<Json<RunResult>, ApiError> {
    let request: RunRequest = lenient(&body);
    Ok(Json(runner.run(&request)?))
}

pub async fn grade(
    State(runner): State<Arc<Runner>>,
    body: Bytes,
) -> Result<Json<GradeResult>, ApiError> {
    let request: GradeRequest = lenient(&body);
    Ok(Json(runner.grade(&request)?))
}

pub async fn trace(State(runner): State<Arc<Runner>>, body: Bytes) -> Json<TracePacket> {
    let request: TraceRequest = lenient(&body);
    Json(runner.trace(&request))
}
