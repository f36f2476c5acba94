//! Error types for the HTTP layer.

use std::net::SocketAddr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::runner::RunnerError;

/// Errors returned to API clients as `{ "error": ..., "message": ... }`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("problem '{0}' not found")]
    ProblemNotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
            ApiError::ProblemNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::UnknownLanguage(_) => "unknown_language",
            ApiError::ProblemNotFound(_) => "problem_not_found",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<RunnerError> for ApiError {
    fn from(err: RunnerError) -> Self {
        match err {
            RunnerError::UnknownLanguage(id) => ApiError::UnknownLanguage(id),
            RunnerError::Catalog(CatalogError::ProblemNotFound(id)) => {
                ApiError::ProblemNotFound(id)
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error_type(),
            "message": self.to_string(),
        }));
        (self.status_code(), body).into_response()
    }
}

/// Errors that stop the server itself
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
