use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SearchError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Engine request failed: {0}")]
    Transport(String),

    #[error("Engine returned {status}: {body}")]
    Engine { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl From<std::io::Error> for SearchError {
    fn from(e: std::io::Error) -> Self {
        SearchError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SearchError::Json(e.to_string())
        } else {
            SearchError::Transport(e.to_string())
        }
    }
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::NotFound(_) => StatusCode::NOT_FOUND,
            SearchError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            SearchError::Transport(_) => StatusCode::BAD_GATEWAY,
            SearchError::Engine { .. } => StatusCode::BAD_GATEWAY,
            SearchError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SearchError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SearchError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::NotFound(_) => "not_found",
            SearchError::InvalidQuery(_) => "invalid_query",
            SearchError::Transport(_) => "engine_unreachable",
            SearchError::Engine { .. } => "engine_error",
            SearchError::Json(_) => "json_error",
            SearchError::Io(_) => "io_error",
            SearchError::Config(_) => "config_error",
        }
    }
}

// Axum IntoResponse implementation (feature-gated)
#[cfg(feature = "axum-support")]
use axum::response::{IntoResponse, Json, Response};
#[cfg(feature = "axum-support")]
use serde::Serialize;

#[cfg(feature = "axum-support")]
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub request_id: String,
}

#[cfg(feature = "axum-support")]
impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let error_response = ErrorResponse {
            error: self.error_code().to_string(),
            message: self.to_string(),
            request_id: format!("req_cs_{}", uuid::Uuid::new_v4()),
        };
        (status, Json(error_response)).into_response()
    }
}
