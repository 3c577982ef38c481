use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handlers::render;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    // message comes from the `{"error": ...}` body
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Api(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Api(ApiError::InvalidUrl(_)) => StatusCode::BAD_REQUEST,
            AppError::Api(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        tracing::warn!(error = %self, status = %status, "request failed");
        (status, render::alert_page(&self.to_string())).into_response()
    }
}
