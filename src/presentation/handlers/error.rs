use std::time::Duration;

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub detail: String,
}

/// HTTP face of every upload failure: a status, a stable error kind and a
/// human readable detail.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub detail: String,
    pub retry_after: Option<Duration>,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "invalid_input",
            detail: detail.into(),
            retry_after: None,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        let detail = error.to_string();
        match error {
            PipelineError::InvalidFileType { .. } => Self::bad_request(detail),
            PipelineError::RateLimited { retry_after, .. } => Self {
                status: StatusCode::TOO_MANY_REQUESTS,
                kind: "rate_limited",
                detail,
                retry_after: Some(retry_after),
            },
            PipelineError::Processing(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "processing_failed",
                detail,
                retry_after: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            Json(ErrorResponse {
                error: self.kind,
                detail: self.detail,
            }),
        )
            .into_response();

        if let Some(retry_after) = self.retry_after {
            let secs = retry_after.as_secs().max(1);
            if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}
