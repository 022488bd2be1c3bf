//! Mapping of store errors to HTTP responses.

use crate::quiz_store::{QuizStoreError, ValidationError};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error returned by the resource handlers.
///
/// NotFound maps to 404, validation failures to 400, anything else to 500.
#[derive(Debug)]
pub struct ApiError(QuizStoreError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            QuizStoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            QuizStoreError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QuizStoreError> for ApiError {
    fn from(err: QuizStoreError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(QuizStoreError::Validation(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody {
            reason: rejection.body_text(),
        }
        .into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::MalformedBody {
            reason: rejection.body_text(),
        }
        .into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            debug!("Request rejected with {}: {}", status, self.0);
        }
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
