/**
 * Error Conversion
 *
 * This module renders backend errors as HTTP responses. It is the single
 * boundary where internal failures are logged and replaced by a generic
 * message.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": {
 *     "code": "CSRF_INVALID",
 *     "message": "CSRF token invalid"
 *   }
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;

/// Wire shape of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Code and message of an error response
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl From<&BackendError> for ErrorBody {
    fn from(err: &BackendError) -> Self {
        Self {
            error: ErrorDetail {
                code: err.code(),
                message: err.message(),
            },
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        if let BackendError::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let status = self.status_code();
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
