// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mapping of API errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use placement_api::ApiError;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Message sent in place of the details of an internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error indicator.
    pub error: bool,
    /// Error message.
    pub message: String,
    /// Where a browser client should go next, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error message.
    pub message: String,
    /// Redirect hint for the client.
    pub redirect: Option<&'static str>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            redirect: self.redirect.map(ToString::to_string),
        });
        (self.status, body).into_response()
    }
}

/// Redirect hint for a rejected request, by rule.
fn rejection_redirect(rule: &str) -> Option<&'static str> {
    match rule {
        "student_profile_required" => Some("/student/profile"),
        "company_profile_required" => Some("/company/profile"),
        _ => None,
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let (status, redirect): (StatusCode, Option<&'static str>) = match &err {
            ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, None),
            ApiError::AuthenticationRequired { .. } | ApiError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, Some("/login"))
            }
            ApiError::Forbidden { .. } => (StatusCode::FORBIDDEN, Some("/")),
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, None),
            ApiError::Conflict { .. } => (StatusCode::CONFLICT, None),
            ApiError::Rejected { rule, .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, rejection_redirect(rule))
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };
        let message: String = if status == StatusCode::INTERNAL_SERVER_ERROR {
            String::from(INTERNAL_ERROR_MESSAGE)
        } else {
            err.to_string()
        };
        Self {
            status,
            message,
            redirect,
        }
    }
}
