// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! Requests without an `Authorization` header are anonymous; the operation
//! being called decides whether that is acceptable. A header that is
//! present but malformed, expired or unknown is rejected outright.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use placement_api::{ApiError, AuthError, AuthenticatedActor, AuthenticationService};
use tracing::{debug, warn};

use crate::AppState;
use crate::error::HttpError;

/// The acting account of a request, if any.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     Session { actor, .. }: Session,
/// ) -> Result<Json<Response>, HttpError> {
///     let result = some_operation(&mut persistence, actor.as_ref())?;
///     Ok(Json(result))
/// }
/// ```
pub struct Session {
    /// The authenticated actor, or `None` for an anonymous request.
    pub actor: Option<AuthenticatedActor>,
    /// The bearer token the actor presented.
    pub token: Option<String>,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get("Authorization") else {
            debug!("Anonymous request");
            return Ok(Self {
                actor: None,
                token: None,
            });
        };

        let header: &str = header.to_str().map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

        let token: &str = header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let mut persistence = state.persistence.lock().await;
        let actor: AuthenticatedActor =
            AuthenticationService::validate_session(&mut persistence, token).map_err(|e| match e {
                AuthError::Internal { message } => SessionError::Storage(message),
                other => {
                    warn!(error = %other, "Session validation failed");
                    SessionError::InvalidSession(other.to_string())
                }
            })?;

        debug!(
            account_id = actor.account_id(),
            role = %actor.role.role(),
            "Session validated"
        );

        Ok(Self {
            actor: Some(actor),
            token: Some(token.to_string()),
        })
    }
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
    /// The session could not be read from storage.
    Storage(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::InvalidAuthorizationHeader => String::from(
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidSession(reason) => format!("Session validation failed: {reason}"),
            Self::Storage(message) => {
                return HttpError::from(ApiError::Internal { message }).into_response();
            }
        };

        HttpError {
            status: StatusCode::UNAUTHORIZED,
            message,
            redirect: Some("/login"),
        }
        .into_response()
    }
}
