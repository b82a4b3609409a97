// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use placement_domain::DomainError;
use placement_persistence::PersistenceError;

use crate::password_policy::PasswordPolicyError;

/// The message returned for every failed login.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No actor is logged in.
    AuthenticationRequired {
        /// The action that was attempted.
        action: String,
    },
    /// Credentials or a session were rejected.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor is logged in but lacks the role or ownership required.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// What the action requires.
        required: String,
    },
    /// Storage or clock handling failed while authenticating.
    Internal {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationRequired { action } => {
                write!(f, "Please log in to access this page ('{action}')")
            }
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Forbidden { action, required } => {
                write!(f, "Forbidden: '{action}' requires {required}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// Every operation reports failures through this type; none are fatal to
/// the process and none leave partial state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed, missing or out-of-range input.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The operation needs a logged-in actor.
    AuthenticationRequired {
        /// A human-readable description.
        message: String,
    },
    /// Login or session validation failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor has the wrong role or does not own the resource.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// What the action requires.
        required: String,
    },
    /// A referenced resource does not exist.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The write would duplicate an existing resource.
    Conflict {
        /// The type of resource that already exists.
        resource_type: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A business rule turned the request into a no-op.
    Rejected {
        /// The rule that rejected the request.
        rule: String,
        /// A human-readable description.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::AuthenticationRequired { message } => write!(f, "{message}"),
            Self::AuthenticationFailed { reason } => write!(f, "{reason}"),
            Self::Forbidden { action, required } => {
                write!(f, "Forbidden: '{action}' requires {required}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message, .. } | Self::Rejected { message, .. } => {
                write!(f, "{message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationRequired { .. } => Self::AuthenticationRequired {
                message: String::from("Please log in to access this page."),
            },
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Forbidden { action, required } => Self::Forbidden { action, required },
            AuthError::Internal { message } => Self::Internal { message },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::InvalidInput {
            field: String::from("password"),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// Every domain error is a validation failure on one input field.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: err.field().to_string(),
        message: err.to_string(),
    }
}

/// Translates a persistence error into an API error.
///
/// `resource_type` names what the failing operation was reading or writing.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError, resource_type: &str) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message,
        },
        PersistenceError::UniqueViolation(message) => ApiError::Conflict {
            resource_type: resource_type.to_string(),
            message,
        },
        other => ApiError::Internal {
            message: format!("{resource_type} storage failed: {other}"),
        },
    }
}

/// Builds the not-found error for a missing resource ID.
#[must_use]
pub fn not_found(resource_type: &str, id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: format!("{resource_type} {id} does not exist"),
    }
}
