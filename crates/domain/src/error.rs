// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or blank.
    MissingField {
        /// The name of the field.
        field: &'static str,
    },
    /// A text field exceeded its maximum length.
    FieldTooLong {
        /// The name of the field.
        field: &'static str,
        /// The maximum permitted length in characters.
        max: usize,
        /// The actual length in characters.
        actual: usize,
    },
    /// The role string is not one of the known roles.
    InvalidRole(String),
    /// The role may not be chosen at self-registration.
    RoleNotRegistrable(String),
    /// The application status string is not one of the five statuses.
    InvalidApplicationStatus(String),
    /// A deadline could not be parsed as a calendar date.
    InvalidDeadline {
        /// The raw deadline value.
        value: String,
        /// The parser error.
        error: String,
    },
    /// A deadline lies strictly before today.
    DeadlineInPast {
        /// The rejected deadline.
        deadline: time::Date,
        /// The date it was compared against.
        today: time::Date,
    },
    /// CGPA is outside the inclusive range 0 to 10.
    InvalidCgpa(String),
    /// Phone number is not exactly ten digits.
    InvalidPhone(String),
}

impl DomainError {
    /// Returns the name of the field this error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::FieldTooLong { field, .. } => *field,
            Self::InvalidRole(_) | Self::RoleNotRegistrable(_) => "role",
            Self::InvalidApplicationStatus(_) => "status",
            Self::InvalidDeadline { .. } | Self::DeadlineInPast { .. } => "deadline",
            Self::InvalidCgpa(_) => "cgpa",
            Self::InvalidPhone(_) => "phone",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Field '{field}' is required"),
            Self::FieldTooLong { field, max, actual } => {
                write!(
                    f,
                    "Field '{field}' must be at most {max} characters (got {actual})"
                )
            }
            Self::InvalidRole(role) => write!(f, "Invalid role: '{role}'"),
            Self::RoleNotRegistrable(role) => {
                write!(f, "Role '{role}' cannot be chosen at registration")
            }
            Self::InvalidApplicationStatus(status) => {
                write!(
                    f,
                    "Invalid application status: '{status}'. Must be one of pending, \
                     reviewed, shortlisted, rejected, accepted"
                )
            }
            Self::InvalidDeadline { value, error } => {
                write!(f, "Invalid deadline '{value}': {error}")
            }
            Self::DeadlineInPast { deadline, today } => {
                write!(f, "Deadline {deadline} is before today ({today})")
            }
            Self::InvalidCgpa(msg) => write!(f, "Invalid CGPA: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone number: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
