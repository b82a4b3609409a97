// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drive (job posting) field rules and the student visibility rule.

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

use crate::error::DomainError;
use crate::validation::{MAX_DRIVE_TEXT_LEN, MAX_TITLE_LEN, require_max_len, require_non_blank};

/// Raw drive fields as submitted by a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveFields {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    pub location: String,
    pub job_type: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub deadline: String,
}

/// Drive fields that passed validation, with the deadline parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDrive {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    pub location: String,
    pub job_type: String,
    pub deadline: Date,
}

/// Parses a `YYYY-MM-DD` deadline.
///
/// # Errors
///
/// Returns `DomainError::InvalidDeadline` if the value is not a valid date.
pub fn parse_deadline(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::InvalidDeadline {
            value: value.to_string(),
            error: e.to_string(),
        }
    })
}

impl DriveFields {
    /// Validates the fields against the drive rules.
    ///
    /// Rules, checked in order:
    /// - title, description, requirements, location, job type and deadline are required
    /// - title is at most 200 characters
    /// - description and requirements are at most 2000 characters each
    /// - the deadline parses and is not before `today`
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found.
    pub fn validate(&self, today: Date) -> Result<ValidatedDrive, DomainError> {
        require_non_blank("title", &self.title)?;
        require_non_blank("description", &self.description)?;
        require_non_blank("requirements", &self.requirements)?;
        require_non_blank("location", &self.location)?;
        require_non_blank("job_type", &self.job_type)?;
        require_non_blank("deadline", &self.deadline)?;

        let title: &str = self.title.trim();
        require_max_len("title", title, MAX_TITLE_LEN)?;
        require_max_len("description", &self.description, MAX_DRIVE_TEXT_LEN)?;
        require_max_len("requirements", &self.requirements, MAX_DRIVE_TEXT_LEN)?;

        let deadline: Date = parse_deadline(&self.deadline)?;
        if deadline < today {
            return Err(DomainError::DeadlineInPast { deadline, today });
        }

        Ok(ValidatedDrive {
            title: title.to_string(),
            description: self.description.clone(),
            requirements: self.requirements.clone(),
            salary: self
                .salary
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string),
            location: self.location.trim().to_string(),
            job_type: self.job_type.trim().to_string(),
            deadline,
        })
    }
}

/// Returns true if a drive is discoverable and open to student applications.
///
/// A drive is visible iff it is active, approved, and its deadline is today
/// or later.
#[must_use]
pub fn is_visible_to_students(
    is_active: bool,
    is_approved: bool,
    deadline: Date,
    today: Date,
) -> bool {
    is_active && is_approved && deadline >= today
}
