// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Role;
use std::str::FromStr;

/// Maximum length of a drive title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a drive description or requirements text, in characters.
pub const MAX_DRIVE_TEXT_LEN: usize = 2000;

/// Maximum length of a cover letter, in characters.
pub const MAX_COVER_LETTER_LEN: usize = 1000;

/// Rejects a value that is empty or whitespace-only.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the value is blank.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

/// Rejects a value longer than `max` characters.
///
/// # Errors
///
/// Returns `DomainError::FieldTooLong` if the value is too long.
pub fn require_max_len(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    let actual: usize = value.chars().count();
    if actual > max {
        return Err(DomainError::FieldTooLong { field, max, actual });
    }
    Ok(())
}

/// Checks that every registration field is present.
///
/// Passwords are only checked for presence here; length and confirmation
/// rules belong to the password policy.
///
/// # Errors
///
/// Returns `DomainError::MissingField` naming the first blank field.
pub fn require_registration_fields(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    role: &str,
) -> Result<(), DomainError> {
    require_non_blank("username", username)?;
    require_non_blank("email", email)?;
    require_non_blank("password", password)?;
    require_non_blank("confirm_password", confirm_password)?;
    require_non_blank("role", role)
}

/// Parses the role requested at registration.
///
/// # Errors
///
/// Returns an error if the role is unknown or is `admin`.
pub fn parse_registrable_role(role: &str) -> Result<Role, DomainError> {
    let role: Role = Role::from_str(role.trim())?;
    if !role.is_self_registrable() {
        return Err(DomainError::RoleNotRegistrable(role.as_str().to_string()));
    }
    Ok(role)
}

/// Validates an optional cover letter and returns it trimmed.
///
/// A blank cover letter is stored as absent.
///
/// # Errors
///
/// Returns `DomainError::FieldTooLong` if the letter exceeds
/// `MAX_COVER_LETTER_LEN` characters.
pub fn validate_cover_letter(cover_letter: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(text) = cover_letter.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    require_max_len("cover_letter", text, MAX_COVER_LETTER_LEN)?;
    Ok(Some(text.to_string()))
}

/// Normalizes a free-text search term.
///
/// Returns `None` for an absent or blank term, meaning "no filter".
#[must_use]
pub fn normalize_search_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
}
