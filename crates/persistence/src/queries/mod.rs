// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `accounts`: Account and session lookups, password verification
//! - `profiles`: Student and company profile lookups
//! - `drives`: Drive lookups, company listings and the student browser
//! - `applications`: Application lookups and role-scoped listings
//! - `search`: Admin free-text search over companies, students and drives
//! - `dashboards`: Per-request aggregate counters

pub mod accounts;
pub mod applications;
pub mod dashboards;
pub mod drives;
pub mod profiles;
pub mod search;

use time::Date;
use time::macros::format_description;

use crate::error::PersistenceError;

/// Formats a date the way `job_postings.deadline` stores it.
///
/// `YYYY-MM-DD` text compares in date order, which the visibility filter
/// relies on.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| PersistenceError::Other(format!("Failed to format date {date}: {e}")))
}

/// Parses a stored `YYYY-MM-DD` date.
pub(crate) fn parse_stored_date(value: &str) -> Result<Date, PersistenceError> {
    placement_domain::parse_deadline(value)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

/// Builds a `LIKE` pattern matching `term` anywhere in a column.
///
/// `%`, `_` and the escape character itself are escaped so user input is
/// matched literally. Use with `.escape('\\')`.
#[must_use]
pub fn like_pattern(term: &str) -> String {
    let mut pattern: String = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
