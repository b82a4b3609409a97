// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin search over companies, students and drives.
//!
//! Each search takes an optional term matched case-insensitively as a
//! substring of a fixed set of columns, ORed together. `None` returns the
//! full set. Results come back in primary-key order.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::{
    CompanyProfileData, CompanySummary, DriveListing, StudentProfileData, StudentSummary,
};
use crate::diesel_schema::{accounts, company_profiles, job_postings, student_profiles};
use crate::error::PersistenceError;
use crate::queries::drives::{DriveRow, into_listings};
use crate::queries::like_pattern;
use crate::queries::profiles::{CompanyProfileRow, StudentProfileRow};

/// Searches company profiles by company name, industry and account email.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_companies(
    conn: &mut SqliteConnection,
    term: Option<&str>,
) -> Result<Vec<CompanySummary>, PersistenceError> {
    let mut query = company_profiles::table
        .inner_join(accounts::table)
        .select((
            CompanyProfileRow::as_select(),
            accounts::username,
            accounts::email,
            accounts::is_active,
            accounts::is_approved,
        ))
        .into_boxed();

    if let Some(term) = term {
        let pattern: String = like_pattern(term);
        query = query.filter(
            company_profiles::company_name
                .like(pattern.clone())
                .escape('\\')
                .or(company_profiles::industry.like(pattern.clone()).escape('\\'))
                .or(accounts::email.like(pattern).escape('\\')),
        );
    }

    let rows: Vec<(CompanyProfileRow, String, String, i32, i32)> = query
        .order(company_profiles::company_profile_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(row, username, email, is_active, is_approved)| CompanySummary {
            profile: CompanyProfileData::from(row),
            username,
            email,
            is_active: is_active != 0,
            is_approved: is_approved != 0,
        })
        .collect())
}

/// Searches student profiles by full name, roll number, branch and account email.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_students(
    conn: &mut SqliteConnection,
    term: Option<&str>,
) -> Result<Vec<StudentSummary>, PersistenceError> {
    let mut query = student_profiles::table
        .inner_join(accounts::table)
        .select((
            StudentProfileRow::as_select(),
            accounts::username,
            accounts::email,
            accounts::is_active,
        ))
        .into_boxed();

    if let Some(term) = term {
        let pattern: String = like_pattern(term);
        query = query.filter(
            student_profiles::full_name
                .like(pattern.clone())
                .escape('\\')
                .or(student_profiles::roll_number.like(pattern.clone()).escape('\\'))
                .or(student_profiles::branch.like(pattern.clone()).escape('\\'))
                .or(accounts::email.like(pattern).escape('\\')),
        );
    }

    let rows: Vec<(StudentProfileRow, String, String, i32)> = query
        .order(student_profiles::student_profile_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(row, username, email, is_active)| StudentSummary {
            profile: StudentProfileData::from(row),
            username,
            email,
            is_active: is_active != 0,
        })
        .collect())
}

/// Searches every drive by title, location and company name.
///
/// Unlike the student browser this ignores approval, activity and deadline.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_drives(
    conn: &mut SqliteConnection,
    term: Option<&str>,
) -> Result<Vec<DriveListing>, PersistenceError> {
    let mut query = job_postings::table
        .inner_join(company_profiles::table)
        .select((DriveRow::as_select(), company_profiles::company_name))
        .into_boxed();

    if let Some(term) = term {
        let pattern: String = like_pattern(term);
        query = query.filter(
            job_postings::title
                .like(pattern.clone())
                .escape('\\')
                .or(job_postings::location.like(pattern.clone()).escape('\\'))
                .or(company_profiles::company_name.like(pattern).escape('\\')),
        );
    }

    let rows: Vec<(DriveRow, String)> = query
        .order(job_postings::job_posting_id.asc())
        .load(conn)?;

    into_listings(rows)
}
