// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drive (job posting) queries.
//!
//! The student-facing queries apply the visibility rule in SQL: a drive is
//! listed only when it is active, approved, and its deadline is not before
//! `today`.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Date;
use tracing::debug;

use crate::data_models::{BrowseFilter, DriveData, DriveListing};
use crate::diesel_schema::{company_profiles, job_postings};
use crate::error::PersistenceError;
use crate::queries::{format_date, like_pattern, parse_stored_date};

/// Diesel Queryable struct for drive rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = job_postings)]
pub(crate) struct DriveRow {
    pub job_posting_id: i64,
    pub company_profile_id: i64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    pub location: String,
    pub job_type: String,
    pub posted_at: String,
    pub deadline: String,
    pub is_active: i32,
    pub is_approved: i32,
}

impl DriveRow {
    pub(crate) fn into_data(self) -> Result<DriveData, PersistenceError> {
        let deadline: Date = parse_stored_date(&self.deadline)?;
        Ok(DriveData {
            job_posting_id: self.job_posting_id,
            company_profile_id: self.company_profile_id,
            title: self.title,
            description: self.description,
            requirements: self.requirements,
            salary: self.salary,
            location: self.location,
            job_type: self.job_type,
            posted_at: self.posted_at,
            deadline,
            is_active: self.is_active != 0,
            is_approved: self.is_approved != 0,
        })
    }
}

pub(crate) fn into_listings(
    rows: Vec<(DriveRow, String)>,
) -> Result<Vec<DriveListing>, PersistenceError> {
    rows.into_iter()
        .map(|(row, company_name)| {
            Ok(DriveListing {
                drive: row.into_data()?,
                company_name,
            })
        })
        .collect()
}

/// Retrieves a drive by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the drive does not exist.
pub fn get_drive(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
) -> Result<Option<DriveData>, PersistenceError> {
    job_postings::table
        .find(job_posting_id)
        .select(DriveRow::as_select())
        .first(conn)
        .optional()?
        .map(DriveRow::into_data)
        .transpose()
}

/// Retrieves a drive with its company name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the drive does not exist.
pub fn get_drive_listing(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
) -> Result<Option<DriveListing>, PersistenceError> {
    let row: Option<(DriveRow, String)> = job_postings::table
        .inner_join(company_profiles::table)
        .filter(job_postings::job_posting_id.eq(job_posting_id))
        .select((DriveRow::as_select(), company_profiles::company_name))
        .first(conn)
        .optional()?;

    Ok(into_listings(row.into_iter().collect())?.pop())
}

/// Lists every drive owned by a company, newest posting first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_drives_for_company(
    conn: &mut SqliteConnection,
    company_profile_id: i64,
) -> Result<Vec<DriveData>, PersistenceError> {
    job_postings::table
        .filter(job_postings::company_profile_id.eq(company_profile_id))
        .order((
            job_postings::posted_at.desc(),
            job_postings::job_posting_id.desc(),
        ))
        .select(DriveRow::as_select())
        .load(conn)?
        .into_iter()
        .map(DriveRow::into_data)
        .collect()
}

/// Lists drives visible to students on `today`, narrowed by `filter`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn browse_drives(
    conn: &mut SqliteConnection,
    filter: &BrowseFilter,
    today: Date,
) -> Result<Vec<DriveListing>, PersistenceError> {
    let today_str: String = format_date(today)?;
    debug!(?filter, today = %today_str, "Browsing visible drives");

    let mut query = job_postings::table
        .inner_join(company_profiles::table)
        .filter(job_postings::is_active.eq(1))
        .filter(job_postings::is_approved.eq(1))
        .filter(job_postings::deadline.ge(today_str))
        .select((DriveRow::as_select(), company_profiles::company_name))
        .into_boxed();

    if let Some(term) = &filter.term {
        let pattern: String = like_pattern(term);
        query = query.filter(
            job_postings::title
                .like(pattern.clone())
                .escape('\\')
                .or(job_postings::description.like(pattern.clone()).escape('\\'))
                .or(company_profiles::company_name.like(pattern).escape('\\')),
        );
    }

    if let Some(job_type) = &filter.job_type {
        query = query.filter(job_postings::job_type.eq(job_type.clone()));
    }

    if let Some(location) = &filter.location {
        query = query.filter(
            job_postings::location
                .like(like_pattern(location))
                .escape('\\'),
        );
    }

    let rows: Vec<(DriveRow, String)> = query
        .order((
            job_postings::posted_at.desc(),
            job_postings::job_posting_id.desc(),
        ))
        .load(conn)?;

    into_listings(rows)
}

/// Counts drives visible to students on `today`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_visible_drives(
    conn: &mut SqliteConnection,
    today: Date,
) -> Result<i64, PersistenceError> {
    let today_str: String = format_date(today)?;
    Ok(job_postings::table
        .filter(job_postings::is_active.eq(1))
        .filter(job_postings::is_approved.eq(1))
        .filter(job_postings::deadline.ge(today_str))
        .count()
        .get_result(conn)?)
}
