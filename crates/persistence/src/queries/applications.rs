// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application queries.

use std::str::FromStr;

use diesel::SqliteConnection;
use diesel::prelude::*;
use placement_domain::ApplicationStatus;

use crate::data_models::{
    AdminApplicationView, ApplicantView, ApplicationData, ApplicationView, StudentProfileData,
};
use crate::diesel_schema::{
    accounts, applications, company_profiles, job_postings, student_profiles,
};
use crate::error::PersistenceError;
use crate::queries::profiles::StudentProfileRow;

/// Diesel Queryable struct for application rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = applications)]
pub(crate) struct ApplicationRow {
    pub application_id: i64,
    pub job_posting_id: i64,
    pub account_id: i64,
    pub status: String,
    pub applied_at: String,
    pub cover_letter: Option<String>,
}

impl ApplicationRow {
    pub(crate) fn into_data(self) -> Result<ApplicationData, PersistenceError> {
        let status: ApplicationStatus = ApplicationStatus::from_str(&self.status).map_err(|e| {
            PersistenceError::ReconstructionError(format!(
                "Application {} has an invalid status: {e}",
                self.application_id
            ))
        })?;

        Ok(ApplicationData {
            application_id: self.application_id,
            job_posting_id: self.job_posting_id,
            account_id: self.account_id,
            status,
            applied_at: self.applied_at,
            cover_letter: self.cover_letter,
        })
    }
}

/// Retrieves an application by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the application does not exist.
pub fn get_application(
    conn: &mut SqliteConnection,
    application_id: i64,
) -> Result<Option<ApplicationData>, PersistenceError> {
    applications::table
        .find(application_id)
        .select(ApplicationRow::as_select())
        .first(conn)
        .optional()?
        .map(ApplicationRow::into_data)
        .transpose()
}

/// Returns true if the student already applied to the drive.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn application_exists(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
    account_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = applications::table
        .filter(applications::job_posting_id.eq(job_posting_id))
        .filter(applications::account_id.eq(account_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Lists a student's applications, newest first, optionally narrowed to one status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_applications_for_student(
    conn: &mut SqliteConnection,
    account_id: i64,
    status: Option<ApplicationStatus>,
) -> Result<Vec<ApplicationView>, PersistenceError> {
    let mut query = applications::table
        .inner_join(job_postings::table.inner_join(company_profiles::table))
        .filter(applications::account_id.eq(account_id))
        .select((
            ApplicationRow::as_select(),
            job_postings::title,
            company_profiles::company_name,
        ))
        .into_boxed();

    if let Some(status) = status {
        query = query.filter(applications::status.eq(status.as_str()));
    }

    let rows: Vec<(ApplicationRow, String, String)> = query
        .order((
            applications::applied_at.desc(),
            applications::application_id.desc(),
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|(row, drive_title, company_name)| {
            Ok(ApplicationView {
                application: row.into_data()?,
                drive_title,
                company_name,
            })
        })
        .collect()
}

/// Returns the IDs of every drive the student has applied to.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn applied_drive_ids(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    Ok(applications::table
        .filter(applications::account_id.eq(account_id))
        .select(applications::job_posting_id)
        .order(applications::job_posting_id.asc())
        .load(conn)?)
}

/// Lists the applicants for one drive, oldest application first.
///
/// Students who have not created a profile yet are listed with `profile: None`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_applicants_for_drive(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
) -> Result<Vec<ApplicantView>, PersistenceError> {
    let rows: Vec<(ApplicationRow, String, String, Option<StudentProfileRow>)> =
        applications::table
            .inner_join(accounts::table.left_join(student_profiles::table))
            .filter(applications::job_posting_id.eq(job_posting_id))
            .order(applications::application_id.asc())
            .select((
                ApplicationRow::as_select(),
                accounts::username,
                accounts::email,
                student_profiles::all_columns.nullable(),
            ))
            .load(conn)?;

    rows.into_iter()
        .map(|(row, username, email, profile)| {
            Ok(ApplicantView {
                application: row.into_data()?,
                username,
                email,
                profile: profile.map(StudentProfileData::from),
            })
        })
        .collect()
}

/// Lists every application in the system with drive, company and student names.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_all_applications(
    conn: &mut SqliteConnection,
) -> Result<Vec<AdminApplicationView>, PersistenceError> {
    let rows: Vec<(ApplicationRow, String, String, String)> = applications::table
        .inner_join(job_postings::table.inner_join(company_profiles::table))
        .inner_join(accounts::table)
        .order(applications::application_id.asc())
        .select((
            ApplicationRow::as_select(),
            job_postings::title,
            company_profiles::company_name,
            accounts::username,
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|(row, drive_title, company_name, student_username)| {
            Ok(AdminApplicationView {
                application: row.into_data()?,
                drive_title,
                company_name,
                student_username,
            })
        })
        .collect()
}
