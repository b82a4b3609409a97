// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student and company profile queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::{CompanyProfileData, StudentProfileData};
use crate::diesel_schema::{company_profiles, student_profiles};
use crate::error::PersistenceError;

/// Diesel Queryable struct for student profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = student_profiles)]
pub(crate) struct StudentProfileRow {
    pub student_profile_id: i64,
    pub account_id: i64,
    pub full_name: String,
    pub roll_number: String,
    pub branch: String,
    pub cgpa: f64,
    pub phone: Option<String>,
    pub resume_path: Option<String>,
}

impl From<StudentProfileRow> for StudentProfileData {
    fn from(row: StudentProfileRow) -> Self {
        Self {
            student_profile_id: row.student_profile_id,
            account_id: row.account_id,
            full_name: row.full_name,
            roll_number: row.roll_number,
            branch: row.branch,
            cgpa: row.cgpa,
            phone: row.phone,
            resume_path: row.resume_path,
        }
    }
}

/// Diesel Queryable struct for company profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = company_profiles)]
pub(crate) struct CompanyProfileRow {
    pub company_profile_id: i64,
    pub account_id: i64,
    pub company_name: String,
    pub industry: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl From<CompanyProfileRow> for CompanyProfileData {
    fn from(row: CompanyProfileRow) -> Self {
        Self {
            company_profile_id: row.company_profile_id,
            account_id: row.account_id,
            company_name: row.company_name,
            industry: row.industry,
            description: row.description,
            website: row.website,
            contact_person: row.contact_person,
            contact_email: row.contact_email,
            contact_phone: row.contact_phone,
        }
    }
}

/// Retrieves the student profile owned by an account.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account has no student profile yet.
pub fn get_student_profile_by_account(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<StudentProfileData>, PersistenceError> {
    Ok(student_profiles::table
        .filter(student_profiles::account_id.eq(account_id))
        .select(StudentProfileRow::as_select())
        .first(conn)
        .optional()?
        .map(StudentProfileData::from))
}

/// Retrieves the company profile owned by an account.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account has no company profile yet.
pub fn get_company_profile_by_account(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<CompanyProfileData>, PersistenceError> {
    Ok(company_profiles::table
        .filter(company_profiles::account_id.eq(account_id))
        .select(CompanyProfileRow::as_select())
        .first(conn)
        .optional()?
        .map(CompanyProfileData::from))
}

/// Returns true if a student profile other than the given account's uses this roll number.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn roll_number_taken(
    conn: &mut SqliteConnection,
    roll_number: &str,
    account_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = student_profiles::table
        .filter(student_profiles::roll_number.eq(roll_number))
        .filter(student_profiles::account_id.ne(account_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}
