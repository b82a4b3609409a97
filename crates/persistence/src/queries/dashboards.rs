// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard counters. Every value is computed from the tables at call time.

use std::str::FromStr;

use diesel::SqliteConnection;
use diesel::dsl::count_star;
use diesel::prelude::*;
use placement_domain::{ApplicationStatus, Role};
use time::Date;

use crate::data_models::{AdminTotals, CompanyTotals, StatusCounts, StudentTotals};
use crate::diesel_schema::{accounts, applications, job_postings};
use crate::error::PersistenceError;
use crate::queries::drives::count_visible_drives;

fn fold_status_rows(rows: Vec<(String, i64)>) -> Result<StatusCounts, PersistenceError> {
    let mut counts: StatusCounts = StatusCounts::default();
    for (status, count) in rows {
        let status: ApplicationStatus = ApplicationStatus::from_str(&status)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
        counts.add(status, count);
    }
    Ok(counts)
}

fn count_accounts_with_role(
    conn: &mut SqliteConnection,
    role: Role,
) -> Result<i64, PersistenceError> {
    Ok(accounts::table
        .filter(accounts::role.eq(role.as_str()))
        .count()
        .get_result(conn)?)
}

/// Computes the site-wide admin totals.
///
/// # Errors
///
/// Returns an error if any count query fails.
pub fn admin_totals(conn: &mut SqliteConnection) -> Result<AdminTotals, PersistenceError> {
    let total_accounts: i64 = accounts::table.count().get_result(conn)?;
    let total_students: i64 = count_accounts_with_role(conn, Role::Student)?;
    let total_companies: i64 = count_accounts_with_role(conn, Role::Company)?;
    let approved_companies: i64 = accounts::table
        .filter(accounts::role.eq(Role::Company.as_str()))
        .filter(accounts::is_approved.eq(1))
        .count()
        .get_result(conn)?;

    let total_drives: i64 = job_postings::table.count().get_result(conn)?;
    let approved_drives: i64 = job_postings::table
        .filter(job_postings::is_approved.eq(1))
        .count()
        .get_result(conn)?;

    let status_rows: Vec<(String, i64)> = applications::table
        .group_by(applications::status)
        .select((applications::status, count_star()))
        .load(conn)?;

    Ok(AdminTotals {
        total_accounts,
        total_students,
        total_companies,
        approved_companies,
        pending_companies: total_companies - approved_companies,
        total_drives,
        approved_drives,
        pending_drives: total_drives - approved_drives,
        applications: fold_status_rows(status_rows)?,
    })
}

/// Computes totals over one company's drives and the applications against them.
///
/// # Errors
///
/// Returns an error if any count query fails.
pub fn company_totals(
    conn: &mut SqliteConnection,
    company_profile_id: i64,
) -> Result<CompanyTotals, PersistenceError> {
    let total_drives: i64 = job_postings::table
        .filter(job_postings::company_profile_id.eq(company_profile_id))
        .count()
        .get_result(conn)?;
    let active_drives: i64 = job_postings::table
        .filter(job_postings::company_profile_id.eq(company_profile_id))
        .filter(job_postings::is_active.eq(1))
        .count()
        .get_result(conn)?;
    let approved_drives: i64 = job_postings::table
        .filter(job_postings::company_profile_id.eq(company_profile_id))
        .filter(job_postings::is_approved.eq(1))
        .count()
        .get_result(conn)?;

    let status_rows: Vec<(String, i64)> = applications::table
        .inner_join(job_postings::table)
        .filter(job_postings::company_profile_id.eq(company_profile_id))
        .group_by(applications::status)
        .select((applications::status, count_star()))
        .load(conn)?;

    Ok(CompanyTotals {
        total_drives,
        active_drives,
        approved_drives,
        applications: fold_status_rows(status_rows)?,
    })
}

/// Computes totals over one student's applications plus the drives visible on `today`.
///
/// # Errors
///
/// Returns an error if any count query fails.
pub fn student_totals(
    conn: &mut SqliteConnection,
    account_id: i64,
    today: Date,
) -> Result<StudentTotals, PersistenceError> {
    let status_rows: Vec<(String, i64)> = applications::table
        .filter(applications::account_id.eq(account_id))
        .group_by(applications::status)
        .select((applications::status, count_star()))
        .load(conn)?;

    Ok(StudentTotals {
        visible_drives: count_visible_drives(conn, today)?,
        applications: fold_status_rows(status_rows)?,
    })
}
