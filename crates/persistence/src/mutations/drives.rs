// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drive mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use placement_domain::ValidatedDrive;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{applications, job_postings};
use crate::error::PersistenceError;
use crate::queries::format_date;

fn not_found(job_posting_id: i64) -> PersistenceError {
    PersistenceError::NotFound(format!("Drive {job_posting_id} not found"))
}

/// Inserts a new drive for a company. New drives are active and unapproved.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_drive(
    conn: &mut SqliteConnection,
    company_profile_id: i64,
    drive: &ValidatedDrive,
) -> Result<i64, PersistenceError> {
    let deadline: String = format_date(drive.deadline)?;

    diesel::insert_into(job_postings::table)
        .values((
            job_postings::company_profile_id.eq(company_profile_id),
            job_postings::title.eq(&drive.title),
            job_postings::description.eq(&drive.description),
            job_postings::requirements.eq(&drive.requirements),
            job_postings::salary.eq(drive.salary.as_deref()),
            job_postings::location.eq(&drive.location),
            job_postings::job_type.eq(&drive.job_type),
            job_postings::deadline.eq(&deadline),
            job_postings::is_active.eq(1),
            job_postings::is_approved.eq(0),
        ))
        .execute(conn)?;

    let job_posting_id: i64 = conn.get_last_insert_rowid()?;

    info!(job_posting_id, company_profile_id, title = %drive.title, "Drive created");
    Ok(job_posting_id)
}

/// Replaces the editable fields of a drive. Flags are left unchanged.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the drive does not exist.
pub fn update_drive(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
    drive: &ValidatedDrive,
) -> Result<(), PersistenceError> {
    let deadline: String = format_date(drive.deadline)?;

    let rows_affected: usize = diesel::update(job_postings::table.find(job_posting_id))
        .set((
            job_postings::title.eq(&drive.title),
            job_postings::description.eq(&drive.description),
            job_postings::requirements.eq(&drive.requirements),
            job_postings::salary.eq(drive.salary.as_deref()),
            job_postings::location.eq(&drive.location),
            job_postings::job_type.eq(&drive.job_type),
            job_postings::deadline.eq(&deadline),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(not_found(job_posting_id));
    }

    info!(job_posting_id, "Drive updated");
    Ok(())
}

/// Sets the approval flag on a drive.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the drive does not exist.
pub fn set_drive_approval(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
    approved: bool,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(job_postings::table.find(job_posting_id))
        .set(job_postings::is_approved.eq(i32::from(approved)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(not_found(job_posting_id));
    }

    info!(job_posting_id, approved, "Drive approval set");
    Ok(())
}

/// Flips the active flag on a drive and returns the new value.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the drive does not exist.
pub fn toggle_drive_active(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
) -> Result<bool, PersistenceError> {
    conn.transaction(|conn| {
        let current: i32 = job_postings::table
            .find(job_posting_id)
            .select(job_postings::is_active)
            .first(conn)
            .optional()?
            .ok_or_else(|| not_found(job_posting_id))?;

        let now_active: bool = current == 0;

        diesel::update(job_postings::table.find(job_posting_id))
            .set(job_postings::is_active.eq(i32::from(now_active)))
            .execute(conn)?;

        info!(job_posting_id, now_active, "Toggled drive active flag");
        Ok(now_active)
    })
}

/// Deletes a drive together with every application against it.
///
/// Returns the number of applications removed.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the drive does not exist; nothing
/// is deleted in that case.
pub fn delete_drive(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
) -> Result<usize, PersistenceError> {
    conn.transaction(|conn| {
        let removed_applications: usize = diesel::delete(
            applications::table.filter(applications::job_posting_id.eq(job_posting_id)),
        )
        .execute(conn)?;

        let removed_drives: usize =
            diesel::delete(job_postings::table.find(job_posting_id)).execute(conn)?;

        if removed_drives == 0 {
            return Err(not_found(job_posting_id));
        }

        info!(job_posting_id, removed_applications, "Drive deleted");
        Ok(removed_applications)
    })
}
