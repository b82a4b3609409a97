// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use placement_domain::ApplicationStatus;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::applications;
use crate::error::PersistenceError;
use crate::queries::applications::application_exists;

/// Creates a pending application from a student to a drive.
///
/// The existence check and insert share one transaction, and the
/// `(job_posting_id, account_id)` unique constraint rejects any concurrent
/// duplicate that slips past the check.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the student already applied.
pub fn create_application(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
    account_id: i64,
    cover_letter: Option<&str>,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        if application_exists(conn, job_posting_id, account_id)? {
            return Err(PersistenceError::UniqueViolation(format!(
                "Account {account_id} already applied to drive {job_posting_id}"
            )));
        }

        diesel::insert_into(applications::table)
            .values((
                applications::job_posting_id.eq(job_posting_id),
                applications::account_id.eq(account_id),
                applications::status.eq(ApplicationStatus::Pending.as_str()),
                applications::cover_letter.eq(cover_letter),
            ))
            .execute(conn)?;

        let application_id: i64 = conn.get_last_insert_rowid()?;

        info!(application_id, job_posting_id, account_id, "Application created");
        Ok(application_id)
    })
}

/// Overwrites the status of one application.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the application does not exist.
pub fn update_application_status(
    conn: &mut SqliteConnection,
    application_id: i64,
    status: ApplicationStatus,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(applications::table.find(application_id))
        .set(applications::status.eq(status.as_str()))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Application {application_id} not found"
        )));
    }

    info!(application_id, status = %status, "Application status updated");
    Ok(())
}

/// Shortlists the listed applications that belong to the drive.
///
/// Runs as one conditional `UPDATE`; IDs that do not exist or belong to
/// another drive are skipped. Returns the number of rows updated.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn bulk_shortlist(
    conn: &mut SqliteConnection,
    job_posting_id: i64,
    application_ids: &[i64],
) -> Result<usize, PersistenceError> {
    let updated: usize = diesel::update(
        applications::table
            .filter(applications::job_posting_id.eq(job_posting_id))
            .filter(applications::application_id.eq_any(application_ids)),
    )
    .set(applications::status.eq(ApplicationStatus::Shortlisted.as_str()))
    .execute(conn)?;

    info!(
        job_posting_id,
        requested = application_ids.len(),
        updated,
        "Bulk shortlist applied"
    );
    Ok(updated)
}
