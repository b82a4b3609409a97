// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application lifecycle: applying, reviewing and the student's own views.

use std::str::FromStr;

use placement_domain::{ApplicationStatus, is_visible_to_students, validate_cover_letter};
use placement_persistence::{
    ApplicationData, ApplicationView, DriveData, DriveListing, Persistence,
};
use time::Date;
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, not_found, translate_domain_error};
use crate::handlers::{load_owned_drive, storage};
use crate::request_response::{
    ApplicationDetailResponse, ApplicationFilterRequest, ApplicationStatusResponse, ApplyRequest,
    ApplyResponse, BulkShortlistRequest, BulkShortlistResponse, StudentApplicationsResponse,
    UpdateStatusRequest,
};

fn load_application(
    persistence: &mut Persistence,
    application_id: i64,
) -> Result<ApplicationData, ApiError> {
    persistence
        .get_application(application_id)
        .map_err(storage("application"))?
        .ok_or_else(|| not_found("application", application_id))
}

fn already_applied() -> ApiError {
    ApiError::Conflict {
        resource_type: String::from("application"),
        message: String::from("You have already applied to this drive."),
    }
}

/// Applies the acting student to a drive.
///
/// Requirements, in order: a student profile exists; the drive exists and
/// is visible to students; the student has not applied yet; the cover
/// letter is at most 1000 characters. New applications are `pending`.
///
/// # Errors
///
/// Returns `Rejected` when the profile is missing or the drive is closed,
/// `ResourceNotFound` for an unknown drive, `Conflict` for a second
/// application to the same drive, and `InvalidInput` for an oversized
/// cover letter.
pub fn apply(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    job_posting_id: i64,
    request: &ApplyRequest,
    today: Date,
) -> Result<ApplyResponse, ApiError> {
    let (actor, profile) = AuthorizationService::require_student(actor, "apply")?;

    if profile.is_none() {
        return Err(ApiError::Rejected {
            rule: String::from("student_profile_required"),
            message: String::from("Please complete your profile before applying."),
        });
    }

    let drive: DriveData = persistence
        .get_drive(job_posting_id)
        .map_err(storage("drive"))?
        .ok_or_else(|| not_found("drive", job_posting_id))?;

    if !is_visible_to_students(drive.is_active, drive.is_approved, drive.deadline, today) {
        return Err(ApiError::Rejected {
            rule: String::from("drive_closed"),
            message: String::from("This drive is not accepting applications."),
        });
    }

    let account_id: i64 = actor.account_id();
    if persistence
        .application_exists(job_posting_id, account_id)
        .map_err(storage("application"))?
    {
        return Err(already_applied());
    }

    let cover_letter: Option<String> =
        validate_cover_letter(request.cover_letter.as_deref()).map_err(translate_domain_error)?;

    let application_id: i64 = persistence
        .create_application(job_posting_id, account_id, cover_letter.as_deref())
        .map_err(|e| {
            if e.is_unique_violation() {
                already_applied()
            } else {
                storage("application")(e)
            }
        })?;

    info!(application_id, job_posting_id, account_id, "Application submitted");

    Ok(ApplyResponse {
        application: load_application(persistence, application_id)?,
        message: String::from("Application submitted successfully!"),
    })
}

/// Sets the status of an application to a drive the acting company owns.
///
/// Any of the five statuses may replace any other.
///
/// # Errors
///
/// Returns `ResourceNotFound`, `Forbidden` when the drive belongs to another
/// company, or `InvalidInput` for an unknown status. The stored status is
/// unchanged on error.
pub fn update_application_status(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    application_id: i64,
    request: &UpdateStatusRequest,
) -> Result<ApplicationStatusResponse, ApiError> {
    AuthorizationService::require_company(actor, "update_application_status")?;

    let application: ApplicationData = load_application(persistence, application_id)?;
    load_owned_drive(
        persistence,
        actor,
        application.job_posting_id,
        "update_application_status",
    )?;

    let status: ApplicationStatus =
        ApplicationStatus::from_str(request.status.trim()).map_err(|e| {
            warn!(application_id, status = %request.status, "Rejected application status");
            translate_domain_error(e)
        })?;

    persistence
        .update_application_status(application_id, status)
        .map_err(storage("application"))?;

    info!(application_id, %status, "Updated application status");

    Ok(ApplicationStatusResponse {
        application: load_application(persistence, application_id)?,
        message: format!("Application status updated to {status}."),
    })
}

/// Shortlists several applications of one drive the acting company owns.
///
/// IDs that do not belong to the drive are skipped.
///
/// # Errors
///
/// Returns `ResourceNotFound` or `Forbidden` for the drive, and `Rejected`
/// when no IDs were given.
pub fn bulk_shortlist(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    job_posting_id: i64,
    request: &BulkShortlistRequest,
) -> Result<BulkShortlistResponse, ApiError> {
    load_owned_drive(persistence, actor, job_posting_id, "bulk_shortlist")?;

    if request.application_ids.is_empty() {
        return Err(ApiError::Rejected {
            rule: String::from("none_selected"),
            message: String::from("No applications selected."),
        });
    }

    let updated: usize = persistence
        .bulk_shortlist(job_posting_id, &request.application_ids)
        .map_err(storage("application"))?;

    info!(
        job_posting_id,
        requested = request.application_ids.len(),
        updated,
        "Bulk shortlisted applications"
    );

    Ok(BulkShortlistResponse {
        job_posting_id,
        updated,
        message: format!("{updated} application(s) shortlisted."),
    })
}

/// Lists the acting student's applications, newest first.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status filter.
pub fn my_applications(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    request: &ApplicationFilterRequest,
) -> Result<StudentApplicationsResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_student(actor, "my_applications")?;

    let status: Option<ApplicationStatus> = match request
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(value) => Some(ApplicationStatus::from_str(value).map_err(translate_domain_error)?),
        None => None,
    };

    let applications: Vec<ApplicationView> = persistence
        .list_applications_for_student(actor.account_id(), status)
        .map_err(storage("application"))?;

    Ok(StudentApplicationsResponse { applications })
}

/// Shows one of the acting student's applications.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown ID and `Forbidden` for another
/// student's application.
pub fn application_detail(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    application_id: i64,
) -> Result<ApplicationDetailResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_student(actor, "application_detail")?;

    let application: ApplicationData = load_application(persistence, application_id)?;
    if application.account_id != actor.account_id() {
        warn!(
            application_id,
            account_id = actor.account_id(),
            "Application owned by another student"
        );
        return Err(ApiError::Forbidden {
            action: String::from("application_detail"),
            required: String::from("ownership of the application"),
        });
    }

    let listing: DriveListing = persistence
        .get_drive_listing(application.job_posting_id)
        .map_err(storage("drive"))?
        .ok_or_else(|| not_found("drive", application.job_posting_id))?;

    Ok(ApplicationDetailResponse {
        application,
        listing,
    })
}

/// Lists the acting student's accepted applications.
///
/// # Errors
///
/// Returns an error if the actor is not a student or the query fails.
pub fn placement_history(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
) -> Result<StudentApplicationsResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_student(actor, "placement_history")?;

    let applications: Vec<ApplicationView> = persistence
        .list_applications_for_student(actor.account_id(), Some(ApplicationStatus::Accepted))
        .map_err(storage("application"))?;

    Ok(StudentApplicationsResponse { applications })
}
