// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drive lifecycle for companies and drive discovery for students.

use placement_domain::{DriveFields, ValidatedDrive, is_visible_to_students, normalize_search_term};
use placement_persistence::{
    ApplicantView, BrowseFilter, CompanyProfileData, DriveData, DriveListing, Persistence,
};
use time::Date;
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, not_found, translate_domain_error};
use crate::handlers::{load_owned_drive, storage};
use crate::request_response::{
    BrowseRequest, BrowseResponse, CompanyDrivesResponse, DeleteDriveResponse,
    DriveApplicantsResponse, DriveDetailResponse, DriveResponse, DriveStatusResponse,
};

fn reload_drive(persistence: &mut Persistence, job_posting_id: i64) -> Result<DriveData, ApiError> {
    persistence
        .get_drive(job_posting_id)
        .map_err(storage("drive"))?
        .ok_or_else(|| not_found("drive", job_posting_id))
}

// ============================================================================
// Company side
// ============================================================================

/// Creates a drive for the acting company.
///
/// The company must have a profile and an approved account. The new drive
/// is active and waits for administrator approval.
///
/// # Errors
///
/// Returns `Rejected` if the company has no profile or is not approved, and
/// `InvalidInput` if a field fails validation. Nothing is written on error.
pub fn create_drive(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    fields: &DriveFields,
    today: Date,
) -> Result<DriveResponse, ApiError> {
    let (actor, profile) = AuthorizationService::require_company(actor, "create_drive")?;

    let Some(profile) = profile else {
        return Err(ApiError::Rejected {
            rule: String::from("company_profile_required"),
            message: String::from("Please complete your company profile first."),
        });
    };

    if !actor.account.is_approved {
        return Err(ApiError::Rejected {
            rule: String::from("company_approval_required"),
            message: String::from(
                "Your company needs approval from admin before posting drives.",
            ),
        });
    }

    let drive: ValidatedDrive = fields.validate(today).map_err(translate_domain_error)?;
    let job_posting_id: i64 = persistence
        .insert_drive(profile.company_profile_id, &drive)
        .map_err(storage("drive"))?;

    info!(
        job_posting_id,
        company_profile_id = profile.company_profile_id,
        "Created drive"
    );

    Ok(DriveResponse {
        drive: reload_drive(persistence, job_posting_id)?,
        message: String::from("Placement drive created successfully! Waiting for admin approval."),
    })
}

/// Replaces the fields of a drive the acting company owns.
///
/// The active and approved flags are left as they are.
///
/// # Errors
///
/// Returns `ResourceNotFound`, `Forbidden` for a drive of another company,
/// or `InvalidInput` if a field fails validation.
pub fn edit_drive(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    job_posting_id: i64,
    fields: &DriveFields,
    today: Date,
) -> Result<DriveResponse, ApiError> {
    load_owned_drive(persistence, actor, job_posting_id, "edit_drive")?;

    let drive: ValidatedDrive = fields.validate(today).map_err(translate_domain_error)?;
    persistence
        .update_drive(job_posting_id, &drive)
        .map_err(storage("drive"))?;

    info!(job_posting_id, "Edited drive");

    Ok(DriveResponse {
        drive: reload_drive(persistence, job_posting_id)?,
        message: String::from("Drive updated successfully!"),
    })
}

/// Flips the active flag of a drive the acting company owns.
///
/// # Errors
///
/// Returns `ResourceNotFound` or `Forbidden`.
pub fn toggle_drive_active(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    job_posting_id: i64,
) -> Result<DriveStatusResponse, ApiError> {
    load_owned_drive(persistence, actor, job_posting_id, "toggle_drive_active")?;

    let is_active: bool = persistence
        .toggle_drive_active(job_posting_id)
        .map_err(storage("drive"))?;

    info!(job_posting_id, is_active, "Toggled drive activation");

    let verb: &str = if is_active { "activated" } else { "deactivated" };
    Ok(DriveStatusResponse {
        job_posting_id,
        is_active,
        message: format!("Drive {verb}."),
    })
}

/// Deletes a drive the acting company owns, with all of its applications.
///
/// # Errors
///
/// Returns `ResourceNotFound` or `Forbidden`.
pub fn delete_drive(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    job_posting_id: i64,
) -> Result<DeleteDriveResponse, ApiError> {
    load_owned_drive(persistence, actor, job_posting_id, "delete_drive")?;

    let removed_applications: usize = persistence
        .delete_drive(job_posting_id)
        .map_err(storage("drive"))?;

    info!(job_posting_id, removed_applications, "Deleted drive");

    Ok(DeleteDriveResponse {
        job_posting_id,
        removed_applications,
        message: String::from("Drive deleted successfully."),
    })
}

/// Lists the acting company's drives, newest first.
///
/// A company without a profile has no drives.
///
/// # Errors
///
/// Returns an error if the actor is not a company or the query fails.
pub fn list_company_drives(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
) -> Result<CompanyDrivesResponse, ApiError> {
    let (_, profile) = AuthorizationService::require_company(actor, "list_company_drives")?;
    let drives: Vec<DriveData> = match profile {
        Some(profile) => persistence
            .list_drives_for_company(profile.company_profile_id)
            .map_err(storage("drive"))?,
        None => Vec::new(),
    };
    Ok(CompanyDrivesResponse { drives })
}

/// Lists the applicants of a drive the acting company owns.
///
/// # Errors
///
/// Returns `ResourceNotFound` or `Forbidden`.
pub fn list_drive_applications(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    job_posting_id: i64,
) -> Result<DriveApplicantsResponse, ApiError> {
    let (_, drive): (&CompanyProfileData, DriveData) =
        load_owned_drive(persistence, actor, job_posting_id, "list_drive_applications")?;

    let applicants: Vec<ApplicantView> = persistence
        .list_applicants_for_drive(job_posting_id)
        .map_err(storage("application"))?;

    Ok(DriveApplicantsResponse { drive, applicants })
}

// ============================================================================
// Student side
// ============================================================================

/// Lists the drives a student can apply to, with optional filters.
///
/// Filters are ANDed together: free text over title, description and
/// company name; exact job type; substring location.
///
/// # Errors
///
/// Returns an error if the actor is not a student or the query fails.
pub fn browse_drives(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    request: &BrowseRequest,
    today: Date,
) -> Result<BrowseResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_student(actor, "browse_drives")?;

    let filter: BrowseFilter = BrowseFilter {
        term: normalize_search_term(request.search.as_deref()),
        job_type: normalize_search_term(request.job_type.as_deref()),
        location: normalize_search_term(request.location.as_deref()),
    };

    let drives: Vec<DriveListing> = persistence
        .browse_drives(&filter, today)
        .map_err(storage("drive"))?;
    let applied_drive_ids: Vec<i64> = persistence
        .applied_drive_ids(actor.account_id())
        .map_err(storage("application"))?;

    Ok(BrowseResponse {
        drives,
        applied_drive_ids,
    })
}

/// Shows one drive to a student.
///
/// Drives that are not visible to students are reported as missing.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the drive does not exist or is not visible.
pub fn get_drive_detail(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    job_posting_id: i64,
    today: Date,
) -> Result<DriveDetailResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_student(actor, "get_drive_detail")?;

    let listing: DriveListing = persistence
        .get_drive_listing(job_posting_id)
        .map_err(storage("drive"))?
        .filter(|listing| {
            is_visible_to_students(
                listing.drive.is_active,
                listing.drive.is_approved,
                listing.drive.deadline,
                today,
            )
        })
        .ok_or_else(|| not_found("drive", job_posting_id))?;

    let already_applied: bool = persistence
        .application_exists(job_posting_id, actor.account_id())
        .map_err(storage("application"))?;

    Ok(DriveDetailResponse {
        listing,
        already_applied,
    })
}
