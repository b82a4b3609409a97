// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrator operations: approvals, activation and site-wide search.

use placement_domain::{Role, normalize_search_term};
use placement_persistence::{
    AccountData, AdminApplicationView, CompanySummary, DriveData, DriveListing, Persistence,
    StudentSummary,
};
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, not_found};
use crate::handlers::storage;
use crate::request_response::{
    AccountStatusResponse, AllApplicationsResponse, CompaniesResponse, CompanyApprovalResponse,
    DriveApprovalResponse, DriveListingsResponse, SearchRequest, StudentsResponse,
};

fn load_account(persistence: &mut Persistence, account_id: i64) -> Result<AccountData, ApiError> {
    persistence
        .get_account_by_id(account_id)
        .map_err(storage("account"))?
        .ok_or_else(|| not_found("account", account_id))
}

/// Approves or rejects a company account.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the account does not exist and
/// `InvalidInput` if it is not a company. Neither changes any state.
pub fn set_company_approval(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    account_id: i64,
    approved: bool,
) -> Result<CompanyApprovalResponse, ApiError> {
    AuthorizationService::require_admin(actor, "set_company_approval")?;

    let account: AccountData = load_account(persistence, account_id)?;
    if account.role != Role::Company {
        warn!(account_id, role = %account.role, "Approval target is not a company");
        return Err(ApiError::InvalidInput {
            field: String::from("account_id"),
            message: String::from("Invalid user type."),
        });
    }

    persistence
        .set_account_approval(account_id, approved)
        .map_err(storage("account"))?;

    info!(account_id, approved, "Set company approval");

    let verb: &str = if approved { "approved" } else { "rejected" };
    Ok(CompanyApprovalResponse {
        account_id,
        message: format!("Company {} has been {verb}.", account.username),
        username: account.username,
        is_approved: approved,
    })
}

/// Flips an account's active flag.
///
/// Deactivating an account ends all of its sessions.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the account does not exist and `Rejected`
/// if the target is an administrator.
pub fn toggle_account_active(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    account_id: i64,
) -> Result<AccountStatusResponse, ApiError> {
    AuthorizationService::require_admin(actor, "toggle_account_active")?;

    let account: AccountData = load_account(persistence, account_id)?;
    if account.role == Role::Admin {
        warn!(account_id, "Refused to toggle an administrator");
        return Err(ApiError::Rejected {
            rule: String::from("admin_exempt_from_deactivation"),
            message: String::from("Cannot deactivate admin users."),
        });
    }

    let is_active: bool = persistence
        .toggle_account_active(account_id)
        .map_err(storage("account"))?;

    info!(account_id, is_active, "Toggled account activation");

    let next_view: &str = if account.role == Role::Company {
        "companies"
    } else {
        "students"
    };
    let verb: &str = if is_active { "activated" } else { "deactivated" };

    Ok(AccountStatusResponse {
        account_id,
        message: format!("User {} has been {verb}.", account.username),
        username: account.username,
        is_active,
        next_view: next_view.to_string(),
    })
}

/// Approves or rejects a drive. Unconditional once the drive exists.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the drive does not exist.
pub fn set_drive_approval(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    job_posting_id: i64,
    approved: bool,
) -> Result<DriveApprovalResponse, ApiError> {
    AuthorizationService::require_admin(actor, "set_drive_approval")?;

    let drive: DriveData = persistence
        .get_drive(job_posting_id)
        .map_err(storage("drive"))?
        .ok_or_else(|| not_found("drive", job_posting_id))?;

    persistence
        .set_drive_approval(job_posting_id, approved)
        .map_err(storage("drive"))?;

    info!(job_posting_id, approved, "Set drive approval");

    let verb: &str = if approved { "approved" } else { "rejected" };
    Ok(DriveApprovalResponse {
        job_posting_id,
        message: format!("Drive '{}' has been {verb}.", drive.title),
        title: drive.title,
        is_approved: approved,
    })
}

/// Lists companies, optionally filtered by name, industry or email.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the query fails.
pub fn search_companies(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    request: &SearchRequest,
) -> Result<CompaniesResponse, ApiError> {
    AuthorizationService::require_admin(actor, "search_companies")?;
    let term: Option<String> = normalize_search_term(request.search.as_deref());
    let companies: Vec<CompanySummary> = persistence
        .search_companies(term.as_deref())
        .map_err(storage("company"))?;
    Ok(CompaniesResponse { companies })
}

/// Lists students, optionally filtered by name, roll number, branch or email.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the query fails.
pub fn search_students(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    request: &SearchRequest,
) -> Result<StudentsResponse, ApiError> {
    AuthorizationService::require_admin(actor, "search_students")?;
    let term: Option<String> = normalize_search_term(request.search.as_deref());
    let students: Vec<StudentSummary> = persistence
        .search_students(term.as_deref())
        .map_err(storage("student"))?;
    Ok(StudentsResponse { students })
}

/// Lists every drive, optionally filtered by title, location or company name.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the query fails.
pub fn search_drives(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    request: &SearchRequest,
) -> Result<DriveListingsResponse, ApiError> {
    AuthorizationService::require_admin(actor, "search_drives")?;
    let term: Option<String> = normalize_search_term(request.search.as_deref());
    let drives: Vec<DriveListing> = persistence
        .search_drives(term.as_deref())
        .map_err(storage("drive"))?;
    Ok(DriveListingsResponse { drives })
}

/// Lists every application with its drive, company and student.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the query fails.
pub fn list_all_applications(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
) -> Result<AllApplicationsResponse, ApiError> {
    AuthorizationService::require_admin(actor, "list_all_applications")?;
    let applications: Vec<AdminApplicationView> = persistence
        .list_all_applications()
        .map_err(storage("application"))?;
    Ok(AllApplicationsResponse { applications })
}
