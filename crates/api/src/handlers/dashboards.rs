// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-scoped dashboards. Every count is recomputed on each call.

use placement_persistence::{
    AdminTotals, ApplicationView, CompanySummary, CompanyTotals, DriveData, DriveListing,
    Persistence, StudentTotals,
};
use time::Date;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::ApiError;
use crate::handlers::storage;
use crate::request_response::{
    AdminDashboardResponse, CompanyDashboardResponse, StudentDashboardResponse,
};

/// How many recent drives or applications a dashboard shows.
const RECENT_LIMIT: usize = 5;

/// Site-wide totals plus the companies and drives awaiting approval.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or a query fails.
pub fn admin_dashboard(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
) -> Result<AdminDashboardResponse, ApiError> {
    AuthorizationService::require_admin(actor, "admin_dashboard")?;

    let totals: AdminTotals = persistence.admin_totals().map_err(storage("dashboard"))?;

    let pending_companies: Vec<CompanySummary> = persistence
        .search_companies(None)
        .map_err(storage("company"))?
        .into_iter()
        .filter(|company| !company.is_approved)
        .collect();

    let pending_drives: Vec<DriveListing> = persistence
        .search_drives(None)
        .map_err(storage("drive"))?
        .into_iter()
        .filter(|listing| !listing.drive.is_approved)
        .collect();

    Ok(AdminDashboardResponse {
        totals,
        pending_companies,
        pending_drives,
    })
}

/// Totals over the acting company's drives and their applications.
///
/// # Errors
///
/// Returns an error if the actor is not a company or a query fails.
pub fn company_dashboard(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
) -> Result<CompanyDashboardResponse, ApiError> {
    let (actor, profile) = AuthorizationService::require_company(actor, "company_dashboard")?;

    let (totals, recent_drives): (CompanyTotals, Vec<DriveData>) = match profile {
        Some(profile) => {
            let totals: CompanyTotals = persistence
                .company_totals(profile.company_profile_id)
                .map_err(storage("dashboard"))?;
            let mut drives: Vec<DriveData> = persistence
                .list_drives_for_company(profile.company_profile_id)
                .map_err(storage("drive"))?;
            drives.truncate(RECENT_LIMIT);
            (totals, drives)
        }
        None => (CompanyTotals::default(), Vec::new()),
    };

    Ok(CompanyDashboardResponse {
        profile: profile.cloned(),
        is_approved: actor.account.is_approved,
        totals,
        recent_drives,
    })
}

/// Totals over the acting student's applications and the open drives.
///
/// # Errors
///
/// Returns an error if the actor is not a student or a query fails.
pub fn student_dashboard(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    today: Date,
) -> Result<StudentDashboardResponse, ApiError> {
    let (actor, profile) = AuthorizationService::require_student(actor, "student_dashboard")?;

    let totals: StudentTotals = persistence
        .student_totals(actor.account_id(), today)
        .map_err(storage("dashboard"))?;

    let mut recent_applications: Vec<ApplicationView> = persistence
        .list_applications_for_student(actor.account_id(), None)
        .map_err(storage("application"))?;
    recent_applications.truncate(RECENT_LIMIT);

    Ok(StudentDashboardResponse {
        profile: profile.cloned(),
        totals,
        recent_applications,
    })
}
