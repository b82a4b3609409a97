// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations of the placement portal.
//!
//! This crate sits between transport and storage. It authenticates
//! sessions, gates every operation on the actor's role and ownership, turns
//! requests into domain values, and calls the persistence layer.
//!
//! Handlers take the acting account explicitly as
//! `Option<&AuthenticatedActor>`; there is no ambient "current user".

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    ActorRole, AuthenticatedActor, AuthenticationService, AuthorizationService, IssuedSession,
};
pub use error::{
    ApiError, AuthError, INVALID_CREDENTIALS, not_found, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::accounts::{dashboard_path, login, logout, register, seed_admin, whoami};
pub use handlers::admin::{
    list_all_applications, search_companies, search_drives, search_students,
    set_company_approval, set_drive_approval, toggle_account_active,
};
pub use handlers::applications::{
    application_detail, apply, bulk_shortlist, my_applications, placement_history,
    update_application_status,
};
pub use handlers::dashboards::{admin_dashboard, company_dashboard, student_dashboard};
pub use handlers::drives::{
    browse_drives, create_drive, delete_drive, edit_drive, get_drive_detail,
    list_company_drives, list_drive_applications, toggle_drive_active,
};
pub use handlers::profiles::{
    get_company_profile, get_student_profile, upsert_company_profile, upsert_student_profile,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AccountInfo, AccountStatusResponse, AdminDashboardResponse, AllApplicationsResponse,
    ApplicationDetailResponse, ApplicationFilterRequest, ApplicationStatusResponse, ApplyRequest,
    ApplyResponse, BrowseRequest, BrowseResponse, BulkShortlistRequest, BulkShortlistResponse,
    CompaniesResponse, CompanyApprovalResponse, CompanyDashboardResponse, CompanyDrivesResponse,
    CompanyProfileResponse, DeleteDriveResponse, DriveApplicantsResponse, DriveApprovalResponse,
    DriveDetailResponse, DriveListingsResponse, DriveResponse, DriveStatusResponse, LoginRequest,
    LoginResponse, RegisterRequest, RegisterResponse, SearchRequest, StudentApplicationsResponse,
    StudentDashboardResponse, StudentProfileResponse, StudentsResponse, UpdateStatusRequest,
    WhoAmIResponse,
};
