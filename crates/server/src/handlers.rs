// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP handlers. Each one locks the persistence layer, calls one API
//! operation with the session's actor, and serializes the result.

use axum::{
    Json,
    extract::{Path, Query, State as AxumState},
};
use placement_api::{
    AccountStatusResponse, AdminDashboardResponse, AllApplicationsResponse,
    ApplicationDetailResponse, ApplicationFilterRequest, ApplicationStatusResponse, ApplyRequest,
    ApplyResponse, BrowseRequest, BrowseResponse, BulkShortlistRequest, BulkShortlistResponse,
    CompaniesResponse, CompanyApprovalResponse, CompanyDashboardResponse, CompanyDrivesResponse,
    CompanyProfileResponse, DeleteDriveResponse, DriveApplicantsResponse, DriveApprovalResponse,
    DriveDetailResponse, DriveListingsResponse, DriveResponse, DriveStatusResponse, LoginRequest,
    LoginResponse, RegisterRequest, RegisterResponse, SearchRequest, StudentApplicationsResponse,
    StudentDashboardResponse, StudentProfileResponse, StudentsResponse, UpdateStatusRequest,
    WhoAmIResponse,
};
use placement_domain::{CompanyProfileFields, DriveFields, StudentProfileFields};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::AppState;
use crate::error::HttpError;
use crate::session::Session;

/// Response for operations that only report a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// A human-readable message.
    pub message: String,
}

/// Today's date in UTC, for deadline checks.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

// ============================================================================
// Accounts and sessions
// ============================================================================

/// Handler for POST `/auth/register`.
pub async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, HttpError> {
    info!(username = %req.username, role = %req.role, "Handling register request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::register(&mut persistence, &req)?))
}

/// Handler for POST `/auth/login`.
pub async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %req.username, "Handling login request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::login(&mut persistence, &req)?))
}

/// Handler for POST `/auth/logout`.
pub async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<MessageResponse>, HttpError> {
    if let Some(token) = &session.token {
        let mut persistence = app_state.persistence.lock().await;
        placement_api::logout(&mut persistence, token)?;
    }
    Ok(Json(MessageResponse {
        message: String::from("You have been logged out."),
    }))
}

/// Handler for GET `/auth/whoami`.
#[allow(clippy::unused_async)]
pub async fn handle_whoami(session: Session) -> Result<Json<WhoAmIResponse>, HttpError> {
    Ok(Json(placement_api::whoami(session.actor.as_ref())?))
}

// ============================================================================
// Admin
// ============================================================================

/// Handler for GET `/admin/dashboard`.
pub async fn handle_admin_dashboard(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<AdminDashboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::admin_dashboard(
        &mut persistence,
        session.actor.as_ref(),
    )?))
}

/// Handler for GET `/admin/companies`.
pub async fn handle_search_companies(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Query(query): Query<SearchRequest>,
) -> Result<Json<CompaniesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::search_companies(
        &mut persistence,
        session.actor.as_ref(),
        &query,
    )?))
}

/// Handler for GET `/admin/students`.
pub async fn handle_search_students(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Query(query): Query<SearchRequest>,
) -> Result<Json<StudentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::search_students(
        &mut persistence,
        session.actor.as_ref(),
        &query,
    )?))
}

/// Handler for GET `/admin/drives`.
pub async fn handle_search_drives(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Query(query): Query<SearchRequest>,
) -> Result<Json<DriveListingsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::search_drives(
        &mut persistence,
        session.actor.as_ref(),
        &query,
    )?))
}

/// Handler for GET `/admin/applications`.
pub async fn handle_list_all_applications(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<AllApplicationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::list_all_applications(
        &mut persistence,
        session.actor.as_ref(),
    )?))
}

async fn company_approval(
    app_state: &AppState,
    session: &Session,
    account_id: i64,
    approved: bool,
) -> Result<Json<CompanyApprovalResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::set_company_approval(
        &mut persistence,
        session.actor.as_ref(),
        account_id,
        approved,
    )?))
}

/// Handler for POST `/admin/companies/{account_id}/approve`.
pub async fn handle_approve_company(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(account_id): Path<i64>,
) -> Result<Json<CompanyApprovalResponse>, HttpError> {
    company_approval(&app_state, &session, account_id, true).await
}

/// Handler for POST `/admin/companies/{account_id}/reject`.
pub async fn handle_reject_company(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(account_id): Path<i64>,
) -> Result<Json<CompanyApprovalResponse>, HttpError> {
    company_approval(&app_state, &session, account_id, false).await
}

async fn drive_approval(
    app_state: &AppState,
    session: &Session,
    drive_id: i64,
    approved: bool,
) -> Result<Json<DriveApprovalResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::set_drive_approval(
        &mut persistence,
        session.actor.as_ref(),
        drive_id,
        approved,
    )?))
}

/// Handler for POST `/admin/drives/{drive_id}/approve`.
pub async fn handle_approve_drive(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
) -> Result<Json<DriveApprovalResponse>, HttpError> {
    drive_approval(&app_state, &session, drive_id, true).await
}

/// Handler for POST `/admin/drives/{drive_id}/reject`.
pub async fn handle_reject_drive(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
) -> Result<Json<DriveApprovalResponse>, HttpError> {
    drive_approval(&app_state, &session, drive_id, false).await
}

/// Handler for POST `/admin/accounts/{account_id}/toggle_active`.
pub async fn handle_toggle_account_active(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(account_id): Path<i64>,
) -> Result<Json<AccountStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::toggle_account_active(
        &mut persistence,
        session.actor.as_ref(),
        account_id,
    )?))
}

// ============================================================================
// Company
// ============================================================================

/// Handler for GET `/company/profile`.
pub async fn handle_get_company_profile(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<CompanyProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::get_company_profile(
        &mut persistence,
        session.actor.as_ref(),
    )?))
}

/// Handler for PUT `/company/profile`.
pub async fn handle_put_company_profile(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Json(req): Json<CompanyProfileFields>,
) -> Result<Json<CompanyProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::upsert_company_profile(
        &mut persistence,
        session.actor.as_ref(),
        &req,
    )?))
}

/// Handler for GET `/company/dashboard`.
pub async fn handle_company_dashboard(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<CompanyDashboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::company_dashboard(
        &mut persistence,
        session.actor.as_ref(),
    )?))
}

/// Handler for GET `/company/drives`.
pub async fn handle_list_company_drives(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<CompanyDrivesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::list_company_drives(
        &mut persistence,
        session.actor.as_ref(),
    )?))
}

/// Handler for POST `/company/drives`.
pub async fn handle_create_drive(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Json(req): Json<DriveFields>,
) -> Result<Json<DriveResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::create_drive(
        &mut persistence,
        session.actor.as_ref(),
        &req,
        today(),
    )?))
}

/// Handler for PUT `/company/drives/{drive_id}`.
pub async fn handle_edit_drive(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
    Json(req): Json<DriveFields>,
) -> Result<Json<DriveResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::edit_drive(
        &mut persistence,
        session.actor.as_ref(),
        drive_id,
        &req,
        today(),
    )?))
}

/// Handler for DELETE `/company/drives/{drive_id}`.
pub async fn handle_delete_drive(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
) -> Result<Json<DeleteDriveResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::delete_drive(
        &mut persistence,
        session.actor.as_ref(),
        drive_id,
    )?))
}

/// Handler for POST `/company/drives/{drive_id}/toggle_active`.
pub async fn handle_toggle_drive_active(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
) -> Result<Json<DriveStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::toggle_drive_active(
        &mut persistence,
        session.actor.as_ref(),
        drive_id,
    )?))
}

/// Handler for GET `/company/drives/{drive_id}/applications`.
pub async fn handle_list_drive_applications(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
) -> Result<Json<DriveApplicantsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::list_drive_applications(
        &mut persistence,
        session.actor.as_ref(),
        drive_id,
    )?))
}

/// Handler for POST `/company/drives/{drive_id}/shortlist`.
pub async fn handle_bulk_shortlist(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
    Json(req): Json<BulkShortlistRequest>,
) -> Result<Json<BulkShortlistResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::bulk_shortlist(
        &mut persistence,
        session.actor.as_ref(),
        drive_id,
        &req,
    )?))
}

/// Handler for POST `/company/applications/{application_id}/status`.
pub async fn handle_update_application_status(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(application_id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApplicationStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::update_application_status(
        &mut persistence,
        session.actor.as_ref(),
        application_id,
        &req,
    )?))
}

// ============================================================================
// Student
// ============================================================================

/// Handler for GET `/student/profile`.
pub async fn handle_get_student_profile(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<StudentProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::get_student_profile(
        &mut persistence,
        session.actor.as_ref(),
    )?))
}

/// Handler for PUT `/student/profile`.
pub async fn handle_put_student_profile(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Json(req): Json<StudentProfileFields>,
) -> Result<Json<StudentProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::upsert_student_profile(
        &mut persistence,
        session.actor.as_ref(),
        &req,
    )?))
}

/// Handler for GET `/student/dashboard`.
pub async fn handle_student_dashboard(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<StudentDashboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::student_dashboard(
        &mut persistence,
        session.actor.as_ref(),
        today(),
    )?))
}

/// Handler for GET `/student/drives`.
pub async fn handle_browse_drives(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Query(query): Query<BrowseRequest>,
) -> Result<Json<BrowseResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::browse_drives(
        &mut persistence,
        session.actor.as_ref(),
        &query,
        today(),
    )?))
}

/// Handler for GET `/student/drives/{drive_id}`.
pub async fn handle_drive_detail(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
) -> Result<Json<DriveDetailResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::get_drive_detail(
        &mut persistence,
        session.actor.as_ref(),
        drive_id,
        today(),
    )?))
}

/// Handler for POST `/student/drives/{drive_id}/apply`.
pub async fn handle_apply(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(drive_id): Path<i64>,
    Json(req): Json<ApplyRequest>,
) -> Result<Json<ApplyResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::apply(
        &mut persistence,
        session.actor.as_ref(),
        drive_id,
        &req,
        today(),
    )?))
}

/// Handler for GET `/student/applications`.
pub async fn handle_my_applications(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Query(query): Query<ApplicationFilterRequest>,
) -> Result<Json<StudentApplicationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::my_applications(
        &mut persistence,
        session.actor.as_ref(),
        &query,
    )?))
}

/// Handler for GET `/student/applications/{application_id}`.
pub async fn handle_application_detail(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
    Path(application_id): Path<i64>,
) -> Result<Json<ApplicationDetailResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::application_detail(
        &mut persistence,
        session.actor.as_ref(),
        application_id,
    )?))
}

/// Handler for GET `/student/history`.
pub async fn handle_placement_history(
    AxumState(app_state): AxumState<AppState>,
    session: Session,
) -> Result<Json<StudentApplicationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(placement_api::placement_history(
        &mut persistence,
        session.actor.as_ref(),
    )?))
}
