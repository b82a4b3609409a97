// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use placement_domain::Role;
use placement_persistence::{
    AccountData, AdminApplicationView, AdminTotals, ApplicantView, ApplicationData,
    ApplicationView, CompanyProfileData, CompanySummary, CompanyTotals, DriveData, DriveListing,
    StudentProfileData, StudentSummary, StudentTotals,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Accounts and sessions
// ============================================================================

/// API request to register a student or company account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// `student` or `company`.
    pub role: String,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub account_id: i64,
    pub username: String,
    pub role: Role,
    /// Companies start unapproved.
    pub is_approved: bool,
    pub message: String,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub is_approved: bool,
    pub created_at: String,
}

impl From<&AccountData> for AccountInfo {
    fn from(account: &AccountData) -> Self {
        Self {
            account_id: account.account_id,
            username: account.username.clone(),
            email: account.email.clone(),
            role: account.role,
            is_active: account.is_active,
            is_approved: account.is_approved,
            created_at: account.created_at.clone(),
        }
    }
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub expires_at: String,
    pub account: AccountInfo,
    /// Where the actor lands after login.
    pub dashboard: String,
    pub message: String,
}

/// API response describing the current actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    pub account: AccountInfo,
    pub has_profile: bool,
}

// ============================================================================
// Admin
// ============================================================================

/// Free-text search over an admin list. Blank means "everything".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub search: Option<String>,
}

/// API response for a company approval decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyApprovalResponse {
    pub account_id: i64,
    pub username: String,
    pub is_approved: bool,
    pub message: String,
}

/// API response for an account activation toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatusResponse {
    pub account_id: i64,
    pub username: String,
    pub is_active: bool,
    /// The admin list to return to: `companies` or `students`.
    pub next_view: String,
    pub message: String,
}

/// API response for a drive approval decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveApprovalResponse {
    pub job_posting_id: i64,
    pub title: String,
    pub is_approved: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentsResponse {
    pub students: Vec<StudentSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveListingsResponse {
    pub drives: Vec<DriveListing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllApplicationsResponse {
    pub applications: Vec<AdminApplicationView>,
}

/// API response for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDashboardResponse {
    pub totals: AdminTotals,
    /// Companies waiting for approval, oldest first.
    pub pending_companies: Vec<CompanySummary>,
    /// Drives waiting for approval.
    pub pending_drives: Vec<DriveListing>,
}

// ============================================================================
// Profiles
// ============================================================================

/// API response carrying a student profile, if one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfileResponse {
    pub profile: Option<StudentProfileData>,
    pub message: String,
}

/// API response carrying a company profile, if one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfileResponse {
    pub profile: Option<CompanyProfileData>,
    pub message: String,
}

// ============================================================================
// Drives
// ============================================================================

/// API response for a created or edited drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveResponse {
    pub drive: DriveData,
    pub message: String,
}

/// API response for a drive activation toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveStatusResponse {
    pub job_posting_id: i64,
    pub is_active: bool,
    pub message: String,
}

/// API response for a deleted drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDriveResponse {
    pub job_posting_id: i64,
    /// Applications removed along with the drive.
    pub removed_applications: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDrivesResponse {
    pub drives: Vec<DriveData>,
}

/// API response listing the applicants of one drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveApplicantsResponse {
    pub drive: DriveData,
    pub applicants: Vec<ApplicantView>,
}

/// Student drive browsing filters. Blank values mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseRequest {
    pub search: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
}

/// API response for student drive browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseResponse {
    pub drives: Vec<DriveListing>,
    /// Drives the student has already applied to.
    pub applied_drive_ids: Vec<i64>,
}

/// API response for one drive as seen by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveDetailResponse {
    pub listing: DriveListing,
    pub already_applied: bool,
}

// ============================================================================
// Applications
// ============================================================================

/// API request to apply to a drive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyRequest {
    pub cover_letter: Option<String>,
}

/// API response for a submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub application: ApplicationData,
    pub message: String,
}

/// API request to change an application's status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// API response for a status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStatusResponse {
    pub application: ApplicationData,
    pub message: String,
}

/// API request to shortlist several applications of one drive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkShortlistRequest {
    pub application_ids: Vec<i64>,
}

/// API response for a bulk shortlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkShortlistResponse {
    pub job_posting_id: i64,
    /// Applications that were updated. IDs from other drives are skipped.
    pub updated: usize,
    pub message: String,
}

/// Optional status filter for a student's applications.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationFilterRequest {
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentApplicationsResponse {
    pub applications: Vec<ApplicationView>,
}

/// API response for one of a student's applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDetailResponse {
    pub application: ApplicationData,
    pub listing: DriveListing,
}

// ============================================================================
// Dashboards
// ============================================================================

/// API response for the company dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDashboardResponse {
    pub profile: Option<CompanyProfileData>,
    pub is_approved: bool,
    /// Zeroed until the company has a profile.
    pub totals: CompanyTotals,
    pub recent_drives: Vec<DriveData>,
}

/// API response for the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDashboardResponse {
    pub profile: Option<StudentProfileData>,
    pub totals: StudentTotals,
    pub recent_applications: Vec<ApplicationView>,
}
