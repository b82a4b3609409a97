// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use placement_domain::{ApplicationStatus, Role};
use serde::{Deserialize, Serialize};
use time::Date;

/// A stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub account_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub is_approved: bool,
    pub created_at: String,
}

/// A stored login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub account_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// A stored student profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfileData {
    pub student_profile_id: i64,
    pub account_id: i64,
    pub full_name: String,
    pub roll_number: String,
    pub branch: String,
    pub cgpa: f64,
    pub phone: Option<String>,
    pub resume_path: Option<String>,
}

/// A stored company profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfileData {
    pub company_profile_id: i64,
    pub account_id: i64,
    pub company_name: String,
    pub industry: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// A stored drive (job posting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveData {
    pub job_posting_id: i64,
    pub company_profile_id: i64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    pub location: String,
    pub job_type: String,
    pub posted_at: String,
    pub deadline: Date,
    pub is_active: bool,
    pub is_approved: bool,
}

/// A drive joined with the name of the company that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveListing {
    pub drive: DriveData,
    pub company_name: String,
}

/// A stored application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationData {
    pub application_id: i64,
    pub job_posting_id: i64,
    pub account_id: i64,
    pub status: ApplicationStatus,
    pub applied_at: String,
    pub cover_letter: Option<String>,
}

/// An application as seen by the student who submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationView {
    pub application: ApplicationData,
    pub drive_title: String,
    pub company_name: String,
}

/// An application as seen by the company that owns the drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantView {
    pub application: ApplicationData,
    pub username: String,
    pub email: String,
    pub profile: Option<StudentProfileData>,
}

/// An application as seen by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminApplicationView {
    pub application: ApplicationData,
    pub drive_title: String,
    pub company_name: String,
    pub student_username: String,
}

/// A company profile with its owning account's public fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub profile: CompanyProfileData,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub is_approved: bool,
}

/// A student profile with its owning account's public fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub profile: StudentProfileData,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

/// Application counts broken out by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: i64,
    pub reviewed: i64,
    pub shortlisted: i64,
    pub rejected: i64,
    pub accepted: i64,
}

impl StatusCounts {
    /// Adds `count` to the bucket for `status`.
    pub const fn add(&mut self, status: ApplicationStatus, count: i64) {
        match status {
            ApplicationStatus::Pending => self.pending += count,
            ApplicationStatus::Reviewed => self.reviewed += count,
            ApplicationStatus::Shortlisted => self.shortlisted += count,
            ApplicationStatus::Rejected => self.rejected += count,
            ApplicationStatus::Accepted => self.accepted += count,
        }
    }

    /// Sum over every status.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.pending + self.reviewed + self.shortlisted + self.rejected + self.accepted
    }
}

/// Site-wide totals shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminTotals {
    pub total_accounts: i64,
    pub total_students: i64,
    pub total_companies: i64,
    pub approved_companies: i64,
    pub pending_companies: i64,
    pub total_drives: i64,
    pub approved_drives: i64,
    pub pending_drives: i64,
    pub applications: StatusCounts,
}

/// Totals scoped to one company's drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyTotals {
    pub total_drives: i64,
    pub active_drives: i64,
    pub approved_drives: i64,
    pub applications: StatusCounts,
}

/// Totals scoped to one student's applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentTotals {
    pub visible_drives: i64,
    pub applications: StatusCounts,
}

/// Optional filters for the student drive browser. All present filters are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseFilter {
    /// Matched against title, description and company name.
    pub term: Option<String>,
    /// Exact job type.
    pub job_type: Option<String>,
    /// Substring of the location.
    pub location: Option<String>,
}
