// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the placement portal.
//!
//! This crate stores accounts, sessions, profiles, drives and applications in
//! `SQLite` through Diesel. Migrations are embedded and run when a
//! `Persistence` is constructed.
//!
//! ## Layout
//!
//! - `backend`: connection setup, PRAGMAs and migrations
//! - `queries`: read-only Diesel queries
//! - `mutations`: state-changing Diesel statements and transactions
//!
//! `Persistence` is the single entry point and owns the connection.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller its own shared-cache
//! in-memory database, so tests never observe each other's rows. Combine it
//! with `with_password_cost(MIN_PASSWORD_COST)` to keep bcrypt fast.

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

use diesel::SqliteConnection;
use placement_domain::{
    ApplicationStatus, CompanyProfileFields, Role, StudentProfileFields, ValidatedDrive,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    AccountData, AdminApplicationView, AdminTotals, ApplicantView, ApplicationData,
    ApplicationView, BrowseFilter, CompanyProfileData, CompanySummary, CompanyTotals, DriveData,
    DriveListing, SessionData, StatusCounts, StudentProfileData, StudentSummary, StudentTotals,
};
pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Default bcrypt cost for stored password hashes.
pub const DEFAULT_PASSWORD_COST: u32 = bcrypt::DEFAULT_COST;

/// Lowest bcrypt cost accepted. Intended for tests.
pub const MIN_PASSWORD_COST: u32 = 4;

/// Persistence adapter for the placement portal.
pub struct Persistence {
    conn: SqliteConnection,
    password_cost: u32,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_portal_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self {
            conn,
            password_cost: DEFAULT_PASSWORD_COST,
        })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::configure_file_database(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self {
            conn,
            password_cost: DEFAULT_PASSWORD_COST,
        })
    }

    /// Sets the bcrypt cost used for new password hashes.
    #[must_use]
    pub const fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Creates an account, hashing the password. Returns the new account ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the username or email is taken.
    pub fn create_account(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
        is_approved: bool,
    ) -> Result<i64, PersistenceError> {
        mutations::accounts::create_account(
            &mut self.conn,
            username,
            email,
            password,
            role,
            is_approved,
            self.password_cost,
        )
    }

    /// Retrieves an account by exact username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_account_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_username(&mut self.conn, username)
    }

    /// Retrieves an account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_account_by_id(
        &mut self,
        account_id: i64,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_id(&mut self.conn, account_id)
    }

    /// Returns true if the username is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn username_exists(&mut self, username: &str) -> Result<bool, PersistenceError> {
        queries::accounts::username_exists(&mut self.conn, username)
    }

    /// Returns true if the email is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn email_exists(&mut self, email: &str) -> Result<bool, PersistenceError> {
        queries::accounts::email_exists(&mut self.conn, email)
    }

    /// Verifies a password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash cannot be parsed.
    pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
        queries::accounts::verify_password(password, password_hash)
    }

    /// Sets the approval flag on an account.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the account does not exist.
    pub fn set_account_approval(
        &mut self,
        account_id: i64,
        approved: bool,
    ) -> Result<(), PersistenceError> {
        mutations::accounts::set_account_approval(&mut self.conn, account_id, approved)
    }

    /// Flips an account's active flag, returning the new value.
    ///
    /// Deactivation deletes the account's sessions.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the account does not exist.
    pub fn toggle_account_active(&mut self, account_id: i64) -> Result<bool, PersistenceError> {
        mutations::accounts::toggle_account_active(&mut self.conn, account_id)
    }

    // ========================================================================
    // Session Management
    // ========================================================================

    /// Creates a new session for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        account_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::accounts::create_session(&mut self.conn, session_token, account_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::accounts::get_session_by_token(&mut self.conn, session_token)
    }

    /// Updates the last activity timestamp for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::accounts::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::accounts::delete_session(&mut self.conn, session_token)
    }

    // ========================================================================
    // Profiles
    // ========================================================================

    /// Retrieves the student profile owned by an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_student_profile(
        &mut self,
        account_id: i64,
    ) -> Result<Option<StudentProfileData>, PersistenceError> {
        queries::profiles::get_student_profile_by_account(&mut self.conn, account_id)
    }

    /// Retrieves the company profile owned by an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_company_profile(
        &mut self,
        account_id: i64,
    ) -> Result<Option<CompanyProfileData>, PersistenceError> {
        queries::profiles::get_company_profile_by_account(&mut self.conn, account_id)
    }

    /// Returns true if another account's student profile uses the roll number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn roll_number_taken(
        &mut self,
        roll_number: &str,
        account_id: i64,
    ) -> Result<bool, PersistenceError> {
        queries::profiles::roll_number_taken(&mut self.conn, roll_number, account_id)
    }

    /// Creates or replaces an account's student profile.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the roll number is taken.
    pub fn upsert_student_profile(
        &mut self,
        account_id: i64,
        fields: &StudentProfileFields,
    ) -> Result<i64, PersistenceError> {
        mutations::profiles::upsert_student_profile(&mut self.conn, account_id, fields)
    }

    /// Creates or replaces an account's company profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub fn upsert_company_profile(
        &mut self,
        account_id: i64,
        fields: &CompanyProfileFields,
    ) -> Result<i64, PersistenceError> {
        mutations::profiles::upsert_company_profile(&mut self.conn, account_id, fields)
    }

    // ========================================================================
    // Drives
    // ========================================================================

    /// Inserts an active, unapproved drive.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_drive(
        &mut self,
        company_profile_id: i64,
        drive: &ValidatedDrive,
    ) -> Result<i64, PersistenceError> {
        mutations::drives::insert_drive(&mut self.conn, company_profile_id, drive)
    }

    /// Replaces a drive's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the drive does not exist.
    pub fn update_drive(
        &mut self,
        job_posting_id: i64,
        drive: &ValidatedDrive,
    ) -> Result<(), PersistenceError> {
        mutations::drives::update_drive(&mut self.conn, job_posting_id, drive)
    }

    /// Sets a drive's approval flag.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the drive does not exist.
    pub fn set_drive_approval(
        &mut self,
        job_posting_id: i64,
        approved: bool,
    ) -> Result<(), PersistenceError> {
        mutations::drives::set_drive_approval(&mut self.conn, job_posting_id, approved)
    }

    /// Flips a drive's active flag, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the drive does not exist.
    pub fn toggle_drive_active(&mut self, job_posting_id: i64) -> Result<bool, PersistenceError> {
        mutations::drives::toggle_drive_active(&mut self.conn, job_posting_id)
    }

    /// Deletes a drive and its applications, returning how many applications went with it.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the drive does not exist.
    pub fn delete_drive(&mut self, job_posting_id: i64) -> Result<usize, PersistenceError> {
        mutations::drives::delete_drive(&mut self.conn, job_posting_id)
    }

    /// Retrieves a drive by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_drive(
        &mut self,
        job_posting_id: i64,
    ) -> Result<Option<DriveData>, PersistenceError> {
        queries::drives::get_drive(&mut self.conn, job_posting_id)
    }

    /// Retrieves a drive with its company name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_drive_listing(
        &mut self,
        job_posting_id: i64,
    ) -> Result<Option<DriveListing>, PersistenceError> {
        queries::drives::get_drive_listing(&mut self.conn, job_posting_id)
    }

    /// Lists a company's drives, newest posting first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_drives_for_company(
        &mut self,
        company_profile_id: i64,
    ) -> Result<Vec<DriveData>, PersistenceError> {
        queries::drives::list_drives_for_company(&mut self.conn, company_profile_id)
    }

    /// Lists drives visible to students on `today`, narrowed by `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn browse_drives(
        &mut self,
        filter: &BrowseFilter,
        today: Date,
    ) -> Result<Vec<DriveListing>, PersistenceError> {
        queries::drives::browse_drives(&mut self.conn, filter, today)
    }

    // ========================================================================
    // Applications
    // ========================================================================

    /// Creates a pending application.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the student already applied.
    pub fn create_application(
        &mut self,
        job_posting_id: i64,
        account_id: i64,
        cover_letter: Option<&str>,
    ) -> Result<i64, PersistenceError> {
        mutations::applications::create_application(
            &mut self.conn,
            job_posting_id,
            account_id,
            cover_letter,
        )
    }

    /// Retrieves an application by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_application(
        &mut self,
        application_id: i64,
    ) -> Result<Option<ApplicationData>, PersistenceError> {
        queries::applications::get_application(&mut self.conn, application_id)
    }

    /// Overwrites an application's status.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the application does not exist.
    pub fn update_application_status(
        &mut self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<(), PersistenceError> {
        mutations::applications::update_application_status(&mut self.conn, application_id, status)
    }

    /// Shortlists the given applications of one drive, returning the count updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn bulk_shortlist(
        &mut self,
        job_posting_id: i64,
        application_ids: &[i64],
    ) -> Result<usize, PersistenceError> {
        mutations::applications::bulk_shortlist(&mut self.conn, job_posting_id, application_ids)
    }

    /// Lists a student's applications, optionally narrowed to one status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_applications_for_student(
        &mut self,
        account_id: i64,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationView>, PersistenceError> {
        queries::applications::list_applications_for_student(&mut self.conn, account_id, status)
    }

    /// Returns the IDs of every drive the student applied to.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn applied_drive_ids(&mut self, account_id: i64) -> Result<Vec<i64>, PersistenceError> {
        queries::applications::applied_drive_ids(&mut self.conn, account_id)
    }

    /// Returns true if the student already applied to the drive.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn application_exists(
        &mut self,
        job_posting_id: i64,
        account_id: i64,
    ) -> Result<bool, PersistenceError> {
        queries::applications::application_exists(&mut self.conn, job_posting_id, account_id)
    }

    /// Lists the applicants of a drive.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_applicants_for_drive(
        &mut self,
        job_posting_id: i64,
    ) -> Result<Vec<ApplicantView>, PersistenceError> {
        queries::applications::list_applicants_for_drive(&mut self.conn, job_posting_id)
    }

    /// Lists every application.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_all_applications(&mut self) -> Result<Vec<AdminApplicationView>, PersistenceError> {
        queries::applications::list_all_applications(&mut self.conn)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Searches companies by name, industry and email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn search_companies(
        &mut self,
        term: Option<&str>,
    ) -> Result<Vec<CompanySummary>, PersistenceError> {
        queries::search::search_companies(&mut self.conn, term)
    }

    /// Searches students by name, roll number, branch and email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn search_students(
        &mut self,
        term: Option<&str>,
    ) -> Result<Vec<StudentSummary>, PersistenceError> {
        queries::search::search_students(&mut self.conn, term)
    }

    /// Searches drives by title, location and company name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn search_drives(
        &mut self,
        term: Option<&str>,
    ) -> Result<Vec<DriveListing>, PersistenceError> {
        queries::search::search_drives(&mut self.conn, term)
    }

    // ========================================================================
    // Dashboards
    // ========================================================================

    /// Computes the admin dashboard totals.
    ///
    /// # Errors
    ///
    /// Returns an error if any count query fails.
    pub fn admin_totals(&mut self) -> Result<AdminTotals, PersistenceError> {
        queries::dashboards::admin_totals(&mut self.conn)
    }

    /// Computes the dashboard totals of one company.
    ///
    /// # Errors
    ///
    /// Returns an error if any count query fails.
    pub fn company_totals(
        &mut self,
        company_profile_id: i64,
    ) -> Result<CompanyTotals, PersistenceError> {
        queries::dashboards::company_totals(&mut self.conn, company_profile_id)
    }

    /// Computes the dashboard totals of one student.
    ///
    /// # Errors
    ///
    /// Returns an error if any count query fails.
    pub fn student_totals(
        &mut self,
        account_id: i64,
        today: Date,
    ) -> Result<StudentTotals, PersistenceError> {
        queries::dashboards::student_totals(&mut self.conn, account_id, today)
    }
}
