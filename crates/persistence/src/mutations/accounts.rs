// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use placement_domain::Role;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{accounts, sessions};
use crate::error::PersistenceError;

/// Creates a new account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The unique username
/// * `email` - The unique email address
/// * `password` - The plain-text password (will be hashed)
/// * `role` - The fixed role of the account
/// * `is_approved` - The initial approval flag
/// * `password_cost` - The bcrypt cost factor
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the username or email is
/// taken, or another error if hashing or the insert fails.
pub fn create_account(
    conn: &mut SqliteConnection,
    username: &str,
    email: &str,
    password: &str,
    role: Role,
    is_approved: bool,
    password_cost: u32,
) -> Result<i64, PersistenceError> {
    info!(username, email, role = %role, "Creating account");

    let password_hash: String = bcrypt::hash(password, password_cost)?;

    diesel::insert_into(accounts::table)
        .values((
            accounts::username.eq(username),
            accounts::email.eq(email),
            accounts::password_hash.eq(&password_hash),
            accounts::role.eq(role.as_str()),
            accounts::is_approved.eq(i32::from(is_approved)),
        ))
        .execute(conn)?;

    let account_id: i64 = conn.get_last_insert_rowid()?;

    info!(account_id, "Account created");
    Ok(account_id)
}

/// Sets the approval flag on an account.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the account does not exist.
pub fn set_account_approval(
    conn: &mut SqliteConnection,
    account_id: i64,
    approved: bool,
) -> Result<(), PersistenceError> {
    info!(account_id, approved, "Setting account approval");

    let rows_affected: usize = diesel::update(accounts::table.find(account_id))
        .set(accounts::is_approved.eq(i32::from(approved)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Account {account_id} not found"
        )));
    }
    Ok(())
}

/// Flips the active flag on an account and returns the new value.
///
/// Deactivating an account also deletes all of its sessions, in the same
/// transaction.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the account does not exist.
pub fn toggle_account_active(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<bool, PersistenceError> {
    conn.transaction(|conn| {
        let current: i32 = accounts::table
            .find(account_id)
            .select(accounts::is_active)
            .first(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::NotFound(format!("Account {account_id} not found")))?;

        let now_active: bool = current == 0;

        diesel::update(accounts::table.find(account_id))
            .set(accounts::is_active.eq(i32::from(now_active)))
            .execute(conn)?;

        if !now_active {
            let removed: usize =
                diesel::delete(sessions::table.filter(sessions::account_id.eq(account_id)))
                    .execute(conn)?;
            debug!(account_id, removed, "Deleted sessions of deactivated account");
        }

        info!(account_id, now_active, "Toggled account active flag");
        Ok(now_active)
    })
}

/// Creates a new session.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The unique session token
/// * `account_id` - The account the session belongs to
/// * `expires_at` - The expiration timestamp (ISO 8601 format)
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    account_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::account_id.eq(account_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = conn.get_last_insert_rowid()?;

    debug!(session_id, account_id, expires_at, "Session created");
    Ok(session_id)
}

/// Updates the last activity timestamp for a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), PersistenceError> {
    diesel::update(sessions::table.find(session_id))
        .set(sessions::last_activity_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
            "CURRENT_TIMESTAMP",
        )))
        .execute(conn)?;
    Ok(())
}

/// Deletes a session by token. Deleting an unknown token is not an error.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    let removed: usize =
        diesel::delete(sessions::table.filter(sessions::session_token.eq(session_token)))
            .execute(conn)?;
    debug!(removed, "Deleted session");
    Ok(())
}
