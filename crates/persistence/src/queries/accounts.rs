// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session queries.

use std::str::FromStr;

use diesel::SqliteConnection;
use diesel::prelude::*;
use placement_domain::Role;
use tracing::debug;

use crate::data_models::{AccountData, SessionData};
use crate::diesel_schema::{accounts, sessions};
use crate::error::PersistenceError;

/// Diesel Queryable struct for account rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = accounts)]
pub(crate) struct AccountRow {
    pub account_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: i32,
    pub is_approved: i32,
    pub created_at: String,
}

impl AccountRow {
    pub(crate) fn into_data(self) -> Result<AccountData, PersistenceError> {
        let role: Role = Role::from_str(&self.role).map_err(|e| {
            PersistenceError::ReconstructionError(format!(
                "Account {} has an invalid role: {e}",
                self.account_id
            ))
        })?;

        Ok(AccountData {
            account_id: self.account_id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role,
            is_active: self.is_active != 0,
            is_approved: self.is_approved != 0,
            created_at: self.created_at,
        })
    }
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
struct SessionRow {
    session_id: i64,
    session_token: String,
    account_id: i64,
    created_at: String,
    last_activity_at: String,
    expires_at: String,
}

/// Retrieves an account by exact username.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no account has that username.
pub fn get_account_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!(username, "Looking up account by username");

    accounts::table
        .filter(accounts::username.eq(username))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?
        .map(AccountRow::into_data)
        .transpose()
}

/// Retrieves an account by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account does not exist.
pub fn get_account_by_id(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!(account_id, "Looking up account by ID");

    accounts::table
        .find(account_id)
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?
        .map(AccountRow::into_data)
        .transpose()
}

/// Returns true if an account already uses this username.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn username_exists(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<bool, PersistenceError> {
    let count: i64 = accounts::table
        .filter(accounts::username.eq(username))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Returns true if an account already uses this email.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn email_exists(conn: &mut SqliteConnection, email: &str) -> Result<bool, PersistenceError> {
    let count: i64 = accounts::table
        .filter(accounts::email.eq(email))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Verifies a password against a stored hash.
///
/// # Arguments
///
/// * `password` - The plain text password to verify
/// * `password_hash` - The stored bcrypt hash
///
/// # Errors
///
/// Returns an error if the hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::PasswordHashing(format!("Failed to verify password: {e}")))
}

/// Retrieves a session by token.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    let row: Option<SessionRow> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| SessionData {
        session_id: row.session_id,
        session_token: row.session_token,
        account_id: row.account_id,
        created_at: row.created_at,
        last_activity_at: row.last_activity_at,
        expires_at: row.expires_at,
    }))
}
