// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup.
//!
//! Only PRAGMAs, migrations and `last_insert_rowid()` live here. Everything
//! the portal stores or reads goes through the Diesel DSL elsewhere.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds a writer waits on a locked file database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Runs one PRAGMA statement. Diesel has no DSL for these.
fn pragma(conn: &mut SqliteConnection, statement: &str) -> Result<(), PersistenceError> {
    diesel::sql_query(statement)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("{statement}: {e}")))?;
    Ok(())
}

/// Returns the row ID assigned by the latest insert on `conn`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Checks that `PRAGMA foreign_keys` is on.
///
/// Ownership cascades (drive removal, profile links) depend on it.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyEnforcementNotEnabled` if it is off.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let row: ForeignKeysPragma = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;
    if row.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }
    debug!("Foreign key enforcement confirmed");
    Ok(())
}

/// Connects to `database_url`, turns on foreign keys and applies any
/// pending migrations.
///
/// # Errors
///
/// Returns an error if the connection, the PRAGMA or a migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Opening portal database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;
    pragma(&mut conn, "PRAGMA foreign_keys = ON")?;

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    info!(applied, "Portal schema is up to date");

    Ok(conn)
}

/// Tunes a file-backed database: WAL journaling plus a busy timeout.
///
/// # Errors
///
/// Returns an error if either PRAGMA fails.
pub fn configure_file_database(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    pragma(conn, "PRAGMA journal_mode = WAL")?;
    pragma(conn, &format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"))
}
