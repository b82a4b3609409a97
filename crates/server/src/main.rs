// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod session;

#[cfg(test)]
mod tests;

use axum::{
    Router,
    routing::{get, post, put},
};
use clap::Parser;
use placement_api::seed_admin;
use placement_persistence::Persistence;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Password the bootstrap administrator gets when none is configured.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Placement Portal Server - HTTP server for campus placement drives
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Username of the bootstrap administrator
    #[arg(long, default_value = "admin")]
    admin_username: String,

    /// Email of the bootstrap administrator
    #[arg(long, default_value = "admin@placementportal.com")]
    admin_email: String,

    /// Password of the bootstrap administrator
    #[arg(long, env = "PLACEMENT_ADMIN_PASSWORD", default_value = DEFAULT_ADMIN_PASSWORD)]
    admin_password: String,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<Persistence>>,
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        // Accounts and sessions
        .route("/auth/register", post(handlers::handle_register))
        .route("/auth/login", post(handlers::handle_login))
        .route("/auth/logout", post(handlers::handle_logout))
        .route("/auth/whoami", get(handlers::handle_whoami))
        // Admin
        .route("/admin/dashboard", get(handlers::handle_admin_dashboard))
        .route("/admin/companies", get(handlers::handle_search_companies))
        .route(
            "/admin/companies/{account_id}/approve",
            post(handlers::handle_approve_company),
        )
        .route(
            "/admin/companies/{account_id}/reject",
            post(handlers::handle_reject_company),
        )
        .route("/admin/students", get(handlers::handle_search_students))
        .route("/admin/drives", get(handlers::handle_search_drives))
        .route(
            "/admin/drives/{drive_id}/approve",
            post(handlers::handle_approve_drive),
        )
        .route(
            "/admin/drives/{drive_id}/reject",
            post(handlers::handle_reject_drive),
        )
        .route(
            "/admin/applications",
            get(handlers::handle_list_all_applications),
        )
        .route(
            "/admin/accounts/{account_id}/toggle_active",
            post(handlers::handle_toggle_account_active),
        )
        // Company
        .route(
            "/company/profile",
            get(handlers::handle_get_company_profile).put(handlers::handle_put_company_profile),
        )
        .route("/company/dashboard", get(handlers::handle_company_dashboard))
        .route(
            "/company/drives",
            get(handlers::handle_list_company_drives).post(handlers::handle_create_drive),
        )
        .route(
            "/company/drives/{drive_id}",
            put(handlers::handle_edit_drive).delete(handlers::handle_delete_drive),
        )
        .route(
            "/company/drives/{drive_id}/toggle_active",
            post(handlers::handle_toggle_drive_active),
        )
        .route(
            "/company/drives/{drive_id}/applications",
            get(handlers::handle_list_drive_applications),
        )
        .route(
            "/company/drives/{drive_id}/shortlist",
            post(handlers::handle_bulk_shortlist),
        )
        .route(
            "/company/applications/{application_id}/status",
            post(handlers::handle_update_application_status),
        )
        // Student
        .route(
            "/student/profile",
            get(handlers::handle_get_student_profile).put(handlers::handle_put_student_profile),
        )
        .route("/student/dashboard", get(handlers::handle_student_dashboard))
        .route("/student/drives", get(handlers::handle_browse_drives))
        .route("/student/drives/{drive_id}", get(handlers::handle_drive_detail))
        .route("/student/drives/{drive_id}/apply", post(handlers::handle_apply))
        .route("/student/applications", get(handlers::handle_my_applications))
        .route(
            "/student/applications/{application_id}",
            get(handlers::handle_application_detail),
        )
        .route("/student/history", get(handlers::handle_placement_history))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Placement Portal Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.admin_password == DEFAULT_ADMIN_PASSWORD {
        warn!("Bootstrap administrator uses the default password");
    }
    seed_admin(
        &mut persistence,
        &args.admin_username,
        &args.admin_email,
        &args.admin_password,
    )?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
