// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration, login, logout and bootstrap of the administrator.

use placement_domain::{Role, parse_registrable_role, require_registration_fields};
use placement_persistence::Persistence;
use tracing::{info, warn};

use crate::auth::{
    ActorRole, AuthenticatedActor, AuthenticationService, AuthorizationService, IssuedSession,
};
use crate::error::{ApiError, translate_domain_error};
use crate::handlers::storage;
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AccountInfo, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, WhoAmIResponse,
};

/// Returns the landing page for a role.
#[must_use]
pub const fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Student => "/student/dashboard",
        Role::Company => "/company/dashboard",
    }
}

/// Registers a student or company account.
///
/// Checks run in order and the first failure wins:
/// 1. every field is present
/// 2. password and confirmation match, and the password is long enough
/// 3. the role is `student` or `company`
/// 4. the username is free
/// 5. the email is free
///
/// Students are approved on creation. Companies wait for an administrator.
///
/// # Errors
///
/// Returns `InvalidInput` for a validation failure and `Conflict` when the
/// username or email is taken.
pub fn register(
    persistence: &mut Persistence,
    request: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    require_registration_fields(
        &request.username,
        &request.email,
        &request.password,
        &request.confirm_password,
        &request.role,
    )
    .map_err(translate_domain_error)?;

    PasswordPolicy::default().validate(&request.password, &request.confirm_password)?;

    let role: Role = parse_registrable_role(&request.role).map_err(translate_domain_error)?;

    let username: &str = request.username.trim();
    let email: &str = request.email.trim();

    if persistence.username_exists(username).map_err(storage("account"))? {
        return Err(ApiError::Conflict {
            resource_type: String::from("account"),
            message: String::from("Username already exists."),
        });
    }

    if persistence.email_exists(email).map_err(storage("account"))? {
        return Err(ApiError::Conflict {
            resource_type: String::from("account"),
            message: String::from("Email already registered."),
        });
    }

    let is_approved: bool = role == Role::Student;
    let account_id: i64 = persistence
        .create_account(username, email, &request.password, role, is_approved)
        .map_err(storage("account"))?;

    info!(account_id, username, %role, "Registered account");

    Ok(RegisterResponse {
        account_id,
        username: username.to_string(),
        role,
        is_approved,
        message: String::from("Registration successful! Please login."),
    })
}

/// Logs in and issues a session token.
///
/// # Errors
///
/// Returns `AuthenticationFailed` with the generic credentials message when
/// the username is unknown or the password is wrong.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let session: IssuedSession =
        AuthenticationService::login(persistence, &request.username, &request.password)?;

    let account: AccountInfo = AccountInfo::from(&session.actor.account);
    let dashboard: &str = dashboard_path(account.role);

    Ok(LoginResponse {
        message: format!("Welcome back, {}!", account.username),
        session_token: session.session_token,
        expires_at: session.expires_at,
        account,
        dashboard: dashboard.to_string(),
    })
}

/// Ends a session.
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Describes the logged-in actor.
///
/// # Errors
///
/// Returns `AuthenticationRequired` if nobody is logged in.
pub fn whoami(actor: Option<&AuthenticatedActor>) -> Result<WhoAmIResponse, ApiError> {
    let actor: &AuthenticatedActor = AuthorizationService::require_authenticated(actor, "whoami")?;
    let has_profile: bool = match &actor.role {
        ActorRole::Admin => true,
        ActorRole::Student(profile) => profile.is_some(),
        ActorRole::Company(profile) => profile.is_some(),
    };
    Ok(WhoAmIResponse {
        account: AccountInfo::from(&actor.account),
        has_profile,
    })
}

/// Creates the bootstrap administrator unless the username already exists.
///
/// Returns true if an account was created.
///
/// # Errors
///
/// Returns an error if the lookup or insert fails.
pub fn seed_admin(
    persistence: &mut Persistence,
    username: &str,
    email: &str,
    password: &str,
) -> Result<bool, ApiError> {
    if persistence.username_exists(username).map_err(storage("account"))? {
        info!(username, "Administrator already present");
        return Ok(false);
    }

    if password.is_empty() {
        warn!(username, "Refusing to seed an administrator with an empty password");
        return Err(ApiError::InvalidInput {
            field: String::from("admin_password"),
            message: String::from("Administrator password must not be empty"),
        });
    }

    let account_id: i64 = persistence
        .create_account(username, email, password, Role::Admin, true)
        .map_err(storage("account"))?;
    info!(account_id, username, "Seeded administrator");
    Ok(true)
}
