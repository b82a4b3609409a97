// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.
//!
//! Every gated operation receives the acting account as an explicit
//! `Option<&AuthenticatedActor>`. `None` means nobody is logged in.

use placement_domain::Role;
use placement_persistence::{
    AccountData, CompanyProfileData, DriveData, Persistence, PersistenceError, SessionData,
    StudentProfileData,
};
use time::format_description::well_known::Iso8601;
use time::{Duration, OffsetDateTime};

use crate::error::{AuthError, INVALID_CREDENTIALS};

/// The role of an authenticated actor, carrying the profile the role owns.
///
/// A student or company may not have created a profile yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ActorRole {
    /// Site administrator.
    Admin,
    /// Student, with an academic profile once one exists.
    Student(Option<StudentProfileData>),
    /// Company, with a business profile once one exists.
    Company(Option<CompanyProfileData>),
}

impl ActorRole {
    /// Returns the plain role tag.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Student(_) => Role::Student,
            Self::Company(_) => Role::Company,
        }
    }
}

/// A logged-in account together with its role-specific profile.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedActor {
    /// The account that is acting.
    pub account: AccountData,
    /// The account's role and profile.
    pub role: ActorRole,
}

impl AuthenticatedActor {
    /// Builds an actor from an account, loading the profile its role owns.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile lookup fails.
    pub fn load(
        persistence: &mut Persistence,
        account: AccountData,
    ) -> Result<Self, PersistenceError> {
        let role: ActorRole = match account.role {
            Role::Admin => ActorRole::Admin,
            Role::Student => {
                ActorRole::Student(persistence.get_student_profile(account.account_id)?)
            }
            Role::Company => {
                ActorRole::Company(persistence.get_company_profile(account.account_id)?)
            }
        };
        Ok(Self { account, role })
    }

    /// Returns the account ID of this actor.
    #[must_use]
    pub const fn account_id(&self) -> i64 {
        self.account.account_id
    }
}

/// Authorization gate.
///
/// Each guard either hands back what the caller needs to proceed or an
/// `AuthError` describing why the actor may not.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Requires that somebody is logged in.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationRequired` if `actor` is `None`.
    pub fn require_authenticated<'a>(
        actor: Option<&'a AuthenticatedActor>,
        action: &str,
    ) -> Result<&'a AuthenticatedActor, AuthError> {
        actor.ok_or_else(|| AuthError::AuthenticationRequired {
            action: action.to_string(),
        })
    }

    /// Requires an admin actor.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationRequired` if nobody is logged in, or
    /// `Forbidden` for any other role.
    pub fn require_admin<'a>(
        actor: Option<&'a AuthenticatedActor>,
        action: &str,
    ) -> Result<&'a AuthenticatedActor, AuthError> {
        let actor: &AuthenticatedActor = Self::require_authenticated(actor, action)?;
        match actor.role {
            ActorRole::Admin => Ok(actor),
            ActorRole::Student(_) | ActorRole::Company(_) => Err(Self::forbidden(action, "admin")),
        }
    }

    /// Requires a student actor and returns its profile, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationRequired` if nobody is logged in, or
    /// `Forbidden` for any other role.
    pub fn require_student<'a>(
        actor: Option<&'a AuthenticatedActor>,
        action: &str,
    ) -> Result<(&'a AuthenticatedActor, Option<&'a StudentProfileData>), AuthError> {
        let actor: &AuthenticatedActor = Self::require_authenticated(actor, action)?;
        match &actor.role {
            ActorRole::Student(profile) => Ok((actor, profile.as_ref())),
            ActorRole::Admin | ActorRole::Company(_) => Err(Self::forbidden(action, "student")),
        }
    }

    /// Requires a company actor and returns its profile, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationRequired` if nobody is logged in, or
    /// `Forbidden` for any other role.
    pub fn require_company<'a>(
        actor: Option<&'a AuthenticatedActor>,
        action: &str,
    ) -> Result<(&'a AuthenticatedActor, Option<&'a CompanyProfileData>), AuthError> {
        let actor: &AuthenticatedActor = Self::require_authenticated(actor, action)?;
        match &actor.role {
            ActorRole::Company(profile) => Ok((actor, profile.as_ref())),
            ActorRole::Admin | ActorRole::Student(_) => Err(Self::forbidden(action, "company")),
        }
    }

    /// Requires that the company profile owns the drive.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` if there is no profile or the drive belongs to
    /// another company.
    pub fn require_drive_owner<'a>(
        profile: Option<&'a CompanyProfileData>,
        drive: &DriveData,
        action: &str,
    ) -> Result<&'a CompanyProfileData, AuthError> {
        match profile {
            Some(profile) if profile.company_profile_id == drive.company_profile_id => Ok(profile),
            _ => Err(Self::forbidden(action, "ownership of the drive")),
        }
    }

    fn forbidden(action: &str, required: &str) -> AuthError {
        tracing::warn!(action, required, "Authorization denied");
        AuthError::Forbidden {
            action: action.to_string(),
            required: required.to_string(),
        }
    }
}

/// A session issued by a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedSession {
    /// Opaque bearer token.
    pub session_token: String,
    /// Expiry as an ISO 8601 timestamp.
    pub expires_at: String,
    /// The actor the session authenticates.
    pub actor: AuthenticatedActor,
}

/// Authentication service.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session lifetime.
    const SESSION_LIFETIME: Duration = Duration::days(1);

    /// Verifies credentials and creates a session.
    ///
    /// Unknown usernames and wrong passwords fail with the same reason.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `username` - The login name
    /// * `password` - The plaintext password
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are wrong, the account is
    /// deactivated, or the session cannot be stored.
    pub fn login(
        persistence: &mut Persistence,
        username: &str,
        password: &str,
    ) -> Result<IssuedSession, AuthError> {
        let account: AccountData = persistence
            .get_account_by_username(username.trim())
            .map_err(Self::map_persistence_error)?
            .ok_or_else(Self::invalid_credentials)?;

        let verified: bool = Persistence::verify_password(password, &account.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !verified {
            return Err(Self::invalid_credentials());
        }

        if !account.is_active {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is deactivated."),
            });
        }

        let session_token: String = Self::generate_session_token();
        let expires_at: String = (OffsetDateTime::now_utc() + Self::SESSION_LIFETIME)
            .format(&Iso8601::DEFAULT)
            .map_err(|e| AuthError::Internal {
                message: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, account.account_id, &expires_at)
            .map_err(Self::map_persistence_error)?;

        tracing::info!(account_id = account.account_id, role = %account.role, "Login succeeded");

        let actor: AuthenticatedActor =
            AuthenticatedActor::load(persistence, account).map_err(Self::map_persistence_error)?;

        Ok(IssuedSession {
            session_token,
            expires_at,
            actor,
        })
    }

    /// Resolves a session token to the acting account.
    ///
    /// Expired sessions are deleted. Sessions of deactivated accounts are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown, expired, or belongs to
    /// an account that no longer exists or is inactive.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<AuthenticatedActor, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime =
            OffsetDateTime::parse(&session.expires_at, &Iso8601::DEFAULT).map_err(|e| {
                AuthError::Internal {
                    message: format!("Failed to parse session expiration: {e}"),
                }
            })?;

        if OffsetDateTime::now_utc() > expires_at {
            persistence
                .delete_session(session_token)
                .map_err(Self::map_persistence_error)?;
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let account: AccountData = persistence
            .get_account_by_id(session.account_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account not found"),
            })?;

        if !account.is_active {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is deactivated."),
            });
        }

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        AuthenticatedActor::load(persistence, account).map_err(Self::map_persistence_error)
    }

    /// Logs out by deleting the session. Unknown tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)
    }

    /// Generates a 128-bit random session token, hex encoded.
    fn generate_session_token() -> String {
        format!("{:016x}{:016x}", rand::random::<u64>(), rand::random::<u64>())
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from(INVALID_CREDENTIALS),
        }
    }

    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::Internal {
            message: format!("Session storage failed: {err}"),
        }
    }
}
