// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation handlers.
//!
//! Every handler takes the persistence layer, the acting account (or `None`)
//! and the request, enforces authorization first, and returns an API
//! response or an `ApiError`. Handlers never read ambient state; operations
//! that depend on the current date take `today` explicitly.

pub mod accounts;
pub mod admin;
pub mod applications;
pub mod dashboards;
pub mod drives;
pub mod profiles;

use placement_persistence::{CompanyProfileData, DriveData, Persistence, PersistenceError};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, not_found, translate_persistence_error};

/// Returns a mapper from persistence errors to API errors for one resource.
pub(crate) fn storage(resource_type: &'static str) -> impl Fn(PersistenceError) -> ApiError {
    move |err| translate_persistence_error(err, resource_type)
}

/// Loads a drive and checks that the acting company owns it.
///
/// Existence is checked before ownership.
pub(crate) fn load_owned_drive<'a>(
    persistence: &mut Persistence,
    actor: Option<&'a AuthenticatedActor>,
    job_posting_id: i64,
    action: &str,
) -> Result<(&'a CompanyProfileData, DriveData), ApiError> {
    let (_, profile) = AuthorizationService::require_company(actor, action)?;

    let drive: DriveData = persistence
        .get_drive(job_posting_id)
        .map_err(storage("drive"))?
        .ok_or_else(|| not_found("drive", job_posting_id))?;

    let profile: &CompanyProfileData =
        AuthorizationService::require_drive_owner(profile, &drive, action)?;

    Ok((profile, drive))
}
