// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student and company profile maintenance.

use placement_domain::{CompanyProfileFields, StudentProfileFields};
use placement_persistence::{CompanyProfileData, Persistence, StudentProfileData};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error};
use crate::handlers::storage;
use crate::request_response::{CompanyProfileResponse, StudentProfileResponse};

/// Returns the acting student's profile, if one exists.
///
/// # Errors
///
/// Returns an error if the actor is not a student or the query fails.
pub fn get_student_profile(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
) -> Result<StudentProfileResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_student(actor, "get_student_profile")?;
    let profile: Option<StudentProfileData> = persistence
        .get_student_profile(actor.account_id())
        .map_err(storage("student profile"))?;
    let message: &str = if profile.is_some() {
        "Profile found."
    } else {
        "Please complete your profile."
    };
    Ok(StudentProfileResponse {
        profile,
        message: message.to_string(),
    })
}

/// Creates or replaces the acting student's profile.
///
/// # Errors
///
/// Returns `InvalidInput` if a field is invalid and `Conflict` if another
/// student already holds the roll number.
pub fn upsert_student_profile(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    fields: &StudentProfileFields,
) -> Result<StudentProfileResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_student(actor, "upsert_student_profile")?;
    let fields: StudentProfileFields = fields.validate().map_err(translate_domain_error)?;

    if persistence
        .roll_number_taken(&fields.roll_number, actor.account_id())
        .map_err(storage("student profile"))?
    {
        return Err(ApiError::Conflict {
            resource_type: String::from("student profile"),
            message: String::from("Roll number already registered."),
        });
    }

    persistence
        .upsert_student_profile(actor.account_id(), &fields)
        .map_err(storage("student profile"))?;

    let profile: Option<StudentProfileData> = persistence
        .get_student_profile(actor.account_id())
        .map_err(storage("student profile"))?;

    Ok(StudentProfileResponse {
        profile,
        message: String::from("Profile updated successfully!"),
    })
}

/// Returns the acting company's profile, if one exists.
///
/// # Errors
///
/// Returns an error if the actor is not a company or the query fails.
pub fn get_company_profile(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
) -> Result<CompanyProfileResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_company(actor, "get_company_profile")?;
    let profile: Option<CompanyProfileData> = persistence
        .get_company_profile(actor.account_id())
        .map_err(storage("company profile"))?;
    let message: &str = if profile.is_some() {
        "Profile found."
    } else {
        "Please complete your company profile."
    };
    Ok(CompanyProfileResponse {
        profile,
        message: message.to_string(),
    })
}

/// Creates or replaces the acting company's profile.
///
/// Saving a profile does not change the account's approval.
///
/// # Errors
///
/// Returns `InvalidInput` if the company name or industry is blank.
pub fn upsert_company_profile(
    persistence: &mut Persistence,
    actor: Option<&AuthenticatedActor>,
    fields: &CompanyProfileFields,
) -> Result<CompanyProfileResponse, ApiError> {
    let (actor, _) = AuthorizationService::require_company(actor, "upsert_company_profile")?;
    let fields: CompanyProfileFields = fields.validate().map_err(translate_domain_error)?;

    persistence
        .upsert_company_profile(actor.account_id(), &fields)
        .map_err(storage("company profile"))?;

    let profile: Option<CompanyProfileData> = persistence
        .get_company_profile(actor.account_id())
        .map_err(storage("company profile"))?;

    Ok(CompanyProfileResponse {
        profile,
        message: String::from("Company profile updated successfully!"),
    })
}
