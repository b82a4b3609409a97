// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile upserts. An account owns at most one profile of each kind.

use diesel::SqliteConnection;
use diesel::prelude::*;
use placement_domain::{CompanyProfileFields, StudentProfileFields};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{company_profiles, student_profiles};
use crate::error::PersistenceError;

/// Creates or replaces the student profile of an account and returns its ID.
///
/// `fields` must already be validated.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if another student already
/// uses the roll number.
pub fn upsert_student_profile(
    conn: &mut SqliteConnection,
    account_id: i64,
    fields: &StudentProfileFields,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        let existing: Option<i64> = student_profiles::table
            .filter(student_profiles::account_id.eq(account_id))
            .select(student_profiles::student_profile_id)
            .first(conn)
            .optional()?;

        let profile_id: i64 = if let Some(profile_id) = existing {
            diesel::update(student_profiles::table.find(profile_id))
                .set((
                    student_profiles::full_name.eq(&fields.full_name),
                    student_profiles::roll_number.eq(&fields.roll_number),
                    student_profiles::branch.eq(&fields.branch),
                    student_profiles::cgpa.eq(fields.cgpa),
                    student_profiles::phone.eq(fields.phone.as_deref()),
                ))
                .execute(conn)?;
            profile_id
        } else {
            diesel::insert_into(student_profiles::table)
                .values((
                    student_profiles::account_id.eq(account_id),
                    student_profiles::full_name.eq(&fields.full_name),
                    student_profiles::roll_number.eq(&fields.roll_number),
                    student_profiles::branch.eq(&fields.branch),
                    student_profiles::cgpa.eq(fields.cgpa),
                    student_profiles::phone.eq(fields.phone.as_deref()),
                ))
                .execute(conn)?;
            conn.get_last_insert_rowid()?
        };

        info!(account_id, profile_id, created = existing.is_none(), "Saved student profile");
        Ok(profile_id)
    })
}

/// Creates or replaces the company profile of an account and returns its ID.
///
/// `fields` must already be validated.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_company_profile(
    conn: &mut SqliteConnection,
    account_id: i64,
    fields: &CompanyProfileFields,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        let existing: Option<i64> = company_profiles::table
            .filter(company_profiles::account_id.eq(account_id))
            .select(company_profiles::company_profile_id)
            .first(conn)
            .optional()?;

        let profile_id: i64 = if let Some(profile_id) = existing {
            diesel::update(company_profiles::table.find(profile_id))
                .set((
                    company_profiles::company_name.eq(&fields.company_name),
                    company_profiles::industry.eq(&fields.industry),
                    company_profiles::description.eq(fields.description.as_deref()),
                    company_profiles::website.eq(fields.website.as_deref()),
                    company_profiles::contact_person.eq(fields.contact_person.as_deref()),
                    company_profiles::contact_email.eq(fields.contact_email.as_deref()),
                    company_profiles::contact_phone.eq(fields.contact_phone.as_deref()),
                ))
                .execute(conn)?;
            profile_id
        } else {
            diesel::insert_into(company_profiles::table)
                .values((
                    company_profiles::account_id.eq(account_id),
                    company_profiles::company_name.eq(&fields.company_name),
                    company_profiles::industry.eq(&fields.industry),
                    company_profiles::description.eq(fields.description.as_deref()),
                    company_profiles::website.eq(fields.website.as_deref()),
                    company_profiles::contact_person.eq(fields.contact_person.as_deref()),
                    company_profiles::contact_email.eq(fields.contact_email.as_deref()),
                    company_profiles::contact_phone.eq(fields.contact_phone.as_deref()),
                ))
                .execute(conn)?;
            conn.get_last_insert_rowid()?
        };

        info!(account_id, profile_id, created = existing.is_none(), "Saved company profile");
        Ok(profile_id)
    })
}
