// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod drive_tests;
mod initialization_tests;
mod profile_tests;

use placement_domain::{CompanyProfileFields, Role, StudentProfileFields, ValidatedDrive};
use time::{Date, Month};

use crate::{MIN_PASSWORD_COST, Persistence};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory()
        .unwrap()
        .with_password_cost(MIN_PASSWORD_COST)
}

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

/// The "current" date used by visibility tests.
pub fn today() -> Date {
    date(2026, Month::June, 1)
}

/// Creates a student account with a profile and returns the account ID.
pub fn create_student(persistence: &mut Persistence, username: &str, roll_number: &str) -> i64 {
    let account_id: i64 = persistence
        .create_account(
            username,
            &format!("{username}@example.com"),
            "secret1",
            Role::Student,
            false,
        )
        .unwrap();

    persistence
        .upsert_student_profile(
            account_id,
            &StudentProfileFields {
                full_name: format!("{username} Student"),
                roll_number: roll_number.to_string(),
                branch: String::from("CSE"),
                cgpa: 8.5,
                phone: None,
            },
        )
        .unwrap();

    account_id
}

/// Creates an approved company account with a profile.
///
/// Returns `(account_id, company_profile_id)`.
pub fn create_company(
    persistence: &mut Persistence,
    username: &str,
    company_name: &str,
) -> (i64, i64) {
    let account_id: i64 = persistence
        .create_account(
            username,
            &format!("{username}@example.com"),
            "secret1",
            Role::Company,
            true,
        )
        .unwrap();

    let profile_id: i64 = persistence
        .upsert_company_profile(
            account_id,
            &CompanyProfileFields {
                company_name: company_name.to_string(),
                industry: String::from("Software"),
                description: None,
                website: None,
                contact_person: None,
                contact_email: None,
                contact_phone: None,
            },
        )
        .unwrap();

    (account_id, profile_id)
}

pub fn sample_drive(title: &str, deadline: Date) -> ValidatedDrive {
    ValidatedDrive {
        title: title.to_string(),
        description: String::from("Build and ship services"),
        requirements: String::from("Rust"),
        salary: Some(String::from("12 LPA")),
        location: String::from("Bangalore"),
        job_type: String::from("Full-time"),
        deadline,
    }
}

/// Inserts a drive due 2026-07-01 and approves it, leaving it active.
pub fn create_visible_drive(
    persistence: &mut Persistence,
    company_profile_id: i64,
    title: &str,
) -> i64 {
    let drive_id: i64 = persistence
        .insert_drive(
            company_profile_id,
            &sample_drive(title, date(2026, Month::July, 1)),
        )
        .unwrap();
    persistence.set_drive_approval(drive_id, true).unwrap();
    drive_id
}
