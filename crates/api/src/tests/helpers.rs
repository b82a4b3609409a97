// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use placement_domain::{CompanyProfileFields, DriveFields, StudentProfileFields};
use placement_persistence::{MIN_PASSWORD_COST, Persistence};
use time::Date;
use time::macros::date;

use crate::{
    AuthenticatedActor, RegisterRequest, create_drive, register, seed_admin, set_drive_approval,
    upsert_company_profile, upsert_student_profile,
};

pub const PASSWORD: &str = "secret1";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory()
        .unwrap()
        .with_password_cost(MIN_PASSWORD_COST)
}

pub const fn today() -> Date {
    date!(2026 - 06 - 01)
}

/// Reloads the actor for an account, the way a fresh request would.
pub fn actor_for(persistence: &mut Persistence, account_id: i64) -> AuthenticatedActor {
    let account = persistence.get_account_by_id(account_id).unwrap().unwrap();
    AuthenticatedActor::load(persistence, account).unwrap()
}

pub fn register_request(username: &str, role: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: String::from(PASSWORD),
        confirm_password: String::from(PASSWORD),
        role: role.to_string(),
    }
}

pub fn create_admin(persistence: &mut Persistence) -> AuthenticatedActor {
    seed_admin(persistence, "admin", "admin@placementportal.com", "admin123").unwrap();
    let account = persistence
        .get_account_by_username("admin")
        .unwrap()
        .unwrap();
    AuthenticatedActor::load(persistence, account).unwrap()
}

pub fn student_fields(roll_number: &str, cgpa: f64) -> StudentProfileFields {
    StudentProfileFields {
        full_name: format!("Student {roll_number}"),
        roll_number: roll_number.to_string(),
        branch: String::from("CSE"),
        cgpa,
        phone: None,
    }
}

pub fn company_fields(company_name: &str) -> CompanyProfileFields {
    CompanyProfileFields {
        company_name: company_name.to_string(),
        industry: String::from("Software"),
        description: None,
        website: None,
        contact_person: None,
        contact_email: None,
        contact_phone: None,
    }
}

/// Registers a student and gives them a profile.
pub fn create_student(
    persistence: &mut Persistence,
    username: &str,
    roll_number: &str,
) -> AuthenticatedActor {
    let account_id: i64 = register(persistence, &register_request(username, "student"))
        .unwrap()
        .account_id;
    let actor: AuthenticatedActor = actor_for(persistence, account_id);
    upsert_student_profile(persistence, Some(&actor), &student_fields(roll_number, 8.5)).unwrap();
    actor_for(persistence, account_id)
}

/// Registers a company with a profile, optionally approved.
pub fn create_company(
    persistence: &mut Persistence,
    username: &str,
    company_name: &str,
    approved: bool,
) -> AuthenticatedActor {
    let account_id: i64 = register(persistence, &register_request(username, "company"))
        .unwrap()
        .account_id;
    let actor: AuthenticatedActor = actor_for(persistence, account_id);
    upsert_company_profile(persistence, Some(&actor), &company_fields(company_name)).unwrap();
    if approved {
        persistence.set_account_approval(account_id, true).unwrap();
    }
    actor_for(persistence, account_id)
}

pub fn drive_fields(title: &str) -> DriveFields {
    DriveFields {
        title: title.to_string(),
        description: String::from("Build and run services"),
        requirements: String::from("Rust"),
        salary: Some(String::from("12 LPA")),
        location: String::from("Bangalore"),
        job_type: String::from("Full-time"),
        deadline: String::from("2026-07-01"),
    }
}

/// Creates a drive for an approved company and approves it.
pub fn create_visible_drive(
    persistence: &mut Persistence,
    admin: &AuthenticatedActor,
    company: &AuthenticatedActor,
    title: &str,
) -> i64 {
    let job_posting_id: i64 =
        create_drive(persistence, Some(company), &drive_fields(title), today())
            .unwrap()
            .drive
            .job_posting_id;
    set_drive_approval(persistence, Some(admin), job_posting_id, true).unwrap();
    job_posting_id
}
