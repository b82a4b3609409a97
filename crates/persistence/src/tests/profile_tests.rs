// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for profile upserts.

use placement_domain::{CompanyProfileFields, Role, StudentProfileFields};

use super::{create_student, create_test_persistence};
use crate::{Persistence, PersistenceError, StudentProfileData};

fn student_fields(roll_number: &str, cgpa: f64) -> StudentProfileFields {
    StudentProfileFields {
        full_name: String::from("Alice Smith"),
        roll_number: roll_number.to_string(),
        branch: String::from("CSE"),
        cgpa,
        phone: Some(String::from("9876543210")),
    }
}

#[test]
fn test_upsert_student_profile_inserts_then_updates_same_row() {
    let mut persistence: Persistence = create_test_persistence();
    let account_id: i64 = persistence
        .create_account("alice", "alice@example.com", "secret1", Role::Student, false)
        .unwrap();

    assert!(persistence.get_student_profile(account_id).unwrap().is_none());

    let first_id: i64 = persistence
        .upsert_student_profile(account_id, &student_fields("R100", 8.5))
        .unwrap();
    let second_id: i64 = persistence
        .upsert_student_profile(account_id, &student_fields("R100", 9.1))
        .unwrap();

    assert_eq!(first_id, second_id);
    let profile: StudentProfileData = persistence.get_student_profile(account_id).unwrap().unwrap();
    assert!((profile.cgpa - 9.1).abs() < f64::EPSILON);
    assert_eq!(profile.phone.as_deref(), Some("9876543210"));
}

#[test]
fn test_roll_number_is_unique_across_students() {
    let mut persistence: Persistence = create_test_persistence();
    create_student(&mut persistence, "alice", "R100");
    let bob: i64 = persistence
        .create_account("bob", "bob@example.com", "secret1", Role::Student, false)
        .unwrap();

    assert!(persistence.roll_number_taken("R100", bob).unwrap());

    let err: PersistenceError = persistence
        .upsert_student_profile(bob, &student_fields("R100", 7.0))
        .unwrap_err();
    assert!(err.is_unique_violation());
    assert!(persistence.get_student_profile(bob).unwrap().is_none());
}

#[test]
fn test_roll_number_taken_ignores_own_profile() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: i64 = create_student(&mut persistence, "alice", "R100");
    assert!(!persistence.roll_number_taken("R100", alice).unwrap());
}

#[test]
fn test_cgpa_outside_range_is_rejected_by_storage() {
    let mut persistence: Persistence = create_test_persistence();
    let account_id: i64 = persistence
        .create_account("alice", "alice@example.com", "secret1", Role::Student, false)
        .unwrap();

    assert!(
        persistence
            .upsert_student_profile(account_id, &student_fields("R100", 10.5))
            .is_err()
    );
}

#[test]
fn test_upsert_company_profile_clears_optional_fields() {
    let mut persistence: Persistence = create_test_persistence();
    let account_id: i64 = persistence
        .create_account("acme", "hr@acme.com", "secret1", Role::Company, false)
        .unwrap();

    let mut fields: CompanyProfileFields = CompanyProfileFields {
        company_name: String::from("Acme"),
        industry: String::from("Manufacturing"),
        description: Some(String::from("Anvils")),
        website: Some(String::from("https://acme.example")),
        contact_person: None,
        contact_email: None,
        contact_phone: None,
    };
    persistence.upsert_company_profile(account_id, &fields).unwrap();

    fields.website = None;
    persistence.upsert_company_profile(account_id, &fields).unwrap();

    let profile = persistence.get_company_profile(account_id).unwrap().unwrap();
    assert_eq!(profile.company_name, "Acme");
    assert_eq!(profile.description.as_deref(), Some("Anvils"));
    assert!(profile.website.is_none());
}
