// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{ApplicationStatus, DomainError, Role};

#[test]
fn test_role_round_trips_through_str() {
    for role in [Role::Admin, Role::Student, Role::Company] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_rejects_unknown_value() {
    let result = Role::from_str("recruiter");
    assert_eq!(result, Err(DomainError::InvalidRole(String::from("recruiter"))));
}

#[test]
fn test_role_is_case_sensitive() {
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_only_student_and_company_are_self_registrable() {
    assert!(!Role::Admin.is_self_registrable());
    assert!(Role::Student.is_self_registrable());
    assert!(Role::Company.is_self_registrable());
}

#[test]
fn test_application_status_accepts_all_five_values() {
    let values: [&str; 5] = ["pending", "reviewed", "shortlisted", "rejected", "accepted"];
    let parsed: Vec<ApplicationStatus> = values
        .iter()
        .map(|s| ApplicationStatus::from_str(s).unwrap())
        .collect();
    assert_eq!(parsed, ApplicationStatus::ALL.to_vec());
}

#[test]
fn test_application_status_rejects_unknown_value() {
    let result = ApplicationStatus::from_str("hired");
    assert!(matches!(
        result,
        Err(DomainError::InvalidApplicationStatus(ref s)) if s == "hired"
    ));
}

#[test]
fn test_application_status_defaults_to_pending() {
    assert_eq!(ApplicationStatus::default(), ApplicationStatus::Pending);
}

#[test]
fn test_only_accepted_counts_as_placement() {
    let placements: Vec<ApplicationStatus> = ApplicationStatus::ALL
        .into_iter()
        .filter(ApplicationStatus::is_placement)
        .collect();
    assert_eq!(placements, vec![ApplicationStatus::Accepted]);
}

#[test]
fn test_application_status_display_matches_as_str() {
    assert_eq!(ApplicationStatus::Shortlisted.to_string(), "shortlisted");
}
