// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Month;

use super::date;
use crate::{
    DomainError, DriveFields, MAX_DRIVE_TEXT_LEN, MAX_TITLE_LEN, is_visible_to_students,
    parse_deadline,
};

fn create_test_fields(deadline: &str) -> DriveFields {
    DriveFields {
        title: String::from("Graduate Engineer"),
        description: String::from("Build things."),
        requirements: String::from("B.Tech, CGPA 7+"),
        salary: Some(String::from("12 LPA")),
        location: String::from("Bengaluru"),
        job_type: String::from("Full-time"),
        deadline: deadline.to_string(),
    }
}

#[test]
fn test_valid_drive_is_accepted() {
    let today = date(2026, Month::October, 19);
    let validated = create_test_fields("2026-11-30").validate(today).unwrap();
    assert_eq!(validated.deadline, date(2026, Month::November, 30));
    assert_eq!(validated.salary.as_deref(), Some("12 LPA"));
}

#[test]
fn test_deadline_today_is_accepted() {
    let today = date(2026, Month::October, 19);
    assert!(create_test_fields("2026-10-19").validate(today).is_ok());
}

#[test]
fn test_deadline_yesterday_is_rejected() {
    let today = date(2026, Month::October, 19);
    let result = create_test_fields("2026-10-18").validate(today);
    assert!(matches!(result, Err(DomainError::DeadlineInPast { .. })));
}

#[test]
fn test_unparseable_deadline_is_rejected() {
    let today = date(2026, Month::October, 19);
    let result = create_test_fields("30/11/2026").validate(today);
    assert!(matches!(result, Err(DomainError::InvalidDeadline { .. })));
}

#[test]
fn test_impossible_calendar_date_is_rejected() {
    assert!(parse_deadline("2026-02-30").is_err());
}

#[test]
fn test_blank_required_field_is_rejected() {
    let today = date(2026, Month::October, 19);
    let mut fields = create_test_fields("2026-11-30");
    fields.location = String::from("   ");
    assert_eq!(
        fields.validate(today),
        Err(DomainError::MissingField { field: "location" })
    );
}

#[test]
fn test_title_over_limit_is_rejected() {
    let today = date(2026, Month::October, 19);
    let mut fields = create_test_fields("2026-11-30");
    fields.title = "t".repeat(MAX_TITLE_LEN + 1);
    assert!(matches!(
        fields.validate(today),
        Err(DomainError::FieldTooLong { field: "title", .. })
    ));
}

#[test]
fn test_requirements_over_limit_is_rejected() {
    let today = date(2026, Month::October, 19);
    let mut fields = create_test_fields("2026-11-30");
    fields.requirements = "r".repeat(MAX_DRIVE_TEXT_LEN + 1);
    assert!(matches!(
        fields.validate(today),
        Err(DomainError::FieldTooLong {
            field: "requirements",
            ..
        })
    ));
}

#[test]
fn test_blank_salary_becomes_absent() {
    let today = date(2026, Month::October, 19);
    let mut fields = create_test_fields("2026-11-30");
    fields.salary = Some(String::from(" "));
    assert_eq!(fields.validate(today).unwrap().salary, None);
}

#[test]
fn test_visibility_requires_all_three_conditions() {
    let today = date(2026, Month::October, 19);
    let future = date(2026, Month::December, 1);
    let past = date(2026, Month::October, 1);

    assert!(is_visible_to_students(true, true, future, today));
    assert!(is_visible_to_students(true, true, today, today));
    assert!(!is_visible_to_students(false, true, future, today));
    assert!(!is_visible_to_students(true, false, future, today));
    assert!(!is_visible_to_students(true, true, past, today));
}
