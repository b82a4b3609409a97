// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, MAX_COVER_LETTER_LEN, Role, normalize_search_term, parse_registrable_role,
    require_max_len, require_registration_fields, validate_cover_letter,
};

#[test]
fn test_registration_accepts_student_and_company() {
    assert_eq!(parse_registrable_role("student"), Ok(Role::Student));
    assert_eq!(parse_registrable_role(" company "), Ok(Role::Company));
}

#[test]
fn test_registration_rejects_admin_role() {
    assert_eq!(
        parse_registrable_role("admin"),
        Err(DomainError::RoleNotRegistrable(String::from("admin")))
    );
}

#[test]
fn test_registration_rejects_unknown_role() {
    assert!(matches!(
        parse_registrable_role("moderator"),
        Err(DomainError::InvalidRole(_))
    ));
}

#[test]
fn test_registration_fields_all_present() {
    assert!(
        require_registration_fields("alice", "alice@example.com", "secret1", "secret1", "student")
            .is_ok()
    );
}

#[test]
fn test_registration_reports_first_blank_field() {
    let result = require_registration_fields("alice", "  ", "", "", "student");
    assert_eq!(result, Err(DomainError::MissingField { field: "email" }));
}

#[test]
fn test_registration_requires_confirmation() {
    let result =
        require_registration_fields("alice", "alice@example.com", "secret1", "", "student");
    assert_eq!(
        result,
        Err(DomainError::MissingField {
            field: "confirm_password"
        })
    );
}

#[test]
fn test_registration_requires_role() {
    let result =
        require_registration_fields("alice", "alice@example.com", "secret1", "secret1", "");
    assert_eq!(result, Err(DomainError::MissingField { field: "role" }));
}

#[test]
fn test_max_len_counts_characters_not_bytes() {
    let text: String = "é".repeat(5);
    assert!(require_max_len("title", &text, 5).is_ok());
    assert!(require_max_len("title", &text, 4).is_err());
}

#[test]
fn test_cover_letter_at_limit_is_accepted() {
    let letter: String = "a".repeat(MAX_COVER_LETTER_LEN);
    let result = validate_cover_letter(Some(&letter)).unwrap();
    assert_eq!(result.map(|l| l.len()), Some(MAX_COVER_LETTER_LEN));
}

#[test]
fn test_cover_letter_over_limit_is_rejected() {
    let letter: String = "a".repeat(MAX_COVER_LETTER_LEN + 1);
    let result = validate_cover_letter(Some(&letter));
    assert_eq!(
        result,
        Err(DomainError::FieldTooLong {
            field: "cover_letter",
            max: MAX_COVER_LETTER_LEN,
            actual: MAX_COVER_LETTER_LEN + 1,
        })
    );
}

#[test]
fn test_blank_cover_letter_is_stored_as_absent() {
    assert_eq!(validate_cover_letter(Some("   ")), Ok(None));
    assert_eq!(validate_cover_letter(None), Ok(None));
}

#[test]
fn test_blank_search_term_means_no_filter() {
    assert_eq!(normalize_search_term(None), None);
    assert_eq!(normalize_search_term(Some("  ")), None);
    assert_eq!(
        normalize_search_term(Some(" Pune ")),
        Some(String::from("Pune"))
    );
}
