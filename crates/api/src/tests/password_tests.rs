// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, PasswordPolicy, PasswordPolicyError};

#[test]
fn test_password_at_minimum_length_is_accepted() {
    let policy = PasswordPolicy::default();
    assert!(policy.validate("abcdef", "abcdef").is_ok());
}

#[test]
fn test_short_password_is_rejected() {
    let policy = PasswordPolicy::default();
    assert_eq!(
        policy.validate("abcde", "abcde"),
        Err(PasswordPolicyError::TooShort { min_length: 6 })
    );
}

#[test]
fn test_confirmation_mismatch_is_reported_before_length() {
    let policy = PasswordPolicy::default();
    assert_eq!(
        policy.validate("abc", "abd"),
        Err(PasswordPolicyError::ConfirmationMismatch)
    );
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let policy = PasswordPolicy::default();
    assert!(policy.validate("éééééé", "éééééé").is_ok());
    assert!(policy.validate("ééééé", "ééééé").is_err());
}

#[test]
fn test_policy_error_becomes_password_field_error() {
    let err: ApiError = PasswordPolicyError::ConfirmationMismatch.into();
    match err {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "password");
            assert_eq!(message, "Passwords do not match");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
