// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use placement_domain::ApplicationStatus;
use placement_persistence::Persistence;

use crate::tests::helpers::{
    actor_for, create_admin, create_company, create_student, create_test_persistence,
    create_visible_drive, drive_fields, register_request, today,
};
use crate::{
    ApiError, ApplicationFilterRequest, ApplyRequest, AuthenticatedActor, BulkShortlistRequest,
    UpdateStatusRequest, application_detail, apply, bulk_shortlist, create_drive,
    my_applications, register, update_application_status,
};

struct Fixture {
    persistence: Persistence,
    admin: AuthenticatedActor,
    acme: AuthenticatedActor,
    globex: AuthenticatedActor,
    alice: AuthenticatedActor,
    drive_id: i64,
}

fn fixture() -> Fixture {
    let mut persistence = create_test_persistence();
    let admin = create_admin(&mut persistence);
    let acme = create_company(&mut persistence, "acme", "Acme Corp", true);
    let globex = create_company(&mut persistence, "globex", "Globex", true);
    let alice = create_student(&mut persistence, "alice", "R001");
    let drive_id = create_visible_drive(&mut persistence, &admin, &acme, "Backend");
    Fixture {
        persistence,
        admin,
        acme,
        globex,
        alice,
        drive_id,
    }
}

fn status_request(status: &str) -> UpdateStatusRequest {
    UpdateStatusRequest {
        status: status.to_string(),
    }
}

fn submit(persistence: &mut Persistence, student: &AuthenticatedActor, drive_id: i64) -> i64 {
    apply(persistence, Some(student), drive_id, &ApplyRequest::default(), today())
        .unwrap()
        .application
        .application_id
}

fn stored_status(persistence: &mut Persistence, application_id: i64) -> ApplicationStatus {
    persistence
        .get_application(application_id)
        .unwrap()
        .unwrap()
        .status
}

#[test]
fn test_apply_creates_pending_application() {
    let mut f = fixture();

    let request = ApplyRequest {
        cover_letter: Some(String::from("  I like Rust.  ")),
    };
    let response =
        apply(&mut f.persistence, Some(&f.alice), f.drive_id, &request, today()).unwrap();

    assert_eq!(response.application.status, ApplicationStatus::Pending);
    assert_eq!(response.application.cover_letter.as_deref(), Some("I like Rust."));
    assert_eq!(response.application.account_id, f.alice.account_id());
}

#[test]
fn test_apply_requires_student_profile() {
    let mut f = fixture();
    let account_id = register(&mut f.persistence, &register_request("bob", "student"))
        .unwrap()
        .account_id;
    let bob = actor_for(&mut f.persistence, account_id);

    match apply(&mut f.persistence, Some(&bob), f.drive_id, &ApplyRequest::default(), today()) {
        Err(ApiError::Rejected { rule, .. }) => assert_eq!(rule, "student_profile_required"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_apply_requires_visible_drive() {
    let mut f = fixture();
    let pending = create_drive(
        &mut f.persistence,
        Some(&f.acme),
        &drive_fields("Pending"),
        today(),
    )
    .unwrap()
    .drive
    .job_posting_id;

    match apply(&mut f.persistence, Some(&f.alice), pending, &ApplyRequest::default(), today()) {
        Err(ApiError::Rejected { rule, .. }) => assert_eq!(rule, "drive_closed"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(matches!(
        apply(&mut f.persistence, Some(&f.alice), 999, &ApplyRequest::default(), today()),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_second_application_is_a_conflict() {
    let mut f = fixture();
    submit(&mut f.persistence, &f.alice, f.drive_id);

    let second = apply(
        &mut f.persistence,
        Some(&f.alice),
        f.drive_id,
        &ApplyRequest::default(),
        today(),
    );

    assert!(matches!(second, Err(ApiError::Conflict { .. })));
    let applications = my_applications(
        &mut f.persistence,
        Some(&f.alice),
        &ApplicationFilterRequest::default(),
    )
    .unwrap()
    .applications;
    assert_eq!(applications.len(), 1);
}

#[test]
fn test_cover_letter_length_limit() {
    let mut f = fixture();

    let too_long = ApplyRequest {
        cover_letter: Some("x".repeat(1001)),
    };
    match apply(&mut f.persistence, Some(&f.alice), f.drive_id, &too_long, today()) {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "cover_letter"),
        other => panic!("unexpected result: {other:?}"),
    }

    let at_limit = ApplyRequest {
        cover_letter: Some("x".repeat(1000)),
    };
    assert!(apply(&mut f.persistence, Some(&f.alice), f.drive_id, &at_limit, today()).is_ok());
}

#[test]
fn test_companies_cannot_apply() {
    let mut f = fixture();

    assert!(matches!(
        apply(&mut f.persistence, Some(&f.acme), f.drive_id, &ApplyRequest::default(), today()),
        Err(ApiError::Forbidden { .. })
    ));
}

#[test]
fn test_invalid_status_leaves_stored_status_unchanged() {
    let mut f = fixture();
    let application_id = submit(&mut f.persistence, &f.alice, f.drive_id);

    let result = update_application_status(
        &mut f.persistence,
        Some(&f.acme),
        application_id,
        &status_request("hired"),
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "status"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(stored_status(&mut f.persistence, application_id), ApplicationStatus::Pending);
}

#[test]
fn test_any_status_may_replace_any_other() {
    let mut f = fixture();
    let application_id = submit(&mut f.persistence, &f.alice, f.drive_id);

    for status in ["accepted", "pending", "rejected", "reviewed", "shortlisted"] {
        let response = update_application_status(
            &mut f.persistence,
            Some(&f.acme),
            application_id,
            &status_request(status),
        )
        .unwrap();
        assert_eq!(response.application.status.as_str(), status);
    }
}

#[test]
fn test_other_company_cannot_update_status() {
    let mut f = fixture();
    let application_id = submit(&mut f.persistence, &f.alice, f.drive_id);

    assert!(matches!(
        update_application_status(
            &mut f.persistence,
            Some(&f.globex),
            application_id,
            &status_request("accepted"),
        ),
        Err(ApiError::Forbidden { .. })
    ));
    assert!(matches!(
        update_application_status(
            &mut f.persistence,
            Some(&f.alice),
            application_id,
            &status_request("accepted"),
        ),
        Err(ApiError::Forbidden { .. })
    ));
    assert_eq!(stored_status(&mut f.persistence, application_id), ApplicationStatus::Pending);
}

#[test]
fn test_bulk_shortlist_skips_applications_of_other_drives() {
    let mut f = fixture();
    let bob = create_student(&mut f.persistence, "bob", "R002");
    let other_drive = create_visible_drive(&mut f.persistence, &f.admin, &f.acme, "Frontend");

    let a1 = submit(&mut f.persistence, &f.alice, f.drive_id);
    let a2 = submit(&mut f.persistence, &bob, f.drive_id);
    let foreign = submit(&mut f.persistence, &f.alice, other_drive);

    let request = BulkShortlistRequest {
        application_ids: vec![a1, a2, foreign, 999],
    };
    let response = bulk_shortlist(&mut f.persistence, Some(&f.acme), f.drive_id, &request).unwrap();

    assert_eq!(response.updated, 2);
    assert_eq!(stored_status(&mut f.persistence, a1), ApplicationStatus::Shortlisted);
    assert_eq!(stored_status(&mut f.persistence, a2), ApplicationStatus::Shortlisted);
    assert_eq!(stored_status(&mut f.persistence, foreign), ApplicationStatus::Pending);
}

#[test]
fn test_bulk_shortlist_with_nothing_selected_is_rejected() {
    let mut f = fixture();

    match bulk_shortlist(
        &mut f.persistence,
        Some(&f.acme),
        f.drive_id,
        &BulkShortlistRequest::default(),
    ) {
        Err(ApiError::Rejected { rule, .. }) => assert_eq!(rule, "none_selected"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_bulk_shortlist_on_foreign_drive_is_forbidden() {
    let mut f = fixture();
    let application_id = submit(&mut f.persistence, &f.alice, f.drive_id);

    let request = BulkShortlistRequest {
        application_ids: vec![application_id],
    };
    assert!(matches!(
        bulk_shortlist(&mut f.persistence, Some(&f.globex), f.drive_id, &request),
        Err(ApiError::Forbidden { .. })
    ));
    assert_eq!(stored_status(&mut f.persistence, application_id), ApplicationStatus::Pending);
}

#[test]
fn test_students_see_only_their_own_applications() {
    let mut f = fixture();
    let bob = create_student(&mut f.persistence, "bob", "R002");
    let application_id = submit(&mut f.persistence, &f.alice, f.drive_id);

    let detail = application_detail(&mut f.persistence, Some(&f.alice), application_id).unwrap();
    assert_eq!(detail.listing.drive.title, "Backend");

    assert!(matches!(
        application_detail(&mut f.persistence, Some(&bob), application_id),
        Err(ApiError::Forbidden { .. })
    ));
    assert!(matches!(
        application_detail(&mut f.persistence, Some(&bob), 999),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_my_applications_filters_by_status() {
    let mut f = fixture();
    let application_id = submit(&mut f.persistence, &f.alice, f.drive_id);
    update_application_status(
        &mut f.persistence,
        Some(&f.acme),
        application_id,
        &status_request("reviewed"),
    )
    .unwrap();

    let filter = |status: &str| ApplicationFilterRequest {
        status: Some(status.to_string()),
    };

    let reviewed =
        my_applications(&mut f.persistence, Some(&f.alice), &filter("reviewed")).unwrap();
    assert_eq!(reviewed.applications.len(), 1);
    let pending = my_applications(&mut f.persistence, Some(&f.alice), &filter("pending")).unwrap();
    assert!(pending.applications.is_empty());
    let everything = my_applications(&mut f.persistence, Some(&f.alice), &filter(" ")).unwrap();
    assert_eq!(everything.applications.len(), 1);

    assert!(matches!(
        my_applications(&mut f.persistence, Some(&f.alice), &filter("hired")),
        Err(ApiError::InvalidInput { .. })
    ));
}
