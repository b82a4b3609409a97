// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end flows through the public operations.

use placement_domain::ApplicationStatus;

use crate::tests::helpers::{
    actor_for, company_fields, create_admin, create_company, create_test_persistence,
    create_visible_drive, drive_fields, register_request, student_fields, today,
};
use crate::{
    ApiError, ApplyRequest, UpdateStatusRequest, apply, create_drive, list_company_drives,
    placement_history, register, set_company_approval, set_drive_approval,
    update_application_status, upsert_company_profile, upsert_student_profile,
};

#[test]
fn test_student_placement_flow() {
    let mut persistence = create_test_persistence();
    let admin = create_admin(&mut persistence);
    let acme = create_company(&mut persistence, "acme", "Acme Corp", true);
    let drive_id = create_visible_drive(&mut persistence, &admin, &acme, "Backend Engineer");

    // Students need no approval.
    let registered = register(&mut persistence, &register_request("alice", "student")).unwrap();
    assert!(registered.is_approved);
    let alice = actor_for(&mut persistence, registered.account_id);
    upsert_student_profile(&mut persistence, Some(&alice), &student_fields("R001", 8.5)).unwrap();
    let alice = actor_for(&mut persistence, registered.account_id);

    let application = apply(
        &mut persistence,
        Some(&alice),
        drive_id,
        &ApplyRequest::default(),
        today(),
    )
    .unwrap()
    .application;
    assert_eq!(application.status, ApplicationStatus::Pending);

    let shortlist = UpdateStatusRequest {
        status: String::from("shortlisted"),
    };
    update_application_status(
        &mut persistence,
        Some(&acme),
        application.application_id,
        &shortlist,
    )
    .unwrap();
    assert!(placement_history(&mut persistence, Some(&alice))
        .unwrap()
        .applications
        .is_empty());

    let accept = UpdateStatusRequest {
        status: String::from("accepted"),
    };
    update_application_status(&mut persistence, Some(&acme), application.application_id, &accept)
        .unwrap();

    let history = placement_history(&mut persistence, Some(&alice))
        .unwrap()
        .applications;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].application.application_id, application.application_id);
    assert_eq!(history[0].company_name, "Acme Corp");
}

#[test]
fn test_company_approval_flow() {
    let mut persistence = create_test_persistence();
    let admin = create_admin(&mut persistence);

    let registered = register(&mut persistence, &register_request("acme", "company")).unwrap();
    assert!(!registered.is_approved);
    let acme = actor_for(&mut persistence, registered.account_id);
    upsert_company_profile(&mut persistence, Some(&acme), &company_fields("Acme Corp")).unwrap();
    let acme = actor_for(&mut persistence, registered.account_id);

    match create_drive(&mut persistence, Some(&acme), &drive_fields("Backend"), today()) {
        Err(ApiError::Rejected { message, .. }) => assert!(message.contains("needs approval")),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(list_company_drives(&mut persistence, Some(&acme))
        .unwrap()
        .drives
        .is_empty());

    set_company_approval(&mut persistence, Some(&admin), registered.account_id, true).unwrap();
    let acme = actor_for(&mut persistence, registered.account_id);

    let drive = create_drive(&mut persistence, Some(&acme), &drive_fields("Backend"), today())
        .unwrap()
        .drive;
    assert!(!drive.is_approved);

    set_drive_approval(&mut persistence, Some(&admin), drive.job_posting_id, true).unwrap();
    assert!(persistence.get_drive(drive.job_posting_id).unwrap().unwrap().is_approved);
}
