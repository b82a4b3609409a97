// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for drive persistence and the student visibility filter.

use time::Month;

use super::{
    create_company, create_student, create_test_persistence, create_visible_drive, date,
    sample_drive, today,
};
use crate::{BrowseFilter, DriveData, DriveListing, Persistence, PersistenceError};

#[test]
fn test_insert_drive_starts_active_and_unapproved() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, company) = create_company(&mut persistence, "acme", "Acme");

    let drive_id: i64 = persistence
        .insert_drive(company, &sample_drive("Backend Engineer", date(2026, Month::July, 1)))
        .unwrap();

    let drive: DriveData = persistence.get_drive(drive_id).unwrap().unwrap();
    assert!(drive.is_active);
    assert!(!drive.is_approved);
    assert_eq!(drive.company_profile_id, company);
    assert_eq!(drive.deadline, date(2026, Month::July, 1));
    assert_eq!(drive.salary.as_deref(), Some("12 LPA"));
}

#[test]
fn test_update_drive_keeps_flags() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, company) = create_company(&mut persistence, "acme", "Acme");
    let drive_id: i64 = create_visible_drive(&mut persistence, company, "Backend Engineer");

    let fields = sample_drive("Senior Backend Engineer", date(2026, Month::August, 15));
    persistence.update_drive(drive_id, &fields).unwrap();

    let drive: DriveData = persistence.get_drive(drive_id).unwrap().unwrap();
    assert_eq!(drive.title, "Senior Backend Engineer");
    assert_eq!(drive.deadline, date(2026, Month::August, 15));
    assert!(drive.is_approved);
    assert!(drive.is_active);
}

#[test]
fn test_toggle_drive_active_does_not_touch_approval() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, company) = create_company(&mut persistence, "acme", "Acme");
    let drive_id: i64 = create_visible_drive(&mut persistence, company, "Backend Engineer");

    assert!(!persistence.toggle_drive_active(drive_id).unwrap());
    assert!(persistence.toggle_drive_active(drive_id).unwrap());
    assert!(persistence.get_drive(drive_id).unwrap().unwrap().is_approved);
}

#[test]
fn test_missing_drive_mutations_are_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    assert!(matches!(persistence.toggle_drive_active(42), Err(PersistenceError::NotFound(_))));
    assert!(matches!(persistence.set_drive_approval(42, true), Err(PersistenceError::NotFound(_))));
    assert!(matches!(persistence.delete_drive(42), Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_drive_removes_its_applications_only() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, company) = create_company(&mut persistence, "acme", "Acme");
    let doomed: i64 = create_visible_drive(&mut persistence, company, "Doomed");
    let kept: i64 = create_visible_drive(&mut persistence, company, "Kept");
    let alice: i64 = create_student(&mut persistence, "alice", "R001");
    let bob: i64 = create_student(&mut persistence, "bob", "R002");

    let a1: i64 = persistence.create_application(doomed, alice, None).unwrap();
    let a2: i64 = persistence.create_application(doomed, bob, None).unwrap();
    let a3: i64 = persistence.create_application(kept, alice, None).unwrap();

    let removed: usize = persistence.delete_drive(doomed).unwrap();

    assert_eq!(removed, 2);
    assert!(persistence.get_drive(doomed).unwrap().is_none());
    assert!(persistence.get_application(a1).unwrap().is_none());
    assert!(persistence.get_application(a2).unwrap().is_none());
    assert!(persistence.get_application(a3).unwrap().is_some());
}

#[test]
fn test_list_drives_for_company_newest_first() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, acme) = create_company(&mut persistence, "acme", "Acme");
    let (_, globex) = create_company(&mut persistence, "globex", "Globex");

    let first: i64 = create_visible_drive(&mut persistence, acme, "First");
    let second: i64 = create_visible_drive(&mut persistence, acme, "Second");
    create_visible_drive(&mut persistence, globex, "Other");

    let ids: Vec<i64> = persistence
        .list_drives_for_company(acme)
        .unwrap()
        .into_iter()
        .map(|d| d.job_posting_id)
        .collect();

    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_browse_applies_visibility_rule() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, company) = create_company(&mut persistence, "acme", "Acme");

    let visible: i64 = create_visible_drive(&mut persistence, company, "Visible");

    let unapproved: i64 = persistence
        .insert_drive(company, &sample_drive("Unapproved", date(2026, Month::July, 1)))
        .unwrap();

    let inactive: i64 = create_visible_drive(&mut persistence, company, "Inactive");
    persistence.toggle_drive_active(inactive).unwrap();

    let expired: i64 = persistence
        .insert_drive(company, &sample_drive("Expired", date(2026, Month::May, 31)))
        .unwrap();
    persistence.set_drive_approval(expired, true).unwrap();

    let due_today: i64 = persistence
        .insert_drive(company, &sample_drive("Due Today", today()))
        .unwrap();
    persistence.set_drive_approval(due_today, true).unwrap();

    let listed: Vec<i64> = persistence
        .browse_drives(&BrowseFilter::default(), today())
        .unwrap()
        .into_iter()
        .map(|l| l.drive.job_posting_id)
        .collect();

    assert!(listed.contains(&visible));
    assert!(listed.contains(&due_today));
    assert!(!listed.contains(&unapproved));
    assert!(!listed.contains(&inactive));
    assert!(!listed.contains(&expired));
}

#[test]
fn test_browse_filters_are_anded() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, acme) = create_company(&mut persistence, "acme", "Acme Robotics");

    let mut remote = sample_drive("Rust Developer", date(2026, Month::July, 1));
    remote.location = String::from("Remote");
    remote.job_type = String::from("Internship");
    let remote_id: i64 = persistence.insert_drive(acme, &remote).unwrap();
    persistence.set_drive_approval(remote_id, true).unwrap();

    create_visible_drive(&mut persistence, acme, "Rust Developer");

    let filter: BrowseFilter = BrowseFilter {
        term: Some(String::from("rust")),
        job_type: Some(String::from("Internship")),
        location: Some(String::from("mot")),
    };
    let listings: Vec<DriveListing> = persistence.browse_drives(&filter, today()).unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].drive.job_posting_id, remote_id);
    assert_eq!(listings[0].company_name, "Acme Robotics");

    let by_company: BrowseFilter = BrowseFilter {
        term: Some(String::from("ROBOTICS")),
        ..BrowseFilter::default()
    };
    assert_eq!(persistence.browse_drives(&by_company, today()).unwrap().len(), 2);

    let wrong_type: BrowseFilter = BrowseFilter {
        job_type: Some(String::from("intern")),
        ..BrowseFilter::default()
    };
    assert!(persistence.browse_drives(&wrong_type, today()).unwrap().is_empty());
}

#[test]
fn test_get_drive_listing_includes_company_name() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, company) = create_company(&mut persistence, "acme", "Acme");
    let drive_id: i64 = create_visible_drive(&mut persistence, company, "Backend Engineer");

    let listing: DriveListing = persistence.get_drive_listing(drive_id).unwrap().unwrap();
    assert_eq!(listing.company_name, "Acme");
    assert!(persistence.get_drive_listing(drive_id + 1).unwrap().is_none());
}
