// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::persistence;
use crate::PersistenceError;
use seva_roster_domain::{Volunteer, VolunteerStatus};

#[test]
fn test_new_volunteer_starts_pending() {
    let mut persistence = persistence();

    let volunteer_id: i64 = persistence
        .create_volunteer("1111111111", "Sonia", false)
        .unwrap();

    let volunteer: Volunteer = persistence.get_volunteer(volunteer_id).unwrap().unwrap();
    assert_eq!(volunteer.status, VolunteerStatus::Pending);
    assert_eq!(volunteer.phone, "1111111111");
    assert_eq!(volunteer.name, "Sonia");
    assert!(!volunteer.is_coordinator);
}

#[test]
fn test_duplicate_phone_rejected() {
    let mut persistence = persistence();
    persistence
        .create_volunteer("1111111111", "Sonia", false)
        .unwrap();

    let result = persistence.create_volunteer("1111111111", "Impostor", false);

    assert_eq!(
        result,
        Err(PersistenceError::DuplicatePhone(String::from("1111111111")))
    );
}

#[test]
fn test_approve_volunteer() {
    let mut persistence = persistence();
    let coordinator_id: i64 = persistence
        .create_volunteer("1111111111", "Sonia", true)
        .unwrap();
    let volunteer_id: i64 = persistence
        .create_volunteer("3333333333", "Ganesh", false)
        .unwrap();

    persistence
        .approve_volunteer(volunteer_id, coordinator_id)
        .unwrap();

    let volunteer: Volunteer = persistence.get_volunteer(volunteer_id).unwrap().unwrap();
    assert_eq!(volunteer.status, VolunteerStatus::Approved);
}

#[test]
fn test_reject_volunteer() {
    let mut persistence = persistence();
    let volunteer_id: i64 = persistence
        .create_volunteer("3333333333", "Ganesh", false)
        .unwrap();

    persistence.reject_volunteer(volunteer_id).unwrap();

    let volunteer: Volunteer = persistence.get_volunteer(volunteer_id).unwrap().unwrap();
    assert_eq!(volunteer.status, VolunteerStatus::Rejected);
}

#[test]
fn test_approve_missing_volunteer_fails() {
    let mut persistence = persistence();

    let result = persistence.approve_volunteer(404, 1);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_lookup_by_phone() {
    let mut persistence = persistence();
    let volunteer_id: i64 = persistence
        .create_volunteer("4444444444", "Anita", false)
        .unwrap();

    let volunteer: Volunteer = persistence
        .get_volunteer_by_phone("4444444444")
        .unwrap()
        .unwrap();
    assert_eq!(volunteer.volunteer_id, Some(volunteer_id));

    assert!(persistence.get_volunteer_by_phone("0000000000").unwrap().is_none());
}

#[test]
fn test_removed_volunteer_does_not_resolve() {
    let mut persistence = persistence();
    let volunteer_id: i64 = persistence
        .create_volunteer("5555555555", "Bhawna", false)
        .unwrap();

    persistence.remove_volunteer(volunteer_id).unwrap();

    assert!(persistence.get_volunteer(volunteer_id).unwrap().is_none());
    assert!(persistence.get_volunteer_by_phone("5555555555").unwrap().is_none());

    // Removing again fails: the row no longer counts as active.
    let result = persistence.remove_volunteer(volunteer_id);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_list_volunteers_by_status() {
    let mut persistence = persistence();
    let pending_id: i64 = persistence
        .create_volunteer("6666666666", "Seema", false)
        .unwrap();
    let approved_id: i64 = persistence
        .create_volunteer("7777777777", "Mili", false)
        .unwrap();
    persistence.approve_volunteer(approved_id, 1).unwrap();

    let pending: Vec<_> = persistence
        .list_volunteers(Some(VolunteerStatus::Pending))
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].volunteer_id, Some(pending_id));

    let approved: Vec<_> = persistence
        .list_volunteers(Some(VolunteerStatus::Approved))
        .unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].volunteer_id, Some(approved_id));

    let all: Vec<_> = persistence.list_volunteers(None).unwrap();
    assert_eq!(all.len(), 2);
}
