// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{approved_volunteer, date, persistence, shift_on};
use crate::PersistenceError;
use seva_roster_domain::{Shift, ShiftCategory};

#[test]
fn test_create_and_get_shift() {
    let mut persistence = persistence();

    let shift_id: i64 = shift_on(&mut persistence, date(2026, 3, 2), ShiftCategory::Kakad, 1);

    let shift: Shift = persistence.get_shift(shift_id).unwrap().unwrap();
    assert_eq!(shift.date, date(2026, 3, 2));
    assert_eq!(shift.category, ShiftCategory::Kakad);
    assert_eq!(shift.capacity, 1);
}

#[test]
fn test_missing_shift_is_none() {
    let mut persistence = persistence();

    assert!(persistence.get_shift(404).unwrap().is_none());
}

#[test]
fn test_duplicate_date_category_rejected() {
    let mut persistence = persistence();
    shift_on(&mut persistence, date(2026, 3, 2), ShiftCategory::Kakad, 1);

    let result = persistence.create_shift(date(2026, 3, 2), ShiftCategory::Kakad, 2);

    assert_eq!(
        result,
        Err(PersistenceError::DuplicateShift {
            date: String::from("2026-03-02"),
            category: String::from("kakad"),
        })
    );
}

#[test]
fn test_same_day_different_category_allowed() {
    let mut persistence = persistence();
    shift_on(&mut persistence, date(2026, 3, 2), ShiftCategory::Kakad, 1);
    shift_on(&mut persistence, date(2026, 3, 2), ShiftCategory::Robe, 3);

    let shifts: Vec<Shift> = persistence.list_shifts_in_month(2026, 3).unwrap();
    assert_eq!(shifts.len(), 2);
}

#[test]
fn test_get_shift_by_date_category() {
    let mut persistence = persistence();
    let shift_id: i64 = shift_on(&mut persistence, date(2026, 3, 2), ShiftCategory::Robe, 3);

    let shift: Shift = persistence
        .get_shift_by_date_category(date(2026, 3, 2), ShiftCategory::Robe)
        .unwrap()
        .unwrap();
    assert_eq!(shift.shift_id, Some(shift_id));

    assert!(
        persistence
            .get_shift_by_date_category(date(2026, 3, 2), ShiftCategory::Kakad)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_list_shifts_in_month_is_month_scoped_and_ordered() {
    let mut persistence = persistence();
    shift_on(&mut persistence, date(2026, 3, 9), ShiftCategory::Kakad, 1);
    shift_on(&mut persistence, date(2026, 3, 2), ShiftCategory::Robe, 3);
    shift_on(&mut persistence, date(2026, 3, 2), ShiftCategory::Kakad, 1);
    shift_on(&mut persistence, date(2026, 4, 1), ShiftCategory::Kakad, 1);

    let shifts: Vec<Shift> = persistence.list_shifts_in_month(2026, 3).unwrap();

    assert_eq!(shifts.len(), 3);
    assert_eq!(shifts[0].date, date(2026, 3, 2));
    assert_eq!(shifts[0].category, ShiftCategory::Kakad);
    assert_eq!(shifts[1].date, date(2026, 3, 2));
    assert_eq!(shifts[1].category, ShiftCategory::Robe);
    assert_eq!(shifts[2].date, date(2026, 3, 9));
}

#[test]
fn test_month_fill_counts_active_signups() {
    let mut persistence = persistence();
    let volunteer_a: i64 = approved_volunteer(&mut persistence, "1111111111", "Sonia");
    let volunteer_b: i64 = approved_volunteer(&mut persistence, "2222222222", "Raghu");
    let robe_id: i64 = shift_on(&mut persistence, date(2026, 3, 3), ShiftCategory::Robe, 4);
    let kakad_id: i64 = shift_on(&mut persistence, date(2026, 3, 3), ShiftCategory::Kakad, 1);

    persistence.create_signup(volunteer_a, robe_id).unwrap();
    persistence.create_signup(volunteer_b, robe_id).unwrap();
    persistence.create_signup(volunteer_a, kakad_id).unwrap();
    persistence.drop_signup(volunteer_a, kakad_id).unwrap();

    let fill: Vec<(Shift, i64)> = persistence.month_fill(2026, 3).unwrap();

    assert_eq!(fill.len(), 2);
    // Ordered by date then category: kakad before robe.
    assert_eq!(fill[0].0.shift_id, Some(kakad_id));
    assert_eq!(fill[0].1, 0);
    assert_eq!(fill[1].0.shift_id, Some(robe_id));
    assert_eq!(fill[1].1, 2);
}
