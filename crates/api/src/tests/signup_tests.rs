// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Signup handler tests.
//!
//! Shift month is March 2026; 2026-02-22 is the last Phase-1 day and
//! 2026-03-05 is mid-month.

use super::helpers::{approved_volunteer, coordinator, date, persistence};
use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{
    CreateShiftRequest, DropSignupRequest, SignupOutcome, SignupRequest,
};
use chrono::NaiveDate;
use seva_roster_persistence::Persistence;

fn phase1_today() -> NaiveDate {
    date(2026, 2, 22)
}

fn mid_month_today() -> NaiveDate {
    date(2026, 3, 5)
}

fn kakad_shift(persistence: &mut Persistence, day: u32, capacity: i64) -> i64 {
    handlers::create_shift(
        persistence,
        &CreateShiftRequest {
            date: date(2026, 3, day),
            category: String::from("kakad"),
            capacity: Some(capacity),
        },
    )
    .unwrap()
    .shift_id
}

#[test]
fn test_signup_created_when_rules_pass() {
    let mut persistence = persistence();
    let coordinator_id: i64 = coordinator(&mut persistence, "1111111111", "Sonia");
    let volunteer_id: i64 =
        approved_volunteer(&mut persistence, coordinator_id, "3333333333", "Ganesh");
    let shift_id: i64 = kakad_shift(&mut persistence, 2, 10);

    let outcome = handlers::request_signup(
        &mut persistence,
        &SignupRequest {
            volunteer_id,
            shift_id,
        },
        phase1_today(),
    )
    .unwrap();

    assert!(matches!(outcome, SignupOutcome::Created { .. }));
    assert_eq!(persistence.shift_signup_count(shift_id).unwrap(), 1);
}

#[test]
fn test_rejection_carries_violations_and_stores_nothing() {
    let mut persistence = persistence();
    let coordinator_id: i64 = coordinator(&mut persistence, "1111111111", "Sonia");
    let volunteer_id: i64 =
        approved_volunteer(&mut persistence, coordinator_id, "3333333333", "Ganesh");

    // Two kakad signups already held; a third violates the kakad limit.
    for day in [2, 3] {
        let shift_id: i64 = kakad_shift(&mut persistence, day, 10);
        handlers::request_signup(
            &mut persistence,
            &SignupRequest {
                volunteer_id,
                shift_id,
            },
            phase1_today(),
        )
        .unwrap();
    }
    let candidate: i64 = kakad_shift(&mut persistence, 4, 10);

    let outcome = handlers::request_signup(
        &mut persistence,
        &SignupRequest {
            volunteer_id,
            shift_id: candidate,
        },
        phase1_today(),
    )
    .unwrap();

    match outcome {
        SignupOutcome::Rejected { violations } => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].reason, "Kakad limit reached (2/2)");
        }
        SignupOutcome::Created { .. } => panic!("signup should have been rejected"),
    }
    assert_eq!(persistence.shift_signup_count(candidate).unwrap(), 0);
}

#[test]
fn test_pending_volunteer_rejected_as_data() {
    let mut persistence = persistence();
    let response = handlers::register_volunteer(
        &mut persistence,
        &crate::request_response::RegisterVolunteerRequest {
            phone: String::from("4444444444"),
            name: String::from("Anita"),
            is_coordinator: false,
        },
    )
    .unwrap();
    let shift_id: i64 = kakad_shift(&mut persistence, 2, 10);

    let outcome = handlers::request_signup(
        &mut persistence,
        &SignupRequest {
            volunteer_id: response.volunteer_id,
            shift_id,
        },
        mid_month_today(),
    )
    .unwrap();

    match outcome {
        SignupOutcome::Rejected { violations } => {
            assert_eq!(violations.len(), 1);
            assert!(violations[0].reason.contains("not approved"));
        }
        SignupOutcome::Created { .. } => panic!("signup should have been rejected"),
    }
}

#[test]
fn test_missing_shift_is_resource_not_found() {
    let mut persistence = persistence();
    let coordinator_id: i64 = coordinator(&mut persistence, "1111111111", "Sonia");
    let volunteer_id: i64 =
        approved_volunteer(&mut persistence, coordinator_id, "3333333333", "Ganesh");

    let result = handlers::request_signup(
        &mut persistence,
        &SignupRequest {
            volunteer_id,
            shift_id: 404,
        },
        phase1_today(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Shift"
    ));
}

#[test]
fn test_duplicate_signup_is_rule_violation() {
    let mut persistence = persistence();
    let coordinator_id: i64 = coordinator(&mut persistence, "1111111111", "Sonia");
    let volunteer_id: i64 =
        approved_volunteer(&mut persistence, coordinator_id, "3333333333", "Ganesh");
    let shift_id: i64 = kakad_shift(&mut persistence, 2, 10);
    let request = SignupRequest {
        volunteer_id,
        shift_id,
    };

    handlers::request_signup(&mut persistence, &request, mid_month_today()).unwrap();
    let result = handlers::request_signup(&mut persistence, &request, mid_month_today());

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_signup"
    ));
}

#[test]
fn test_drop_then_rejoin() {
    let mut persistence = persistence();
    let coordinator_id: i64 = coordinator(&mut persistence, "1111111111", "Sonia");
    let volunteer_id: i64 =
        approved_volunteer(&mut persistence, coordinator_id, "3333333333", "Ganesh");
    let shift_id: i64 = kakad_shift(&mut persistence, 2, 1);
    let request = SignupRequest {
        volunteer_id,
        shift_id,
    };

    handlers::request_signup(&mut persistence, &request, mid_month_today()).unwrap();
    handlers::drop_signup(
        &mut persistence,
        &DropSignupRequest {
            volunteer_id,
            shift_id,
        },
    )
    .unwrap();

    let outcome =
        handlers::request_signup(&mut persistence, &request, mid_month_today()).unwrap();

    assert!(matches!(outcome, SignupOutcome::Created { .. }));
}

#[test]
fn test_drop_without_signup_is_not_found() {
    let mut persistence = persistence();
    let coordinator_id: i64 = coordinator(&mut persistence, "1111111111", "Sonia");
    let volunteer_id: i64 =
        approved_volunteer(&mut persistence, coordinator_id, "3333333333", "Ganesh");
    let shift_id: i64 = kakad_shift(&mut persistence, 2, 1);

    let result = handlers::drop_signup(
        &mut persistence,
        &DropSignupRequest {
            volunteer_id,
            shift_id,
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Signup"
    ));
}

#[test]
fn test_my_shifts_roster() {
    let mut persistence = persistence();
    let coordinator_id: i64 = coordinator(&mut persistence, "1111111111", "Sonia");
    let volunteer_id: i64 =
        approved_volunteer(&mut persistence, coordinator_id, "3333333333", "Ganesh");
    let shift_id: i64 = kakad_shift(&mut persistence, 2, 10);
    handlers::request_signup(
        &mut persistence,
        &SignupRequest {
            volunteer_id,
            shift_id,
        },
        mid_month_today(),
    )
    .unwrap();

    let roster = handlers::my_shifts(&mut persistence, volunteer_id, 2026, 3).unwrap();

    assert_eq!(roster.shifts.len(), 1);
    assert_eq!(roster.shifts[0].shift_id, shift_id);
    assert_eq!(roster.shifts[0].date, date(2026, 3, 2));

    let result = handlers::my_shifts(&mut persistence, 404, 2026, 3);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
