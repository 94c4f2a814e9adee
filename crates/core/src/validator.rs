// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Signup validation orchestrator.
//!
//! Combines live counts from a [`CountingProvider`] with the pure phase
//! classifier and rule predicates from the domain crate into a single
//! [`validate_signup`] entry point returning a list of violations. An
//! empty list means the signup is permitted.
//!
//! ## Ordering
//!
//! Violations are accumulated in a fixed order: the volunteer-approval
//! gate short-circuits everything else, then capacity, then the phase's
//! quota rules (kakad, robe, Thursday, Phase-1 total in Phase 1;
//! Phase-2 additional, running total in Phase 2). Multiple violations may
//! be returned; callers decide how to present them.

use crate::counts::CountingProvider;
use crate::error::CoreError;
use chrono::{Datelike, NaiveDate, Weekday};
use seva_roster_domain::{
    KAKAD_LIMIT, PHASE1_TOTAL_LIMIT, PHASE2_ADDITIONAL_LIMIT, ROBE_LIMIT, RUNNING_TOTAL_LIMIT,
    RuleResult, Shift, ShiftCategory, SignupPhase, THURSDAY_LIMIT, VolunteerStatus,
    check_capacity, check_kakad_limit, check_phase1_total, check_phase2_additional,
    check_robe_limit, check_running_total, check_thursday_limit, classify_phase, month_start_of,
};

/// Violation reason for volunteers outside the `approved` state.
const NOT_APPROVED_REASON: &str = "Volunteer is not approved to sign up";

/// Violation reason for attempts before the signup window opens.
const NOT_OPEN_REASON: &str = "Signups are not open yet for this month";

/// Validates a signup attempt and returns the list of violations.
///
/// An empty list means the signup is permitted. All counts are scoped to
/// the calendar month containing the candidate shift's date and exclude
/// dropped signups.
///
/// This function performs no writes; callers create the signup only after
/// an empty violation list, and the storage layer's uniqueness constraint
/// covers the remaining check-then-act window.
///
/// # Arguments
///
/// * `provider` - The counting collaborator backed by storage
/// * `volunteer_id` - The volunteer attempting to sign up
/// * `shift_id` - The candidate shift
/// * `today` - The date of the attempt; passed explicitly so phase
///   determination is deterministic and testable
///
/// # Errors
///
/// Returns `CoreError::ShiftNotFound` if the shift does not exist —
/// callers must have resolved the shift already, so this is a contract
/// violation, not a validation outcome. Returns `CoreError::Storage` if a
/// counting query fails.
pub fn validate_signup<P: CountingProvider + ?Sized>(
    provider: &mut P,
    volunteer_id: i64,
    shift_id: i64,
    today: NaiveDate,
) -> Result<Vec<RuleResult>, CoreError> {
    // Approval gate: short-circuits every other rule, including capacity.
    let status: Option<VolunteerStatus> = provider.volunteer_status(volunteer_id)?;
    if status != Some(VolunteerStatus::Approved) {
        return Ok(vec![RuleResult::denied(String::from(NOT_APPROVED_REASON))]);
    }

    let shift: Shift = provider
        .shift(shift_id)?
        .ok_or(CoreError::ShiftNotFound(shift_id))?;

    let month_start: NaiveDate = month_start_of(shift.date);
    let year: i32 = month_start.year();
    let month: u32 = month_start.month();
    let phase: SignupPhase = classify_phase(today, month_start);

    let mut violations: Vec<RuleResult> = Vec::new();

    // Capacity is evaluated in every phase.
    let shift_signups: i64 = provider.shift_signup_count(shift_id)?;
    let capacity_result: RuleResult = check_capacity(shift_signups, shift.capacity);
    if !capacity_result.allowed {
        violations.push(capacity_result);
    }

    match phase {
        // Before the window opens the signup is denied regardless of
        // capacity status, so the "not open" violation is always present.
        SignupPhase::Blocked => {
            violations.push(RuleResult::denied(String::from(NOT_OPEN_REASON)));
        }
        SignupPhase::Phase1 => {
            if shift.category == ShiftCategory::Kakad {
                let kakad: i64 =
                    provider.signup_count(volunteer_id, year, month, Some(ShiftCategory::Kakad))?;
                let result: RuleResult = check_kakad_limit(kakad, KAKAD_LIMIT);
                if !result.allowed {
                    violations.push(result);
                }
            }

            if shift.category == ShiftCategory::Robe {
                let robe: i64 =
                    provider.signup_count(volunteer_id, year, month, Some(ShiftCategory::Robe))?;
                let result: RuleResult = check_robe_limit(robe, ROBE_LIMIT);
                if !result.allowed {
                    violations.push(result);
                }
            }

            // Thursday limit applies only when the candidate shift itself
            // falls on a Thursday.
            if shift.date.weekday() == Weekday::Thu {
                let thursdays: i64 = provider.thursday_signup_count(volunteer_id, year, month)?;
                let result: RuleResult = check_thursday_limit(thursdays, THURSDAY_LIMIT);
                if !result.allowed {
                    violations.push(result);
                }
            }

            let total: i64 = provider.signup_count(volunteer_id, year, month, None)?;
            let result: RuleResult = check_phase1_total(total, PHASE1_TOTAL_LIMIT);
            if !result.allowed {
                violations.push(result);
            }
        }
        SignupPhase::Phase2 => {
            let phase2: i64 = provider.phase2_window_signup_count(volunteer_id, year, month)?;
            let result: RuleResult = check_phase2_additional(phase2, PHASE2_ADDITIONAL_LIMIT);
            if !result.allowed {
                violations.push(result);
            }

            let total: i64 = provider.signup_count(volunteer_id, year, month, None)?;
            let result: RuleResult = check_running_total(total, RUNNING_TOTAL_LIMIT);
            if !result.allowed {
                violations.push(result);
            }
        }
        // Once the month has started only capacity matters.
        SignupPhase::MidMonth => {}
    }

    Ok(violations)
}
