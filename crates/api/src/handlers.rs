// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers translate requests into domain types, run validation,
//! perform the storage call, and translate every lower-layer error into
//! an [`ApiError`]. Signup denials are never errors: they surface as
//! [`SignupOutcome::Rejected`] carrying the violation list.

use chrono::{Datelike, NaiveDate};
use std::str::FromStr;
use tracing::info;

use seva_roster::validate_signup;
use seva_roster_domain::{
    RuleResult, Shift, ShiftCategory, Volunteer, VolunteerStatus, days_in_month,
    default_capacity, validate_shift_capacity, validate_volunteer_fields,
};
use seva_roster_persistence::{Persistence, PersistenceError};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    CreateShiftRequest, CreateShiftResponse, DropSignupRequest, MonthStatusResponse,
    MyShiftsResponse, RegisterVolunteerRequest, RegisterVolunteerResponse, RosterEntry,
    SeedMonthResponse, ShiftFillInfo, SignupOutcome, SignupRequest, VolunteerInfo,
};

/// Validates a calendar month number.
fn validate_month(month: u32) -> Result<(), ApiError> {
    if !(1..=12).contains(&month) {
        return Err(ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid month: {month}. Must be between 1 and 12"),
        });
    }
    Ok(())
}

/// Loads a volunteer and requires coordinator privileges.
///
/// Coordinator-gated actions (approve, reject, remove) call this before
/// touching the target volunteer.
fn require_coordinator(
    persistence: &mut Persistence,
    volunteer_id: i64,
    action: &str,
) -> Result<Volunteer, ApiError> {
    let volunteer: Volunteer = persistence
        .get_volunteer(volunteer_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Unauthorized {
            action: action.to_string(),
        })?;

    if !volunteer.is_coordinator {
        return Err(ApiError::Unauthorized {
            action: action.to_string(),
        });
    }

    Ok(volunteer)
}

/// Registers a new volunteer in the `pending` state.
///
/// # Errors
///
/// Returns an error if the fields are invalid or the phone number is
/// already registered.
pub fn register_volunteer(
    persistence: &mut Persistence,
    request: &RegisterVolunteerRequest,
) -> Result<RegisterVolunteerResponse, ApiError> {
    validate_volunteer_fields(&request.phone, &request.name).map_err(translate_domain_error)?;

    let volunteer_id: i64 = persistence
        .create_volunteer(&request.phone, &request.name, request.is_coordinator)
        .map_err(translate_persistence_error)?;

    info!(volunteer_id, phone = %request.phone, "Registered volunteer");

    Ok(RegisterVolunteerResponse {
        volunteer_id,
        phone: request.phone.clone(),
        name: request.name.clone(),
        status: VolunteerStatus::Pending,
        message: format!("Registered '{}'; awaiting coordinator approval", request.name),
    })
}

/// Approves a pending volunteer. Coordinator-gated.
///
/// # Errors
///
/// Returns an error if the approver is not a coordinator or the target
/// volunteer does not exist.
pub fn approve_volunteer(
    persistence: &mut Persistence,
    volunteer_id: i64,
    approver_id: i64,
) -> Result<VolunteerInfo, ApiError> {
    require_coordinator(persistence, approver_id, "approve_volunteer")?;

    persistence
        .approve_volunteer(volunteer_id, approver_id)
        .map_err(translate_persistence_error)?;

    let volunteer: Volunteer = persistence
        .get_volunteer(volunteer_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Volunteer"),
            message: format!("Volunteer {volunteer_id} does not exist"),
        })?;

    Ok(VolunteerInfo::from_volunteer(&volunteer))
}

/// Rejects a pending volunteer. Coordinator-gated.
///
/// # Errors
///
/// Returns an error if the approver is not a coordinator or the target
/// volunteer does not exist.
pub fn reject_volunteer(
    persistence: &mut Persistence,
    volunteer_id: i64,
    approver_id: i64,
) -> Result<VolunteerInfo, ApiError> {
    require_coordinator(persistence, approver_id, "reject_volunteer")?;

    persistence
        .reject_volunteer(volunteer_id)
        .map_err(translate_persistence_error)?;

    let volunteer: Volunteer = persistence
        .get_volunteer(volunteer_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Volunteer"),
            message: format!("Volunteer {volunteer_id} does not exist"),
        })?;

    Ok(VolunteerInfo::from_volunteer(&volunteer))
}

/// Soft-removes a volunteer. Coordinator-gated.
///
/// # Errors
///
/// Returns an error if the approver is not a coordinator or the target
/// volunteer does not exist.
pub fn remove_volunteer(
    persistence: &mut Persistence,
    volunteer_id: i64,
    approver_id: i64,
) -> Result<(), ApiError> {
    require_coordinator(persistence, approver_id, "remove_volunteer")?;

    persistence
        .remove_volunteer(volunteer_id)
        .map_err(translate_persistence_error)
}

/// Lists active volunteers, optionally filtered by status.
///
/// # Errors
///
/// Returns an error if the status string is invalid or the query fails.
pub fn list_volunteers(
    persistence: &mut Persistence,
    status: Option<&str>,
) -> Result<Vec<VolunteerInfo>, ApiError> {
    let status: Option<VolunteerStatus> = status
        .map(VolunteerStatus::from_str)
        .transpose()
        .map_err(translate_domain_error)?;

    let volunteers: Vec<Volunteer> = persistence
        .list_volunteers(status)
        .map_err(translate_persistence_error)?;

    Ok(volunteers.iter().map(VolunteerInfo::from_volunteer).collect())
}

/// Creates a single shift.
///
/// When no capacity is given, the category's seeded default for the
/// date's weekday applies (kakad 1; robe 3 or 4).
///
/// # Errors
///
/// Returns an error if the category or capacity is invalid, or a shift
/// already exists for the `(date, category)` pair.
pub fn create_shift(
    persistence: &mut Persistence,
    request: &CreateShiftRequest,
) -> Result<CreateShiftResponse, ApiError> {
    let category: ShiftCategory =
        ShiftCategory::from_str(&request.category).map_err(translate_domain_error)?;

    let capacity: i64 = request
        .capacity
        .unwrap_or_else(|| default_capacity(category, request.date.weekday()));
    validate_shift_capacity(capacity).map_err(translate_domain_error)?;

    let shift_id: i64 = persistence
        .create_shift(request.date, category, capacity)
        .map_err(translate_persistence_error)?;

    Ok(CreateShiftResponse {
        shift_id,
        date: request.date,
        category,
        capacity,
    })
}

/// Seeds one kakad and one robe shift for every day of a month.
///
/// Idempotent: any `(date, category)` pair that already exists is
/// skipped. Returns the number of shifts created.
///
/// # Errors
///
/// Returns an error if the month is invalid or a storage call fails.
pub fn seed_month(
    persistence: &mut Persistence,
    year: i32,
    month: u32,
) -> Result<SeedMonthResponse, ApiError> {
    validate_month(month)?;
    let first_day: NaiveDate =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Invalid month {year}-{month}"),
        })?;

    let num_days: u32 = days_in_month(first_day);
    let mut created: usize = 0;

    for day in 1..=num_days {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };

        for category in [ShiftCategory::Kakad, ShiftCategory::Robe] {
            let existing: Option<Shift> = persistence
                .get_shift_by_date_category(date, category)
                .map_err(translate_persistence_error)?;
            if existing.is_some() {
                continue;
            }

            let capacity: i64 = default_capacity(category, date.weekday());
            persistence
                .create_shift(date, category, capacity)
                .map_err(translate_persistence_error)?;
            created += 1;
        }
    }

    info!(year, month, created, "Seeded month");

    Ok(SeedMonthResponse {
        year,
        month,
        created,
        message: format!("Created {created} shifts for {year:04}-{month:02}"),
    })
}

/// Validates a signup attempt and stores it when every rule passes.
///
/// Denials come back as [`SignupOutcome::Rejected`] with the violation
/// list; nothing is stored in that case. The storage layer's uniqueness
/// constraint covers the validate-then-insert race: a concurrent
/// duplicate surfaces as a `unique_signup` rule violation error rather
/// than a second row.
///
/// # Errors
///
/// Returns an error if the shift does not exist, the pair already has
/// an active signup, or a storage call fails.
pub fn request_signup(
    persistence: &mut Persistence,
    request: &SignupRequest,
    today: NaiveDate,
) -> Result<SignupOutcome, ApiError> {
    let violations: Vec<RuleResult> = validate_signup(
        persistence,
        request.volunteer_id,
        request.shift_id,
        today,
    )
    .map_err(translate_core_error)?;

    if !violations.is_empty() {
        info!(
            volunteer_id = request.volunteer_id,
            shift_id = request.shift_id,
            violations = violations.len(),
            "Signup rejected"
        );
        return Ok(SignupOutcome::Rejected { violations });
    }

    let signup_id: i64 = persistence
        .create_signup(request.volunteer_id, request.shift_id)
        .map_err(translate_persistence_error)?;

    info!(
        signup_id,
        volunteer_id = request.volunteer_id,
        shift_id = request.shift_id,
        "Signup created"
    );

    Ok(SignupOutcome::Created { signup_id })
}

/// Drops a volunteer's active signup for a shift.
///
/// # Errors
///
/// Returns an error if the pair has no active signup or a storage call
/// fails.
pub fn drop_signup(
    persistence: &mut Persistence,
    request: &DropSignupRequest,
) -> Result<(), ApiError> {
    persistence
        .drop_signup(request.volunteer_id, request.shift_id)
        .map_err(|err| match err {
            PersistenceError::NotFound(_) => ApiError::ResourceNotFound {
                resource_type: String::from("Signup"),
                message: format!(
                    "No active signup for volunteer {} on shift {}",
                    request.volunteer_id, request.shift_id
                ),
            },
            other => translate_persistence_error(other),
        })
}

/// Returns the coordinator fill-status view for a month.
///
/// # Errors
///
/// Returns an error if the month is invalid or the query fails.
pub fn month_status(
    persistence: &mut Persistence,
    year: i32,
    month: u32,
) -> Result<MonthStatusResponse, ApiError> {
    validate_month(month)?;

    let fill: Vec<(Shift, i64)> = persistence
        .month_fill(year, month)
        .map_err(translate_persistence_error)?;

    let shifts: Vec<ShiftFillInfo> = fill
        .into_iter()
        .map(|(shift, signed_up)| ShiftFillInfo {
            shift_id: shift.shift_id.unwrap_or_default(),
            date: shift.date,
            category: shift.category,
            capacity: shift.capacity,
            signed_up,
            is_full: signed_up >= shift.capacity,
        })
        .collect();

    Ok(MonthStatusResponse {
        year,
        month,
        shifts,
    })
}

/// Returns a volunteer's active signups for a month.
///
/// # Errors
///
/// Returns an error if the volunteer does not exist, the month is
/// invalid, or the query fails.
pub fn my_shifts(
    persistence: &mut Persistence,
    volunteer_id: i64,
    year: i32,
    month: u32,
) -> Result<MyShiftsResponse, ApiError> {
    validate_month(month)?;

    persistence
        .get_volunteer(volunteer_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Volunteer"),
            message: format!("Volunteer {volunteer_id} does not exist"),
        })?;

    let roster = persistence
        .list_volunteer_month(volunteer_id, year, month)
        .map_err(translate_persistence_error)?;

    let shifts: Vec<RosterEntry> = roster
        .into_iter()
        .map(|(signup, shift)| RosterEntry {
            shift_id: shift.shift_id.unwrap_or_default(),
            date: shift.date,
            category: shift.category,
            signed_up_at: signup.signed_up_at,
        })
        .collect();

    Ok(MyShiftsResponse {
        volunteer_id,
        year,
        month,
        shifts,
    })
}
