// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use chrono::{NaiveDate, NaiveDateTime};
use seva_roster_domain::{RuleResult, ShiftCategory, Volunteer, VolunteerStatus};

/// API request to register a new volunteer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterVolunteerRequest {
    /// The volunteer's phone number (unique).
    pub phone: String,
    /// The volunteer's display name.
    pub name: String,
    /// Whether the volunteer is a coordinator.
    #[serde(default)]
    pub is_coordinator: bool,
}

/// API response for a successful volunteer registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterVolunteerResponse {
    /// The canonical volunteer identifier.
    pub volunteer_id: i64,
    /// The volunteer's phone number.
    pub phone: String,
    /// The volunteer's display name.
    pub name: String,
    /// The volunteer's approval status (always `pending` on creation).
    pub status: VolunteerStatus,
    /// A success message.
    pub message: String,
}

/// Volunteer information for listings and lookups.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VolunteerInfo {
    /// The canonical volunteer identifier.
    pub volunteer_id: i64,
    /// The volunteer's phone number.
    pub phone: String,
    /// The volunteer's display name.
    pub name: String,
    /// Whether the volunteer is a coordinator.
    pub is_coordinator: bool,
    /// The volunteer's approval status.
    pub status: VolunteerStatus,
}

impl VolunteerInfo {
    /// Builds the DTO from a persisted domain volunteer.
    #[must_use]
    pub fn from_volunteer(volunteer: &Volunteer) -> Self {
        Self {
            volunteer_id: volunteer.volunteer_id.unwrap_or_default(),
            phone: volunteer.phone.clone(),
            name: volunteer.name.clone(),
            is_coordinator: volunteer.is_coordinator,
            status: volunteer.status,
        }
    }
}

/// API request to create a single shift.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateShiftRequest {
    /// The shift's calendar date.
    pub date: NaiveDate,
    /// The shift category string (`kakad` or `robe`).
    pub category: String,
    /// The shift capacity; defaults to the category's seeded capacity
    /// for the date's weekday when omitted.
    pub capacity: Option<i64>,
}

/// API response for a successful shift creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateShiftResponse {
    /// The canonical shift identifier.
    pub shift_id: i64,
    /// The shift's calendar date.
    pub date: NaiveDate,
    /// The shift category.
    pub category: ShiftCategory,
    /// The shift capacity.
    pub capacity: i64,
}

/// API response for month seeding.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeedMonthResponse {
    /// The seeded year.
    pub year: i32,
    /// The seeded month (1-12).
    pub month: u32,
    /// The number of shifts created (existing pairs are skipped).
    pub created: usize,
    /// A success message.
    pub message: String,
}

/// API request for a signup attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignupRequest {
    /// The volunteer signing up.
    pub volunteer_id: i64,
    /// The target shift.
    pub shift_id: i64,
}

/// The outcome of a signup attempt.
///
/// Rule denials are data, not errors: a rejected attempt carries the
/// full violation list so callers can present every reason at once.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SignupOutcome {
    /// All applicable rules passed and the signup was stored.
    Created {
        /// The canonical signup identifier.
        signup_id: i64,
    },
    /// One or more rules denied the signup; nothing was stored.
    Rejected {
        /// The violations, in evaluation order.
        violations: Vec<RuleResult>,
    },
}

/// API request to drop a signup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DropSignupRequest {
    /// The volunteer dropping out.
    pub volunteer_id: i64,
    /// The shift being dropped.
    pub shift_id: i64,
}

/// One shift in the coordinator fill-status view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShiftFillInfo {
    /// The canonical shift identifier.
    pub shift_id: i64,
    /// The shift's calendar date.
    pub date: NaiveDate,
    /// The shift category.
    pub category: ShiftCategory,
    /// The shift capacity.
    pub capacity: i64,
    /// The number of active signups.
    pub signed_up: i64,
    /// Whether the shift has no remaining slots.
    pub is_full: bool,
}

/// API response for the coordinator month fill-status view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MonthStatusResponse {
    /// The queried year.
    pub year: i32,
    /// The queried month (1-12).
    pub month: u32,
    /// Every shift in the month with its fill state.
    pub shifts: Vec<ShiftFillInfo>,
}

/// One entry in a volunteer's month roster.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterEntry {
    /// The canonical shift identifier.
    pub shift_id: i64,
    /// The shift's calendar date.
    pub date: NaiveDate,
    /// The shift category.
    pub category: ShiftCategory,
    /// When the volunteer signed up.
    pub signed_up_at: NaiveDateTime,
}

/// API response for a volunteer's month roster.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MyShiftsResponse {
    /// The volunteer the roster belongs to.
    pub volunteer_id: i64,
    /// The queried year.
    pub year: i32,
    /// The queried month (1-12).
    pub month: u32,
    /// The volunteer's active signups, ordered by shift date.
    pub shifts: Vec<RosterEntry>,
}
