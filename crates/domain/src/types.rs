// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two fixed shift categories.
///
/// The roster offers exactly one kakad and one robe shift per calendar
/// day, each with its own monthly quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftCategory {
    /// Early-morning kakad shift.
    Kakad,
    /// Robe shift.
    Robe,
}

impl FromStr for ShiftCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kakad" => Ok(Self::Kakad),
            "robe" => Ok(Self::Robe),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ShiftCategory {
    /// Converts this category to its storage string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kakad => "kakad",
            Self::Robe => "robe",
        }
    }
}

/// Approval lifecycle state of a volunteer.
///
/// Only `Approved` volunteers may pass signup validation. Registration
/// creates volunteers in the `Pending` state; a coordinator moves them
/// to `Approved` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    /// Registered, awaiting coordinator review.
    #[default]
    Pending,
    /// Cleared to sign up for shifts.
    Approved,
    /// Declined by a coordinator.
    Rejected,
}

impl FromStr for VolunteerStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl VolunteerStatus {
    /// Converts this status to its storage string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A registered volunteer.
///
/// `volunteer_id` is the canonical identifier assigned by the database.
/// `None` indicates the volunteer has not been persisted yet. Phone numbers
/// are unique and are the handle coordinators use to refer to volunteers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    /// The canonical numeric identifier assigned by the database.
    pub volunteer_id: Option<i64>,
    /// The volunteer's phone number (unique).
    pub phone: String,
    /// The volunteer's display name.
    pub name: String,
    /// Whether this volunteer has coordinator privileges.
    pub is_coordinator: bool,
    /// The approval lifecycle state.
    pub status: VolunteerStatus,
}

impl Volunteer {
    /// Creates a new `Volunteer` without a persisted ID, in `Pending` state.
    #[must_use]
    pub const fn new(phone: String, name: String, is_coordinator: bool) -> Self {
        Self {
            volunteer_id: None,
            phone,
            name,
            is_coordinator,
            status: VolunteerStatus::Pending,
        }
    }

    /// Creates a `Volunteer` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        volunteer_id: i64,
        phone: String,
        name: String,
        is_coordinator: bool,
        status: VolunteerStatus,
    ) -> Self {
        Self {
            volunteer_id: Some(volunteer_id),
            phone,
            name,
            is_coordinator,
            status,
        }
    }

    /// Returns whether this volunteer may pass signup validation.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.status, VolunteerStatus::Approved)
    }
}

/// A single-day, single-category volunteering slot with fixed capacity.
///
/// At most one shift exists per `(date, category)` pair; the persistence
/// layer enforces this with a uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The canonical numeric identifier assigned by the database.
    pub shift_id: Option<i64>,
    /// The calendar day this shift covers.
    pub date: NaiveDate,
    /// The shift category.
    pub category: ShiftCategory,
    /// Maximum number of concurrent active signups (at least 1).
    pub capacity: i64,
}

impl Shift {
    /// Creates a new `Shift` without a persisted ID.
    #[must_use]
    pub const fn new(date: NaiveDate, category: ShiftCategory, capacity: i64) -> Self {
        Self {
            shift_id: None,
            date,
            category,
            capacity,
        }
    }

    /// Creates a `Shift` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        shift_id: i64,
        date: NaiveDate,
        category: ShiftCategory,
        capacity: i64,
    ) -> Self {
        Self {
            shift_id: Some(shift_id),
            date,
            category,
            capacity,
        }
    }
}

/// A volunteer's claim on a shift.
///
/// Signups are soft-deleted: dropping sets `dropped_at` and the row is
/// never removed, so historical counts remain auditable. A later signup
/// request for the same `(volunteer, shift)` pair reactivates the dropped
/// row with a fresh `signed_up_at` instead of inserting a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    /// The canonical numeric identifier assigned by the database.
    pub signup_id: Option<i64>,
    /// The volunteer who holds this signup.
    pub volunteer_id: i64,
    /// The shift this signup is for.
    pub shift_id: i64,
    /// When the signup was created (or last reactivated).
    pub signed_up_at: NaiveDateTime,
    /// When the signup was dropped, if it has been.
    pub dropped_at: Option<NaiveDateTime>,
}

impl Signup {
    /// Returns whether this signup counts toward quotas and capacity.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.dropped_at.is_none()
    }
}

/// Returns the seeded default capacity for a shift of the given category
/// on the given weekday.
///
/// Kakad shifts always default to capacity 1. Robe shifts take 4 slots on
/// Tuesday, Thursday, and Saturday, and 3 slots on the remaining days.
#[must_use]
pub const fn default_capacity(category: ShiftCategory, weekday: Weekday) -> i64 {
    match category {
        ShiftCategory::Kakad => 1,
        ShiftCategory::Robe => match weekday {
            Weekday::Tue | Weekday::Thu | Weekday::Sat => 4,
            _ => 3,
        },
    }
}

/// Returns the number of days in the month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let mut day: u32 = 28;
    while date.with_day(day + 1).is_some() {
        day += 1;
    }
    day
}
