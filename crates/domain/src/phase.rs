// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Signup phase classification.
//!
//! Eligibility for a target month is governed by a time-windowed phase
//! relative to the first day of that month:
//!
//! - 14+ days before the month starts → [`SignupPhase::Blocked`]
//! - 7–13 days before → [`SignupPhase::Phase1`]
//! - 1–6 days before → [`SignupPhase::Phase2`]
//! - on or after the month start → [`SignupPhase::MidMonth`]
//!
//! ## Invariants
//!
//! - Classification is pure and total: every `(today, month_start)` pair
//!   maps to exactly one phase.
//! - Phases only relax as the month approaches; the effective signup
//!   ceiling never decreases from one phase to the next.
//! - The Phase-2 signup window used for the "additional signups" quota is
//!   `[month_start - 13 days, month_start - 7 days]` inclusive, compared
//!   against the calendar date a signup was *created*, not the shift date.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A time-windowed eligibility regime relative to a target month's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupPhase {
    /// Signup window not yet open (14+ days before the month starts).
    Blocked,
    /// Earliest, most restrictive window (7–13 days before).
    Phase1,
    /// Relaxed-ceiling window (1–6 days before).
    Phase2,
    /// Month has started; only shift capacity is enforced.
    MidMonth,
}

impl SignupPhase {
    /// Converts this phase to a short display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::Phase1 => "phase_1",
            Self::Phase2 => "phase_2",
            Self::MidMonth => "mid_month",
        }
    }

    /// Returns whether per-volunteer quota rules apply in this phase.
    ///
    /// Capacity is enforced independently of this flag.
    #[must_use]
    pub const fn enforces_quotas(&self) -> bool {
        matches!(self, Self::Phase1 | Self::Phase2)
    }
}

impl std::fmt::Display for SignupPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies the signup phase for a target month.
///
/// `days_before = month_start - today` in whole days; the value may be
/// negative once the month has started.
///
/// # Arguments
///
/// * `today` - The date the signup attempt is being made
/// * `month_start` - The first calendar day of the shift's month
#[must_use]
pub fn classify_phase(today: NaiveDate, month_start: NaiveDate) -> SignupPhase {
    let days_before: i64 = (month_start - today).num_days();
    if days_before >= 14 {
        SignupPhase::Blocked
    } else if days_before >= 7 {
        SignupPhase::Phase1
    } else if days_before > 0 {
        SignupPhase::Phase2
    } else {
        SignupPhase::MidMonth
    }
}

/// Returns the first calendar day of the month containing `date`.
#[must_use]
pub fn month_start_of(date: NaiveDate) -> NaiveDate {
    // day0() days back from any valid date always lands on the 1st.
    date.checked_sub_days(Days::new(u64::from(date.day0())))
        .unwrap_or(date)
}

/// Returns the inclusive Phase-2 signup window for a target month.
///
/// The window is `[month_start - 13 days, month_start - 7 days]`. A
/// signup consumes the Phase-2 "additional" quota when the calendar date
/// of its creation timestamp falls inside this window.
#[must_use]
pub fn phase2_window(month_start: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start: NaiveDate = month_start
        .checked_sub_days(Days::new(13))
        .unwrap_or(month_start);
    let end: NaiveDate = month_start
        .checked_sub_days(Days::new(7))
        .unwrap_or(month_start);
    (start, end)
}
