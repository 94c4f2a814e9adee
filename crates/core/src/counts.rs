// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The counting contract the storage layer implements for the validator.

use crate::error::CoreError;
use seva_roster_domain::{Shift, ShiftCategory, VolunteerStatus};

/// Counting queries the validation orchestrator needs from storage.
///
/// Every count is scoped to the calendar month of the candidate shift's
/// date and excludes dropped signups. Methods take `&mut self` because
/// database adapters hold mutable connections.
///
/// The orchestrator fetches counts lazily: a mid-month validation never
/// touches the per-volunteer counts, and the Thursday count is only
/// requested when the candidate shift falls on a Thursday.
pub trait CountingProvider {
    /// Counts a volunteer's active signups in the given month, optionally
    /// restricted to one shift category.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn signup_count(
        &mut self,
        volunteer_id: i64,
        year: i32,
        month: u32,
        category: Option<ShiftCategory>,
    ) -> Result<i64, CoreError>;

    /// Counts a volunteer's active signups in the given month whose shift
    /// date falls on a Thursday.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn thursday_signup_count(
        &mut self,
        volunteer_id: i64,
        year: i32,
        month: u32,
    ) -> Result<i64, CoreError>;

    /// Counts a volunteer's active signups in the given month that were
    /// *created* during the Phase-2 window for that month.
    ///
    /// The window is `[month_start - 13 days, month_start - 7 days]`
    /// inclusive, compared by the calendar date of the signup's creation
    /// timestamp — not the shift date.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn phase2_window_signup_count(
        &mut self,
        volunteer_id: i64,
        year: i32,
        month: u32,
    ) -> Result<i64, CoreError>;

    /// Counts the active signups on a specific shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn shift_signup_count(&mut self, shift_id: i64) -> Result<i64, CoreError>;

    /// Looks up a shift's date, category, and capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn shift(&mut self, shift_id: i64) -> Result<Option<Shift>, CoreError>;

    /// Looks up a volunteer's approval status.
    ///
    /// Returns `None` when the volunteer does not exist or has been
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn volunteer_status(
        &mut self,
        volunteer_id: i64,
    ) -> Result<Option<VolunteerStatus>, CoreError>;
}
