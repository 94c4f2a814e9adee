// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::counts::CountingProvider;
use crate::error::CoreError;
use chrono::NaiveDate;
use seva_roster_domain::{Shift, ShiftCategory, VolunteerStatus};
use std::collections::HashMap;

/// In-memory counting provider for orchestrator tests.
///
/// Counts are set directly by each test; the provider never computes
/// them, so tests exercise exactly the orchestrator's fetch-and-check
/// logic.
#[derive(Debug, Default)]
pub struct FakeCounts {
    pub volunteers: HashMap<i64, VolunteerStatus>,
    pub shifts: HashMap<i64, Shift>,
    pub kakad_count: i64,
    pub robe_count: i64,
    pub total_count: i64,
    pub thursday_count: i64,
    pub phase2_count: i64,
    pub shift_signups: HashMap<i64, i64>,
}

impl FakeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_approved_volunteer(mut self, volunteer_id: i64) -> Self {
        self.volunteers.insert(volunteer_id, VolunteerStatus::Approved);
        self
    }

    pub fn with_volunteer(mut self, volunteer_id: i64, status: VolunteerStatus) -> Self {
        self.volunteers.insert(volunteer_id, status);
        self
    }

    pub fn with_shift(mut self, shift: Shift) -> Self {
        if let Some(shift_id) = shift.shift_id {
            self.shifts.insert(shift_id, shift);
        }
        self
    }
}

impl CountingProvider for FakeCounts {
    fn signup_count(
        &mut self,
        _volunteer_id: i64,
        _year: i32,
        _month: u32,
        category: Option<ShiftCategory>,
    ) -> Result<i64, CoreError> {
        Ok(match category {
            Some(ShiftCategory::Kakad) => self.kakad_count,
            Some(ShiftCategory::Robe) => self.robe_count,
            None => self.total_count,
        })
    }

    fn thursday_signup_count(
        &mut self,
        _volunteer_id: i64,
        _year: i32,
        _month: u32,
    ) -> Result<i64, CoreError> {
        Ok(self.thursday_count)
    }

    fn phase2_window_signup_count(
        &mut self,
        _volunteer_id: i64,
        _year: i32,
        _month: u32,
    ) -> Result<i64, CoreError> {
        Ok(self.phase2_count)
    }

    fn shift_signup_count(&mut self, shift_id: i64) -> Result<i64, CoreError> {
        Ok(self.shift_signups.get(&shift_id).copied().unwrap_or(0))
    }

    fn shift(&mut self, shift_id: i64) -> Result<Option<Shift>, CoreError> {
        Ok(self.shifts.get(&shift_id).cloned())
    }

    fn volunteer_status(
        &mut self,
        volunteer_id: i64,
    ) -> Result<Option<VolunteerStatus>, CoreError> {
        Ok(self.volunteers.get(&volunteer_id).copied())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn kakad_shift(shift_id: i64, shift_date: NaiveDate, capacity: i64) -> Shift {
    Shift::with_id(shift_id, shift_date, ShiftCategory::Kakad, capacity)
}

pub fn robe_shift(shift_id: i64, shift_date: NaiveDate, capacity: i64) -> Shift {
    Shift::with_id(shift_id, shift_date, ShiftCategory::Robe, capacity)
}
