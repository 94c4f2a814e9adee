// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod phase;
mod rules;
mod types;
mod validation;

pub use error::DomainError;
pub use phase::{SignupPhase, classify_phase, month_start_of, phase2_window};
pub use rules::{
    KAKAD_LIMIT, PHASE1_TOTAL_LIMIT, PHASE2_ADDITIONAL_LIMIT, ROBE_LIMIT, RUNNING_TOTAL_LIMIT,
    RuleResult, THURSDAY_LIMIT, check_capacity, check_kakad_limit, check_phase1_total,
    check_phase2_additional, check_robe_limit, check_running_total, check_thursday_limit,
};
pub use types::{
    Shift, ShiftCategory, Signup, Volunteer, VolunteerStatus, days_in_month, default_capacity,
};
pub use validation::{validate_shift_capacity, validate_volunteer_fields};
