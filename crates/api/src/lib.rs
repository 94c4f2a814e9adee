// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Seva Roster.
//!
//! Handlers here sit between protocol adapters (the HTTP server) and
//! the validation engine + persistence. They own request/response DTOs
//! and the translation of every lower-layer error into [`ApiError`].

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    approve_volunteer, create_shift, drop_signup, list_volunteers, month_status, my_shifts,
    register_volunteer, reject_volunteer, remove_volunteer, request_signup, seed_month,
};
pub use request_response::{
    CreateShiftRequest, CreateShiftResponse, DropSignupRequest, MonthStatusResponse,
    MyShiftsResponse, RegisterVolunteerRequest, RegisterVolunteerResponse, RosterEntry,
    SeedMonthResponse, ShiftFillInfo, SignupOutcome, SignupRequest, VolunteerInfo,
};
