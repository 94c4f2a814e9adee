// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::handlers;
use crate::request_response::RegisterVolunteerRequest;
use chrono::NaiveDate;
use seva_roster_persistence::Persistence;

pub fn persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Registers and approves a coordinator, returning its ID.
///
/// The first coordinator self-approves through persistence directly;
/// API-level approval needs an existing coordinator.
pub fn coordinator(persistence: &mut Persistence, phone: &str, name: &str) -> i64 {
    let response = handlers::register_volunteer(
        persistence,
        &RegisterVolunteerRequest {
            phone: phone.to_string(),
            name: name.to_string(),
            is_coordinator: true,
        },
    )
    .unwrap();
    persistence
        .approve_volunteer(response.volunteer_id, response.volunteer_id)
        .unwrap();
    response.volunteer_id
}

/// Registers a volunteer and approves them via a coordinator.
pub fn approved_volunteer(
    persistence: &mut Persistence,
    coordinator_id: i64,
    phone: &str,
    name: &str,
) -> i64 {
    let response = handlers::register_volunteer(
        persistence,
        &RegisterVolunteerRequest {
            phone: phone.to_string(),
            name: name.to_string(),
            is_coordinator: false,
        },
    )
    .unwrap();
    handlers::approve_volunteer(persistence, response.volunteer_id, coordinator_id).unwrap();
    response.volunteer_id
}
