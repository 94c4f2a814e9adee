// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BackendConnection, Persistence, mutations};
use chrono::NaiveDate;
use diesel::SqliteConnection;
use seva_roster_domain::ShiftCategory;

/// Creates a fresh in-memory persistence adapter.
pub fn persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates and approves a volunteer, returning its ID.
pub fn approved_volunteer(persistence: &mut Persistence, phone: &str, name: &str) -> i64 {
    let volunteer_id: i64 = persistence.create_volunteer(phone, name, false).unwrap();
    persistence.approve_volunteer(volunteer_id, 1).unwrap();
    volunteer_id
}

/// Creates a shift, returning its ID.
pub fn shift_on(
    persistence: &mut Persistence,
    shift_date: NaiveDate,
    category: ShiftCategory,
    capacity: i64,
) -> i64 {
    persistence.create_shift(shift_date, category, capacity).unwrap()
}

/// Unwraps the adapter's `SQLite` connection for direct backend calls.
fn sqlite_conn(persistence: &mut Persistence) -> &mut SqliteConnection {
    match &mut persistence.conn {
        BackendConnection::Sqlite(conn) => conn,
        BackendConnection::Mysql(_) => panic!("test helper expects the SQLite backend"),
    }
}

/// Creates a signup with an explicit `signed_up_at` timestamp.
///
/// Goes through the backend function directly so tests can pin creation
/// times for the Phase-2 window queries.
pub fn signup_at(
    persistence: &mut Persistence,
    volunteer_id: i64,
    shift_id: i64,
    signed_up_at: &str,
) -> i64 {
    mutations::signups::create_signup_sqlite(
        sqlite_conn(persistence),
        volunteer_id,
        shift_id,
        signed_up_at,
    )
    .unwrap()
}
