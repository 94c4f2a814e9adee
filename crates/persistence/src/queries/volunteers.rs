// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Volunteer lookups.
//!
//! Removed volunteers (non-null `removed_at`) never resolve; their rows
//! stay behind for history only.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use seva_roster_domain::Volunteer;

use crate::diesel_schema::volunteers;
use crate::error::PersistenceError;
use crate::queries::volunteer_from_row;

backend_fn! {
/// Looks up an active volunteer by canonical ID.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or the row cannot
/// be reconstructed.
pub fn get_volunteer(
    conn: &mut _,
    volunteer_id: i64,
) -> Result<Option<Volunteer>, PersistenceError> {
    let row: Option<(i64, String, String, i32, String)> = volunteers::table
        .select((
            volunteers::volunteer_id,
            volunteers::phone,
            volunteers::name,
            volunteers::is_coordinator,
            volunteers::status,
        ))
        .filter(volunteers::volunteer_id.eq(volunteer_id))
        .filter(volunteers::removed_at.is_null())
        .first(conn)
        .optional()?;

    row.map(volunteer_from_row).transpose()
}
}

backend_fn! {
/// Looks up an active volunteer by phone number.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or the row cannot
/// be reconstructed.
pub fn get_volunteer_by_phone(
    conn: &mut _,
    phone: &str,
) -> Result<Option<Volunteer>, PersistenceError> {
    let row: Option<(i64, String, String, i32, String)> = volunteers::table
        .select((
            volunteers::volunteer_id,
            volunteers::phone,
            volunteers::name,
            volunteers::is_coordinator,
            volunteers::status,
        ))
        .filter(volunteers::phone.eq(phone))
        .filter(volunteers::removed_at.is_null())
        .first(conn)
        .optional()?;

    row.map(volunteer_from_row).transpose()
}
}

backend_fn! {
/// Lists active volunteers, optionally filtered by status.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a row cannot
/// be reconstructed.
pub fn list_volunteers(
    conn: &mut _,
    status: Option<&str>,
) -> Result<Vec<Volunteer>, PersistenceError> {
    let rows: Vec<(i64, String, String, i32, String)> = match status {
        Some(status) => volunteers::table
            .select((
                volunteers::volunteer_id,
                volunteers::phone,
                volunteers::name,
                volunteers::is_coordinator,
                volunteers::status,
            ))
            .filter(volunteers::removed_at.is_null())
            .filter(volunteers::status.eq(status))
            .order(volunteers::volunteer_id.asc())
            .load(conn)?,
        None => volunteers::table
            .select((
                volunteers::volunteer_id,
                volunteers::phone,
                volunteers::name,
                volunteers::is_coordinator,
                volunteers::status,
            ))
            .filter(volunteers::removed_at.is_null())
            .order(volunteers::volunteer_id.asc())
            .load(conn)?,
    };

    rows.into_iter().map(volunteer_from_row).collect()
}
}
