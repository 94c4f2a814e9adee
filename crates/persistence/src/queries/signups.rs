// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Signup row lookups and rosters.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use seva_roster_domain::{Shift, Signup};

use crate::diesel_schema::{shifts, signups};
use crate::error::PersistenceError;
use crate::queries::{month_prefix, parse_category, parse_date, parse_timestamp};

/// Converts a signup row into the domain type.
fn signup_from_row(
    row: (i64, i64, i64, String, Option<String>),
) -> Result<Signup, PersistenceError> {
    let (signup_id, volunteer_id, shift_id, signed_up_at, dropped_at) = row;
    Ok(Signup {
        signup_id: Some(signup_id),
        volunteer_id,
        shift_id,
        signed_up_at: parse_timestamp(&signed_up_at)?,
        dropped_at: dropped_at.as_deref().map(parse_timestamp).transpose()?,
    })
}

backend_fn! {
/// Looks up the signup row for a `(volunteer, shift)` pair, dropped or
/// not.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or the row cannot
/// be reconstructed.
pub fn get_signup(
    conn: &mut _,
    volunteer_id: i64,
    shift_id: i64,
) -> Result<Option<Signup>, PersistenceError> {
    let row: Option<(i64, i64, i64, String, Option<String>)> = signups::table
        .select((
            signups::signup_id,
            signups::volunteer_id,
            signups::shift_id,
            signups::signed_up_at,
            signups::dropped_at,
        ))
        .filter(signups::volunteer_id.eq(volunteer_id))
        .filter(signups::shift_id.eq(shift_id))
        .first(conn)
        .optional()?;

    row.map(signup_from_row).transpose()
}
}

backend_fn! {
/// Lists a volunteer's active signups in a month, paired with their
/// shifts and ordered by shift date.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a row cannot
/// be reconstructed.
pub fn list_volunteer_month(
    conn: &mut _,
    volunteer_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<(Signup, Shift)>, PersistenceError> {
    let prefix: String = month_prefix(year, month);

    #[allow(clippy::type_complexity)]
    let rows: Vec<(i64, i64, i64, String, Option<String>, String, String, i32)> = signups::table
        .inner_join(shifts::table)
        .filter(signups::volunteer_id.eq(volunteer_id))
        .filter(signups::dropped_at.is_null())
        .filter(shifts::date.like(prefix))
        .select((
            signups::signup_id,
            signups::volunteer_id,
            signups::shift_id,
            signups::signed_up_at,
            signups::dropped_at,
            shifts::date,
            shifts::category,
            shifts::capacity,
        ))
        .order((shifts::date.asc(), shifts::category.asc()))
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let (signup_id, vol_id, shift_id, signed_up_at, dropped_at, date, category, capacity) =
                row;
            let signup: Signup =
                signup_from_row((signup_id, vol_id, shift_id, signed_up_at, dropped_at))?;
            let shift: Shift = Shift::with_id(
                shift_id,
                parse_date(&date)?,
                parse_category(&category)?,
                i64::from(capacity),
            );
            Ok((signup, shift))
        })
        .collect()
}
}

backend_fn! {
/// Lists the active signups for a shift, ordered by signup time.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a row cannot
/// be reconstructed.
pub fn list_active_for_shift(
    conn: &mut _,
    shift_id: i64,
) -> Result<Vec<Signup>, PersistenceError> {
    let rows: Vec<(i64, i64, i64, String, Option<String>)> = signups::table
        .select((
            signups::signup_id,
            signups::volunteer_id,
            signups::shift_id,
            signups::signed_up_at,
            signups::dropped_at,
        ))
        .filter(signups::shift_id.eq(shift_id))
        .filter(signups::dropped_at.is_null())
        .order(signups::signed_up_at.asc())
        .load(conn)?;

    rows.into_iter().map(signup_from_row).collect()
}
}
