// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Counting queries backing the signup validation engine.
//!
//! Every count excludes dropped signups (`dropped_at IS NULL`) and, where
//! month-scoped, is restricted to shifts whose date carries the month's
//! `YYYY-MM-` prefix. The weekday and creation-window filters are
//! finished in Rust so the SQL stays backend-agnostic.

use chrono::{Datelike, NaiveDate, Weekday};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::diesel_schema::{shifts, signups};
use crate::error::PersistenceError;
use crate::queries::{month_prefix, parse_date, timestamp_date};

backend_fn! {
/// Counts a volunteer's active signups in a month, optionally restricted
/// to one shift category.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn signup_count(
    conn: &mut _,
    volunteer_id: i64,
    year: i32,
    month: u32,
    category: Option<&str>,
) -> Result<i64, PersistenceError> {
    let prefix: String = month_prefix(year, month);

    let count: i64 = match category {
        Some(category) => signups::table
            .inner_join(shifts::table)
            .filter(signups::volunteer_id.eq(volunteer_id))
            .filter(signups::dropped_at.is_null())
            .filter(shifts::date.like(prefix))
            .filter(shifts::category.eq(category))
            .count()
            .get_result(conn)?,
        None => signups::table
            .inner_join(shifts::table)
            .filter(signups::volunteer_id.eq(volunteer_id))
            .filter(signups::dropped_at.is_null())
            .filter(shifts::date.like(prefix))
            .count()
            .get_result(conn)?,
    };

    Ok(count)
}
}

backend_fn! {
/// Counts a volunteer's active signups in a month whose shift date falls
/// on a Thursday.
///
/// The month filter runs in SQL; the weekday test runs in Rust because
/// date-function SQL differs across backends.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored date
/// cannot be parsed.
pub fn thursday_signup_count(
    conn: &mut _,
    volunteer_id: i64,
    year: i32,
    month: u32,
) -> Result<i64, PersistenceError> {
    let prefix: String = month_prefix(year, month);

    let dates: Vec<String> = signups::table
        .inner_join(shifts::table)
        .filter(signups::volunteer_id.eq(volunteer_id))
        .filter(signups::dropped_at.is_null())
        .filter(shifts::date.like(prefix))
        .select(shifts::date)
        .load(conn)?;

    let mut count: i64 = 0;
    for date in dates {
        if parse_date(&date)?.weekday() == Weekday::Thu {
            count += 1;
        }
    }

    Ok(count)
}
}

backend_fn! {
/// Counts a volunteer's active signups in a month that were created
/// during the Phase-2 window.
///
/// The window test compares the calendar date of `signed_up_at` — not
/// the shift date — against the inclusive `[window_start, window_end]`
/// bounds supplied by the caller.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// timestamp cannot be parsed.
pub fn phase2_window_signup_count(
    conn: &mut _,
    volunteer_id: i64,
    year: i32,
    month: u32,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Result<i64, PersistenceError> {
    let prefix: String = month_prefix(year, month);

    let signed_up_ats: Vec<String> = signups::table
        .inner_join(shifts::table)
        .filter(signups::volunteer_id.eq(volunteer_id))
        .filter(signups::dropped_at.is_null())
        .filter(shifts::date.like(prefix))
        .select(signups::signed_up_at)
        .load(conn)?;

    let mut count: i64 = 0;
    for signed_up_at in signed_up_ats {
        let signup_date: NaiveDate = timestamp_date(&signed_up_at)?;
        if signup_date >= window_start && signup_date <= window_end {
            count += 1;
        }
    }

    Ok(count)
}
}

backend_fn! {
/// Counts the active signups on a specific shift.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn shift_signup_count(conn: &mut _, shift_id: i64) -> Result<i64, PersistenceError> {
    let count: i64 = signups::table
        .filter(signups::shift_id.eq(shift_id))
        .filter(signups::dropped_at.is_null())
        .count()
        .get_result(conn)?;

    Ok(count)
}
}
