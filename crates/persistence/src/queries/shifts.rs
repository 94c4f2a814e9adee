// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift lookups and month listings.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use seva_roster_domain::Shift;
use std::collections::HashMap;

use crate::diesel_schema::{shifts, signups};
use crate::error::PersistenceError;
use crate::queries::{month_prefix, parse_category, parse_date};

/// Converts a shift row into the domain type.
fn shift_from_row(row: (i64, String, String, i32)) -> Result<Shift, PersistenceError> {
    let (shift_id, date, category, capacity) = row;
    Ok(Shift::with_id(
        shift_id,
        parse_date(&date)?,
        parse_category(&category)?,
        i64::from(capacity),
    ))
}

backend_fn! {
/// Looks up a shift by canonical ID.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or the row cannot
/// be reconstructed.
pub fn get_shift(conn: &mut _, shift_id: i64) -> Result<Option<Shift>, PersistenceError> {
    let row: Option<(i64, String, String, i32)> = shifts::table
        .select((
            shifts::shift_id,
            shifts::date,
            shifts::category,
            shifts::capacity,
        ))
        .filter(shifts::shift_id.eq(shift_id))
        .first(conn)
        .optional()?;

    row.map(shift_from_row).transpose()
}
}

backend_fn! {
/// Looks up a shift by its `(date, category)` pair.
///
/// At most one shift exists per pair; the schema enforces uniqueness.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or the row cannot
/// be reconstructed.
pub fn get_shift_by_date_category(
    conn: &mut _,
    date: &str,
    category: &str,
) -> Result<Option<Shift>, PersistenceError> {
    let row: Option<(i64, String, String, i32)> = shifts::table
        .select((
            shifts::shift_id,
            shifts::date,
            shifts::category,
            shifts::capacity,
        ))
        .filter(shifts::date.eq(date))
        .filter(shifts::category.eq(category))
        .first(conn)
        .optional()?;

    row.map(shift_from_row).transpose()
}
}

backend_fn! {
/// Lists every shift in the given month, ordered by date then category.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a row cannot
/// be reconstructed.
pub fn list_shifts_in_month(
    conn: &mut _,
    year: i32,
    month: u32,
) -> Result<Vec<Shift>, PersistenceError> {
    let prefix: String = month_prefix(year, month);
    let rows: Vec<(i64, String, String, i32)> = shifts::table
        .select((
            shifts::shift_id,
            shifts::date,
            shifts::category,
            shifts::capacity,
        ))
        .filter(shifts::date.like(prefix))
        .order((shifts::date.asc(), shifts::category.asc()))
        .load(conn)?;

    rows.into_iter().map(shift_from_row).collect()
}
}

backend_fn! {
/// Lists every shift in the given month paired with its active signup
/// count, for the coordinator fill-status view.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a row cannot
/// be reconstructed.
pub fn month_fill(
    conn: &mut _,
    year: i32,
    month: u32,
) -> Result<Vec<(Shift, i64)>, PersistenceError> {
    let prefix: String = month_prefix(year, month);

    let shift_rows: Vec<(i64, String, String, i32)> = shifts::table
        .select((
            shifts::shift_id,
            shifts::date,
            shifts::category,
            shifts::capacity,
        ))
        .filter(shifts::date.like(prefix.clone()))
        .order((shifts::date.asc(), shifts::category.asc()))
        .load(conn)?;

    let active_shift_ids: Vec<i64> = signups::table
        .inner_join(shifts::table)
        .filter(signups::dropped_at.is_null())
        .filter(shifts::date.like(prefix))
        .select(signups::shift_id)
        .load(conn)?;

    let mut counts: HashMap<i64, i64> = HashMap::new();
    for shift_id in active_shift_ids {
        *counts.entry(shift_id).or_insert(0) += 1;
    }

    shift_rows
        .into_iter()
        .map(|row| {
            let count: i64 = counts.get(&row.0).copied().unwrap_or(0);
            Ok((shift_from_row(row)?, count))
        })
        .collect()
}
}
