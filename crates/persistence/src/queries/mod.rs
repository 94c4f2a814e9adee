// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic query modules.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.
//! Queries that need a weekday or a creation-date window finish that
//! filtering in Rust after loading the candidate rows, so the query text
//! itself stays expressible in backend-agnostic Diesel DSL.
//!
//! ## Module Organization
//!
//! - `volunteers` — volunteer lookups
//! - `shifts` — shift lookups and month listings
//! - `signups` — signup row lookups and rosters
//! - `counts` — the counting queries backing the validation engine

pub mod counts;
pub mod shifts;
pub mod signups;
pub mod volunteers;

use crate::error::PersistenceError;
use chrono::{NaiveDate, NaiveDateTime};
use seva_roster_domain::{ShiftCategory, Volunteer, VolunteerStatus};
use std::str::FromStr;

/// Storage format for calendar dates.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format for timestamps.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the `LIKE` prefix matching every shift date in a month.
pub(crate) fn month_prefix(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}-%")
}

/// Parses a stored calendar date.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, PersistenceError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        PersistenceError::ReconstructionError(format!("Invalid stored date '{value}': {e}"))
    })
}

/// Parses a stored timestamp.
pub(crate) fn parse_timestamp(value: &str) -> Result<NaiveDateTime, PersistenceError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        PersistenceError::ReconstructionError(format!("Invalid stored timestamp '{value}': {e}"))
    })
}

/// Extracts the calendar date from a stored timestamp.
pub(crate) fn timestamp_date(value: &str) -> Result<NaiveDate, PersistenceError> {
    let date_part: &str = value.get(..10).ok_or_else(|| {
        PersistenceError::ReconstructionError(format!("Invalid stored timestamp '{value}'"))
    })?;
    parse_date(date_part)
}

/// Parses a stored shift category.
pub(crate) fn parse_category(value: &str) -> Result<ShiftCategory, PersistenceError> {
    ShiftCategory::from_str(value)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

/// Converts a volunteer row into the domain type.
pub(crate) fn volunteer_from_row(
    row: (i64, String, String, i32, String),
) -> Result<Volunteer, PersistenceError> {
    let (volunteer_id, phone, name, is_coordinator, status) = row;
    let status: VolunteerStatus = VolunteerStatus::from_str(&status)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
    Ok(Volunteer::with_id(
        volunteer_id,
        phone,
        name,
        is_coordinator != 0,
        status,
    ))
}
