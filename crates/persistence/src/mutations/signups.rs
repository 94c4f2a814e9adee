// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Signup creation and drop mutations.
//!
//! A `(volunteer, shift)` pair owns at most one row for all time. A
//! drop sets `dropped_at`; a later signup for the same pair reactivates
//! that row with a fresh `signed_up_at` instead of inserting a second
//! one. The uniqueness constraint backs this up when two concurrent
//! requests pass validation for the same pair: the loser's insert
//! surfaces as `DuplicateSignup` rather than corrupting the roster.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::signups;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a signup, reactivating a previously dropped row if one
/// exists for the `(volunteer, shift)` pair.
///
/// Callers must have run signup validation first; this mutation only
/// enforces the one-active-signup-per-pair invariant.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `volunteer_id` - The volunteer signing up
/// * `shift_id` - The target shift
/// * `signed_up_at` - Creation timestamp (also used on reactivation)
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateSignup` if an active signup
/// already exists for the pair, whether seen by the pre-check or
/// surfaced by the uniqueness constraint.
pub fn create_signup(
    conn: &mut _,
    volunteer_id: i64,
    shift_id: i64,
    signed_up_at: &str,
) -> Result<i64, PersistenceError> {
    debug!(volunteer_id, shift_id, "Creating signup");

    let existing: Option<(i64, Option<String>)> = signups::table
        .select((signups::signup_id, signups::dropped_at))
        .filter(signups::volunteer_id.eq(volunteer_id))
        .filter(signups::shift_id.eq(shift_id))
        .first(conn)
        .optional()?;

    if let Some((signup_id, dropped_at)) = existing {
        if dropped_at.is_none() {
            return Err(PersistenceError::DuplicateSignup {
                volunteer_id,
                shift_id,
            });
        }

        // Reactivate the dropped row with a fresh signup timestamp.
        diesel::update(signups::table)
            .filter(signups::signup_id.eq(signup_id))
            .set((
                signups::dropped_at.eq(None::<String>),
                signups::signed_up_at.eq(signed_up_at),
            ))
            .execute(conn)?;

        info!(signup_id, volunteer_id, shift_id, "Signup reactivated");
        return Ok(signup_id);
    }

    let insert_result = diesel::insert_into(signups::table)
        .values((
            signups::volunteer_id.eq(volunteer_id),
            signups::shift_id.eq(shift_id),
            signups::signed_up_at.eq(signed_up_at),
        ))
        .execute(conn);

    match insert_result {
        Ok(_) => {
            let signup_id: i64 = conn.get_last_insert_rowid()?;
            info!(signup_id, volunteer_id, shift_id, "Signup created");
            Ok(signup_id)
        }
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(PersistenceError::DuplicateSignup {
                volunteer_id,
                shift_id,
            })
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Drops a volunteer's active signup for a shift by setting
/// `dropped_at`.
///
/// The row is never deleted, so historical counts stay auditable.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the pair has no active
/// signup.
pub fn drop_signup(
    conn: &mut _,
    volunteer_id: i64,
    shift_id: i64,
    dropped_at: &str,
) -> Result<(), PersistenceError> {
    debug!(volunteer_id, shift_id, "Dropping signup");

    let updated: usize = diesel::update(signups::table)
        .filter(signups::volunteer_id.eq(volunteer_id))
        .filter(signups::shift_id.eq(shift_id))
        .filter(signups::dropped_at.is_null())
        .set(signups::dropped_at.eq(dropped_at))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "No active signup for volunteer {volunteer_id} on shift {shift_id}"
        )));
    }

    info!(volunteer_id, shift_id, "Signup dropped");
    Ok(())
}
}
