// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Volunteer registration and approval lifecycle mutations.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::volunteers;
use crate::error::PersistenceError;
use seva_roster_domain::VolunteerStatus;

backend_fn! {
/// Creates a new volunteer in the `pending` state.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `phone` - The volunteer's phone number (unique)
/// * `name` - The volunteer's display name
/// * `is_coordinator` - Whether the volunteer has coordinator privileges
/// * `requested_at` - Registration timestamp
///
/// # Errors
///
/// Returns `PersistenceError::DuplicatePhone` if the phone number is
/// already registered.
pub fn create_volunteer(
    conn: &mut _,
    phone: &str,
    name: &str,
    is_coordinator: bool,
    requested_at: &str,
) -> Result<i64, PersistenceError> {
    info!(phone, name, is_coordinator, "Creating volunteer");

    let insert_result = diesel::insert_into(volunteers::table)
        .values((
            volunteers::phone.eq(phone),
            volunteers::name.eq(name),
            volunteers::is_coordinator.eq(i32::from(is_coordinator)),
            volunteers::status.eq(VolunteerStatus::Pending.as_str()),
            volunteers::requested_at.eq(requested_at),
            volunteers::created_at.eq(requested_at),
        ))
        .execute(conn);

    match insert_result {
        Ok(_) => {
            let volunteer_id: i64 = conn.get_last_insert_rowid()?;
            info!(volunteer_id, "Volunteer created");
            Ok(volunteer_id)
        }
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(PersistenceError::DuplicatePhone(phone.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Approves a volunteer, recording the approver and timestamp.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no active volunteer has the
/// given ID.
pub fn approve_volunteer(
    conn: &mut _,
    volunteer_id: i64,
    approver_id: i64,
    approved_at: &str,
) -> Result<(), PersistenceError> {
    info!(volunteer_id, approver_id, "Approving volunteer");

    let updated: usize = diesel::update(volunteers::table)
        .filter(volunteers::volunteer_id.eq(volunteer_id))
        .filter(volunteers::removed_at.is_null())
        .set((
            volunteers::status.eq(VolunteerStatus::Approved.as_str()),
            volunteers::approved_at.eq(approved_at),
            volunteers::approved_by.eq(approver_id),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Volunteer {volunteer_id} does not exist"
        )));
    }
    Ok(())
}
}

backend_fn! {
/// Rejects a volunteer.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no active volunteer has the
/// given ID.
pub fn reject_volunteer(conn: &mut _, volunteer_id: i64) -> Result<(), PersistenceError> {
    info!(volunteer_id, "Rejecting volunteer");

    let updated: usize = diesel::update(volunteers::table)
        .filter(volunteers::volunteer_id.eq(volunteer_id))
        .filter(volunteers::removed_at.is_null())
        .set(volunteers::status.eq(VolunteerStatus::Rejected.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Volunteer {volunteer_id} does not exist"
        )));
    }
    Ok(())
}
}

backend_fn! {
/// Soft-removes a volunteer by setting `removed_at`.
///
/// The row is never deleted, so historical signups keep their owner.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no active volunteer has the
/// given ID.
pub fn remove_volunteer(
    conn: &mut _,
    volunteer_id: i64,
    removed_at: &str,
) -> Result<(), PersistenceError> {
    info!(volunteer_id, "Removing volunteer");

    let updated: usize = diesel::update(volunteers::table)
        .filter(volunteers::volunteer_id.eq(volunteer_id))
        .filter(volunteers::removed_at.is_null())
        .set(volunteers::removed_at.eq(removed_at))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Volunteer {volunteer_id} does not exist"
        )));
    }
    Ok(())
}
}
