// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift creation mutations.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::shifts;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new shift.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The shift's calendar date (ISO 8601)
/// * `category` - The shift category string (`kakad` or `robe`)
/// * `capacity` - Maximum concurrent active signups
/// * `created_at` - Creation timestamp
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateShift` if a shift already exists
/// for the `(date, category)` pair.
pub fn create_shift(
    conn: &mut _,
    date: &str,
    category: &str,
    capacity: i32,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    info!(date, category, capacity, "Creating shift");

    let insert_result = diesel::insert_into(shifts::table)
        .values((
            shifts::date.eq(date),
            shifts::category.eq(category),
            shifts::capacity.eq(capacity),
            shifts::created_at.eq(created_at),
        ))
        .execute(conn);

    match insert_result {
        Ok(_) => {
            let shift_id: i64 = conn.get_last_insert_rowid()?;
            info!(shift_id, "Shift created");
            Ok(shift_id)
        }
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(PersistenceError::DuplicateShift {
                date: date.to_string(),
                category: category.to_string(),
            })
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
