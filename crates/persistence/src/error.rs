// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A stored row could not be converted back into a domain value.
    ReconstructionError(String),
    /// The requested resource was not found.
    NotFound(String),
    /// A volunteer with this phone number is already registered.
    DuplicatePhone(String),
    /// A shift already exists for this `(date, category)` pair.
    DuplicateShift {
        /// The shift date.
        date: String,
        /// The shift category.
        category: String,
    },
    /// An active signup already exists for this volunteer and shift.
    ///
    /// Surfaced either by the pre-insert check or by the storage
    /// uniqueness constraint when two requests race for the same pair.
    DuplicateSignup {
        /// The volunteer holding the existing signup.
        volunteer_id: i64,
        /// The shift the existing signup is for.
        shift_id: i64,
    },
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::ReconstructionError(msg) => write!(f, "Row reconstruction error: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DuplicatePhone(phone) => {
                write!(f, "A volunteer with phone '{phone}' is already registered")
            }
            Self::DuplicateShift { date, category } => {
                write!(f, "A {category} shift already exists on {date}")
            }
            Self::DuplicateSignup {
                volunteer_id,
                shift_id,
            } => {
                write!(
                    f,
                    "Volunteer {volunteer_id} already has an active signup for shift {shift_id}"
                )
            }
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
