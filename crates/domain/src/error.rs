// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Shift category string is not one of the two fixed categories.
    InvalidCategory(String),
    /// Volunteer status string is not a known status.
    InvalidStatus(String),
    /// Volunteer phone number is empty or invalid.
    InvalidPhone(String),
    /// Volunteer name is empty or invalid.
    InvalidName(String),
    /// Shift capacity is below the minimum of 1.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: i64,
    },
    /// Failed to parse a date or timestamp from a stored string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCategory(value) => {
                write!(
                    f,
                    "Invalid shift category '{value}': must be 'kakad' or 'robe'"
                )
            }
            Self::InvalidStatus(value) => {
                write!(
                    f,
                    "Invalid volunteer status '{value}': must be 'pending', 'approved', or 'rejected'"
                )
            }
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be at least 1")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
