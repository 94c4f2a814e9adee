// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use seva_roster::CoreError;
use seva_roster_domain::DomainError;
use seva_roster_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent
/// the API contract. Rule denials are NOT errors: they come back as
/// data in [`crate::SignupOutcome::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The acting volunteer lacks coordinator privileges.
    Unauthorized {
        /// The action that was attempted.
        action: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { action } => {
                write!(f, "Unauthorized: '{action}' requires a coordinator")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidCategory(value) => ApiError::InvalidInput {
            field: String::from("category"),
            message: format!("Unknown shift category '{value}'"),
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown volunteer status '{value}'"),
        },
        DomainError::InvalidPhone(msg) => ApiError::InvalidInput {
            field: String::from("phone"),
            message: msg,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: format!("Invalid capacity: {capacity}. Must be at least 1"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::ShiftNotFound(shift_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift"),
            message: format!("Shift {shift_id} does not exist"),
        },
        CoreError::Storage(msg) => ApiError::Internal {
            message: format!("Storage error: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message,
        },
        PersistenceError::DuplicatePhone(phone) => ApiError::DomainRuleViolation {
            rule: String::from("unique_phone"),
            message: format!("A volunteer with phone '{phone}' is already registered"),
        },
        PersistenceError::DuplicateShift { date, category } => ApiError::DomainRuleViolation {
            rule: String::from("unique_shift"),
            message: format!("A {category} shift already exists on {date}"),
        },
        PersistenceError::DuplicateSignup { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_signup"),
            message: String::from("You are already signed up for this shift"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
